//! Shared types for the Plateful admin console
//!
//! Wire models for the three managed resources, the response envelopes the
//! backend speaks, and render-time helpers shared by the client library and
//! the console binary.

pub mod models;
pub mod payment;
pub mod response;
pub mod time;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Category, ContactMessage, MenuItem, MenuItemDraft, Order, OrderItem, OrderStatus,
};
pub use payment::PaymentKind;
pub use response::{Ack, ListPayload};
