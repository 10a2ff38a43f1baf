//! Resource models
//!
//! Flat records as the backend serves them. Field names follow the wire
//! contract (camelCase with Mongo-style `_id` aliases accepted on input).

mod contact;
mod menu_item;
mod order;

pub use contact::ContactMessage;
pub use menu_item::{Category, MenuItem, MenuItemDraft};
pub use order::{Order, OrderItem, OrderStatus, OrderStatusUpdate};
