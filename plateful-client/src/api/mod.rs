//! Typed endpoint wrappers per resource
//!
//! Thin structs over [`HttpClient`] implementing [`ResourceGateway`] for
//! their record type. Per-operation fallback messages live here so a server
//! that answers without a `message` still produces a useful notice.

mod contacts;
mod menu;
mod orders;

pub use contacts::ContactApi;
pub use menu::{ImagePart, MenuApi};
pub use orders::OrderApi;
