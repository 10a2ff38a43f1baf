//! Resource abstraction for the generic list controller
//!
//! One trait captures what the controller needs from a record: its identity,
//! its resource label (filenames, log targets), and the shape of its
//! in-place patch. Resources without an update operation use `NoPatch`.

use shared::{ContactMessage, MenuItem, Order, OrderStatus};

/// A record managed by a resource list controller
pub trait AdminRecord: Clone + Send + Sync + 'static {
    /// In-place mutation payload; `NoPatch` for resources with none
    type Patch: Clone + Send + Sync + std::fmt::Debug + 'static;

    /// Resource label used for export filenames and log targets
    const RESOURCE: &'static str;

    fn id(&self) -> &str;

    /// Apply a confirmed patch to the one matching local record
    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Patch type for resources that have no in-place update operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPatch;

impl AdminRecord for MenuItem {
    type Patch = NoPatch;
    const RESOURCE: &'static str = "menu_items";

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, _patch: &NoPatch) {}
}

impl AdminRecord for Order {
    type Patch = OrderStatus;
    const RESOURCE: &'static str = "orders";

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: &OrderStatus) {
        self.status = *patch;
    }
}

impl AdminRecord for ContactMessage {
    type Patch = NoPatch;
    const RESOURCE: &'static str = "contact_messages";

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, _patch: &NoPatch) {}
}
