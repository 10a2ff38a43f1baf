//! Gateway trait consumed by the resource list controllers
//!
//! The trait is the seam between controllers and the network: the console
//! wires in the HTTP implementations from `api`, tests wire in recording
//! mocks.

use crate::error::{ClientError, ClientResult};
use crate::resource::AdminRecord;
use async_trait::async_trait;

/// Remote operations for one resource type
#[async_trait]
pub trait ResourceGateway<T: AdminRecord>: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> ClientResult<Vec<T>>;

    /// Delete by id
    async fn delete(&self, id: &str) -> ClientResult<()>;

    /// Patch a record in place; resources without an update operation keep
    /// the default
    async fn patch(&self, _id: &str, _patch: &T::Patch) -> ClientResult<()> {
        Err(ClientError::Unsupported)
    }
}
