//! Plateful Client - data synchronization layer for the admin console
//!
//! One generic resource list controller (fetch-on-mount, confirmed delete,
//! in-place status patch, pure render derivation) over an HTTP gateway with
//! defensive response decoding, plus the tabular report exporter and the
//! session token store.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod gateway;
pub mod http;
pub mod resource;
pub mod session;

pub use api::{ContactApi, ImagePart, MenuApi, OrderApi};
pub use config::ClientConfig;
pub use controller::{ListEvent, ResourceController, TableBody};
pub use error::{ClientError, ClientResult};
pub use export::{ExportResult, Exportable, export_csv};
pub use gateway::ResourceGateway;
pub use http::HttpClient;
pub use resource::{AdminRecord, NoPatch};
pub use session::{SessionStore, StoredSession};
