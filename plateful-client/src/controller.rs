//! Resource list controller
//!
//! One generic controller owns the local collection for one resource:
//! fetch-on-construction, three-phase confirmed delete, in-place patch,
//! and a pure four-way render derivation. Gateway calls run as spawned
//! tasks; completion events come back over a channel and are applied by
//! the reducer, so a UI loop polling the controller never blocks on the
//! network. Dropping the controller cancels whatever is still in flight.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::user_message;
use crate::export::{ExportResult, Exportable, export_csv};
use crate::gateway::ResourceGateway;
use crate::resource::AdminRecord;
use crate::ClientResult;

/// Notice raised when a mutation arrives before the first successful load.
/// Mutations are rejected until the collection is real; see DESIGN.md.
const NOT_READY_NOTICE: &str = "list is still loading, try again in a moment";

/// Completion event from a spawned gateway call
#[derive(Debug)]
pub enum ListEvent<T: AdminRecord> {
    Loaded(Vec<T>),
    LoadFailed(String),
    Deleted(String),
    DeleteFailed(String),
    Patched { id: String, patch: T::Patch },
    PatchFailed(String),
}

/// Pure render derivation of (collection, loading, error).
///
/// Exactly one variant applies: loading beats a stale error, and a
/// non-empty collection always suppresses the empty row.
#[derive(Debug)]
pub enum TableBody<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Rows(&'a [T]),
}

/// Generic resource list controller
///
/// Must be constructed inside a tokio runtime: the initial fetch is
/// spawned immediately, so the state is `(loading=true, error=None,
/// collection=[])` until that fetch resolves.
pub struct ResourceController<T: AdminRecord> {
    gateway: Arc<dyn ResourceGateway<T>>,
    records: Vec<T>,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    pending_delete: Option<String>,
    ready: bool,
    events_tx: mpsc::UnboundedSender<ListEvent<T>>,
    events_rx: mpsc::UnboundedReceiver<ListEvent<T>>,
    cancel: CancellationToken,
}

impl<T: AdminRecord> ResourceController<T> {
    pub fn new(gateway: Arc<dyn ResourceGateway<T>>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            gateway,
            records: Vec::new(),
            loading: false,
            error: None,
            notice: None,
            pending_delete: None,
            ready: false,
            events_tx,
            events_rx,
            cancel: CancellationToken::new(),
        };
        controller.refresh();
        controller
    }

    /// Re-fetch the whole collection
    pub fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = gateway.list() => {
                    let event = match result {
                        Ok(records) => ListEvent::Loaded(records),
                        Err(error) => {
                            tracing::warn!(resource = T::RESOURCE, %error, "list fetch failed");
                            ListEvent::LoadFailed(user_message(&error))
                        }
                    };
                    let _ = tx.send(event);
                }
            }
        });
    }

    /// Record a delete target pending user confirmation. No network call
    /// happens until [`confirm_delete`](Self::confirm_delete).
    ///
    /// Returns false (with a notice) when the first load has not landed yet.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if !self.ready {
            self.notice = Some(NOT_READY_NOTICE.to_string());
            return false;
        }
        self.pending_delete = Some(id.to_string());
        true
    }

    /// The user declined: forget the target, touch nothing else
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The user confirmed: issue the DELETE for the pending target.
    ///
    /// Membership is deliberately not checked locally: deleting an id the
    /// server no longer has must fail per the server contract.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = gateway.delete(&id) => {
                    let event = match result {
                        Ok(()) => ListEvent::Deleted(id),
                        Err(error) => {
                            tracing::warn!(resource = T::RESOURCE, %id, %error, "delete failed");
                            ListEvent::DeleteFailed(user_message(&error))
                        }
                    };
                    let _ = tx.send(event);
                }
            }
        });
    }

    /// Issue an in-place patch (order status updates)
    pub fn request_patch(&mut self, id: &str, patch: T::Patch) {
        if !self.ready {
            self.notice = Some(NOT_READY_NOTICE.to_string());
            return;
        }

        let id = id.to_string();
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = gateway.patch(&id, &patch) => {
                    let event = match result {
                        Ok(()) => ListEvent::Patched { id, patch },
                        Err(error) => {
                            tracing::warn!(resource = T::RESOURCE, %id, %error, "patch failed");
                            ListEvent::PatchFailed(user_message(&error))
                        }
                    };
                    let _ = tx.send(event);
                }
            }
        });
    }

    /// Drain and apply all completed events; returns how many were applied
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Await the next completion event and apply it
    pub async fn pump(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: ListEvent<T>) {
        match event {
            ListEvent::Loaded(records) => {
                self.records = records;
                self.loading = false;
                self.error = None;
                self.ready = true;
            }
            ListEvent::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ListEvent::Deleted(id) => {
                self.records.retain(|record| record.id() != id);
            }
            ListEvent::Patched { id, patch } => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
                    record.apply_patch(&patch);
                }
            }
            ListEvent::DeleteFailed(message) | ListEvent::PatchFailed(message) => {
                self.notice = Some(message);
            }
        }
    }

    /// Render derivation: exactly one of Loading / Error / Empty / Rows
    pub fn rows(&self) -> TableBody<'_, T> {
        if self.loading {
            TableBody::Loading
        } else if let Some(error) = &self.error {
            TableBody::Error(error)
        } else if self.records.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(&self.records)
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once the first fetch has succeeded
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// One-shot blocking notice (mutation failures, rejected early
    /// mutations); taking it clears it
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

impl<T: AdminRecord + Exportable> ResourceController<T> {
    /// Project the current local collection into the report artifact.
    /// Never touches the network.
    pub fn export(&self) -> ClientResult<ExportResult> {
        export_csv(&self.records)
    }
}

impl<T: AdminRecord> Drop for ResourceController<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
