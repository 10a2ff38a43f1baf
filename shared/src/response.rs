//! API response envelopes
//!
//! The backend is not uniform: some endpoints wrap lists in `{data: [...]}`,
//! some return a bare array, and mutation acks carry `{success, message?}`
//! where `success` may be omitted entirely. These types absorb that variance
//! so callers never branch on envelope shape.

use serde::{Deserialize, Serialize};

/// Mutation acknowledgement: `{success, message?}`
///
/// A missing `success` field counts as success; some endpoints only send a
/// body on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Ack {
    /// Failure message, if the ack represents a failure with one attached
    pub fn failure_message(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            self.message.as_deref().filter(|m| !m.trim().is_empty())
        }
    }
}

/// List response body: either a bare array or an envelope with a data field
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Wrapped {
        #[serde(default = "default_true")]
        success: bool,
        data: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Unwrap into the record list regardless of envelope shape
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Wrapped { data, .. } => data,
            ListPayload::Bare(items) => items,
        }
    }

    /// `success: false` on a wrapped list is an application-level failure
    pub fn is_success(&self) -> bool {
        match self {
            ListPayload::Wrapped { success, .. } => *success,
            ListPayload::Bare(_) => true,
        }
    }
}
