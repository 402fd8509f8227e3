//! Error type for upstream NASA API calls

use serde_json::Value;
use thiserror::Error;

/// Failure half of the result envelope returned by every upstream operation.
///
/// Carries the operation's fixed human-readable label plus whatever the
/// upstream or the transport reported. Constructed only inside the client;
/// no other error type ever crosses the client boundary.
#[derive(Debug, Error)]
#[error("{label}: {details}")]
pub struct NasaError {
    label: &'static str,
    details: Value,
}

impl NasaError {
    /// Wraps a transport-level failure (connect, timeout, body decode)
    pub(crate) fn transport(label: &'static str, err: &reqwest::Error) -> Self {
        Self {
            label,
            details: Value::String(err.to_string()),
        }
    }

    /// Wraps a non-2xx upstream response, keeping the JSON error body when
    /// the upstream sent one and falling back to the raw text otherwise
    pub(crate) fn upstream(label: &'static str, body: &str) -> Self {
        let details =
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));

        Self { label, details }
    }

    /// The operation's fixed error label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Upstream error body or transport error message
    #[must_use]
    pub const fn details(&self) -> &Value {
        &self.details
    }
}
