//! Stub endpoint response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful cart mutation or read: the running item count plus a
/// timestamp, mirroring the slice of the storefront payload the widgets
/// consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub item_count: u64,
    pub timestamp: DateTime<Utc>,
}

impl CartResponse {
    pub fn with_count(item_count: u64) -> Self {
        Self { item_count, timestamp: Utc::now() }
    }
}

/// 4xx/5xx payload, shaped like the storefront's `description` errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartErrorResponse {
    pub status: String,
    pub description: String,
}

impl CartErrorResponse {
    /// The add itself was invalid: unknown variant, sold out, empty body.
    pub fn rejected(description: impl Into<String>) -> Self {
        Self { status: "rejected".to_string(), description: description.into() }
    }

    /// The shop could not serve the request at all.
    pub fn unavailable() -> Self {
        Self {
            status: "error".to_string(),
            description: "cart state unavailable".to_string(),
        }
    }
}
