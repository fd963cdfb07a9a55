//! Session lifecycle types.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a vendor session as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Session exists and is ready for actions
    Created,
    /// Session has at least one completed action
    Active,
    /// Session was closed (locally or vendor-side)
    Closed,
}

/// Handle to a vendor-side session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub status: SessionStatus,
    /// Live-view URL for browser sessions, when the vendor exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}
