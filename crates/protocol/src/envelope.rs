//! Request and failure envelopes for the sessionful gateway endpoints.

use serde::{Deserialize, Serialize};

/// Operation requested from a sessionful gateway endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayAction {
    /// Create a new vendor session
    Create,
    /// Run a command in a sandbox session
    Execute,
    /// Navigate a browser session to a URL
    Navigate,
    /// Click an element in a browser session
    Click,
    /// Type text into an element in a browser session
    Type,
    /// Capture a screenshot of a browser session
    Screenshot,
    /// Close a vendor session
    Close,
}

impl std::fmt::Display for GatewayAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GatewayAction::Create => "create",
            GatewayAction::Execute => "execute",
            GatewayAction::Navigate => "navigate",
            GatewayAction::Click => "click",
            GatewayAction::Type => "type",
            GatewayAction::Screenshot => "screenshot",
            GatewayAction::Close => "close",
        };
        write!(f, "{name}")
    }
}

/// Request body accepted by `/terminal-session` and `/browser-session`.
///
/// Everything besides `action` is optional at the wire level; the gateway
/// validates per-action requirements before any vendor call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    pub action: GatewayAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Command line for `execute`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Target URL for `navigate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Element selector for `click` and `type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Text payload for `type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Failure envelope returned by every gateway endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
}
