//! Browser-automation integration wire types.

use serde::{Deserialize, Serialize};

use crate::envelope::GatewayAction;

/// One completed navigation, as returned by `/browser-session`.
///
/// `url` and `title` are the vendor-reported values, which are authoritative
/// over whatever the caller requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResult {
    pub url: String,
    pub title: String,
    pub status: String,
}

/// Echo of a completed `click`, `type` or `screenshot` action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEcho {
    pub action: GatewayAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Location of the captured image for `screenshot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_echo_parses_screenshot_shape() {
        let echo: ActionEcho =
            serde_json::from_str(r#"{"action":"screenshot","imageUrl":null,"status":"completed"}"#).unwrap();
        assert_eq!(echo.action, GatewayAction::Screenshot);
        assert!(echo.image_url.is_none());
        assert_eq!(echo.status, "completed");
    }
}
