//! Terminal (sandbox) integration wire types.

use serde::{Deserialize, Serialize};

/// One completed command execution, as returned by `/terminal-session`.
///
/// `output` and `error` are the captured stdout/stderr streams, empty when
/// the vendor reported none. `execution_time` is wall-clock milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResult {
    pub command: String,
    pub output: String,
    pub error: String,
    pub exit_code: i32,
    pub execution_time: u64,
}
