//! Display-state projection for tool panels.

use std::future::Future;

use crate::error::Result;

/// Loading/error projection mirroring one manager's call outcomes.
///
/// The panel never talks to the gateway itself; it only records what the
/// tracked operation did. One operation is tracked at a time.
#[derive(Debug, Default)]
pub struct PanelState {
	loading: bool,
	error: Option<String>,
}

impl PanelState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn loading(&self) -> bool {
		self.loading
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn clear_error(&mut self) {
		self.error = None;
	}

	/// Runs `op` with the loading flag raised, recording the error message
	/// on failure. Returns the value on success.
	pub async fn track<T, F>(&mut self, op: F) -> Option<T>
	where
		F: Future<Output = Result<T>>,
	{
		self.loading = true;
		self.error = None;
		let outcome = op.await;
		self.loading = false;

		match outcome {
			Ok(value) => Some(value),
			Err(err) => {
				self.error = Some(err.to_string());
				None
			}
		}
	}
}
