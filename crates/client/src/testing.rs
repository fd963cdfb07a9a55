//! Test support: recording fake gateway transport.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::GatewayTransport;

/// Scripted transport that records every invocation.
///
/// Responses are consumed in order; an unscripted call answers `null`,
/// which is enough for close acknowledgements the managers ignore.
#[derive(Default)]
pub(crate) struct FakeGateway {
	responses: Mutex<VecDeque<Result<Value>>>,
	calls: Mutex<Vec<(String, Value)>>,
}

impl FakeGateway {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn push_ok(&self, value: Value) {
		self.responses.lock().unwrap().push_back(Ok(value));
	}

	pub(crate) fn push_err(&self, err: ClientError) {
		self.responses.lock().unwrap().push_back(Err(err));
	}

	pub(crate) fn calls(&self) -> Vec<(String, Value)> {
		self.calls.lock().unwrap().clone()
	}

	pub(crate) fn call_count(&self) -> usize {
		self.calls.lock().unwrap().len()
	}
}

#[async_trait]
impl GatewayTransport for FakeGateway {
	async fn invoke(&self, function: &str, body: Value) -> Result<Value> {
		self.calls.lock().unwrap().push((function.to_string(), body));
		self.responses
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or(Ok(Value::Null))
	}
}
