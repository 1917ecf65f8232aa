//! Mock transport for testing — canned responses, no network I/O.

use std::cell::RefCell;

use crate::error::{ExportError, ExportResult};
use crate::transport::{ExportRequest, Transport};

/// An owned copy of a request the mock has seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub url: String,
    pub service_key: String,
    pub params: Vec<(&'static str, String)>,
}

/// A mock transport that records every request and replies with a canned
/// body or a canned failure.
pub struct MockTransport {
    reply: Result<String, String>,
    requests: RefCell<Vec<SentRequest>>,
}

impl MockTransport {
    /// Reply to every request with the given body.
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            reply: Ok(body.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fail every request with a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<SentRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ExportRequest<'_>) -> ExportResult<String> {
        self.requests.borrow_mut().push(SentRequest {
            url: request.url.to_string(),
            service_key: request.service_key.to_string(),
            params: request.params.to_vec(),
        });
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(ExportError::Transport(message.clone())),
        }
    }
}
