//! Transport abstraction — issue export requests over HTTP or a mock.

use std::time::Duration;

use crate::error::{ExportError, ExportResult};

/// One fully assembled export request.
#[derive(Debug)]
pub struct ExportRequest<'a> {
    pub url: &'a str,
    pub service_key: &'a str,
    pub params: &'a [(&'static str, String)],
}

/// Abstraction over the HTTP layer.
///
/// Tests substitute `MockTransport` and never touch the network.
pub trait Transport {
    /// Issue the request and return the raw response body.
    fn send(&self, request: ExportRequest<'_>) -> ExportResult<String>;
}

/// Default request timeout. The export endpoint can take a while on wide
/// time ranges, but a hung connection should not block the CLI forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP transport over a persistent reqwest client.
///
/// The inner client keeps its connection pool alive across export calls
/// on the same instance. Not intended to be shared across threads — each
/// thread should own its own client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> ExportResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ExportError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ExportRequest<'_>) -> ExportResult<String> {
        let response = self
            .client
            .get(request.url)
            .query(request.params)
            // Service key as basic-auth username, empty password
            .basic_auth(request.service_key, None::<&str>)
            .send()
            .map_err(|e| {
                tracing::warn!(error = %e, "export request failed");
                ExportError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "export returned non-2xx");
            return Err(ExportError::Status(status.as_u16()));
        }

        response
            .text()
            .map_err(|e| ExportError::Transport(e.to_string()))
    }
}
