//! The export client — one blocking GET per export call.

use crate::epoch::epoch;
use crate::error::ExportResult;
use crate::filters::{ExportFilters, TimeRange};
use crate::transport::{ExportRequest, HttpTransport, Transport};

/// LogDNA v1 export endpoint.
pub const EXPORT_URL: &str = "https://api.logdna.com/v1/export";

/// Client for the LogDNA export API.
///
/// Constructed once per invocation with a service key; the transport is
/// long-lived so repeated exports on the same instance reuse connections.
/// Single-threaded sequential use only.
pub struct LogDnaClient<T: Transport = HttpTransport> {
    service_key: String,
    transport: T,
}

impl LogDnaClient {
    pub fn new(service_key: impl Into<String>) -> ExportResult<Self> {
        Ok(Self::with_transport(service_key, HttpTransport::new()?))
    }
}

impl<T: Transport> LogDnaClient<T> {
    /// Build a client over an injected transport. Tests pair this with
    /// `MockTransport`.
    pub fn with_transport(service_key: impl Into<String>, transport: T) -> Self {
        Self {
            service_key: service_key.into(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Export log lines for the given range and filters.
    ///
    /// Both range endpoints are normalized to epoch seconds, absent
    /// filters are dropped from the parameter set, and the response body
    /// comes back as one string per line, order preserved. Any transport
    /// or HTTP failure propagates as a single export error — no retries,
    /// no partial results.
    pub fn export(&self, range: &TimeRange, filters: &ExportFilters) -> ExportResult<Vec<String>> {
        let params = filters.to_query(epoch(&range.from), epoch(&range.to));
        tracing::debug!(url = EXPORT_URL, param_count = params.len(), "exporting");

        let body = self.transport.send(ExportRequest {
            url: EXPORT_URL,
            service_key: &self.service_key,
            params: &params,
        })?;

        Ok(body.lines().map(String::from).collect())
    }
}
