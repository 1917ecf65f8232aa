//! LogDNA export client for silo.
//!
//! Converts absolute or timezone-naive timestamps into the epoch-second
//! form the LogDNA v1 export API expects, sanitizes the optional filter
//! set, and issues a single blocking GET per export call. The HTTP layer
//! sits behind a `Transport` trait so tests can swap in `MockTransport`
//! without network I/O.

pub mod client;
pub mod epoch;
pub mod error;
pub mod filters;
pub mod mock;
pub mod transport;

// Re-export key types for convenience
pub use client::{EXPORT_URL, LogDnaClient};
pub use epoch::{Timestamp, epoch, epoch_in};
pub use error::{ExportError, ExportResult};
pub use filters::{ExportFilters, Prefer, TimeRange};
pub use mock::MockTransport;
pub use transport::{ExportRequest, HttpTransport, Transport};
