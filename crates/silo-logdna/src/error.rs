//! Export error types.

use thiserror::Error;

/// Errors that can occur while exporting log lines.
///
/// Both variants render as "export request failed" — the caller sees one
/// uniform failure for network-layer and HTTP-layer problems alike.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export request failed: {0}")]
    Transport(String),

    #[error("export request failed: HTTP status {0}")]
    Status(u16),
}

/// Convenience alias for export results.
pub type ExportResult<T> = Result<T, ExportError>;
