use thiserror::Error;

use crate::models::edit::Column;

/// Unified error type for the entire equity-dashboard-core library.
/// Every public function returns `Result<T, DashboardError>`.
#[derive(Debug, Error)]
pub enum DashboardError {
    // ── Edits ───────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Column '{0}' is system-derived and cannot be edited")]
    ImmutableField(Column),

    #[error("Unknown or non-editable column: {0}")]
    InvalidColumn(String),

    #[error("An edit is already being applied")]
    EditInProgress,

    // ── Lookups ─────────────────────────────────────────────────────
    #[error("Row {0} does not exist in the portfolio store")]
    RowNotFound(usize),

    #[error("No price series available for ticker {0}")]
    SeriesNotFound(String),

    // ── Persistence ─────────────────────────────────────────────────
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Price history ───────────────────────────────────────────────
    #[error("Failed to fetch price history: {0}")]
    DataFetch(String),

    #[error("Network error: {0}")]
    Network(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        DashboardError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // tokens embedded in request URLs never reach logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        DashboardError::Network(sanitized)
    }
}
