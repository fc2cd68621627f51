// ═══════════════════════════════════════════════════════════════════
// Error Tests — DashboardError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use equity_dashboard_core::errors::DashboardError;
use equity_dashboard_core::models::edit::Column;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation() {
        let err = DashboardError::Validation("quantity must be a non-negative integer".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: quantity must be a non-negative integer"
        );
    }

    #[test]
    fn validation_empty_message() {
        let err = DashboardError::Validation(String::new());
        assert_eq!(err.to_string(), "Validation failed: ");
    }

    #[test]
    fn immutable_field_price() {
        let err = DashboardError::ImmutableField(Column::Price);
        assert_eq!(
            err.to_string(),
            "Column 'price' is system-derived and cannot be edited"
        );
    }

    #[test]
    fn immutable_field_ticker() {
        let err = DashboardError::ImmutableField(Column::Ticker);
        assert_eq!(
            err.to_string(),
            "Column 'ticker' is system-derived and cannot be edited"
        );
    }

    #[test]
    fn invalid_column() {
        let err = DashboardError::InvalidColumn("info".into());
        assert_eq!(err.to_string(), "Unknown or non-editable column: info");
    }

    #[test]
    fn edit_in_progress() {
        let err = DashboardError::EditInProgress;
        assert_eq!(err.to_string(), "An edit is already being applied");
    }

    #[test]
    fn row_not_found() {
        let err = DashboardError::RowNotFound(12);
        assert_eq!(
            err.to_string(),
            "Row 12 does not exist in the portfolio store"
        );
    }

    #[test]
    fn series_not_found() {
        let err = DashboardError::SeriesNotFound("BRK-B".into());
        assert_eq!(
            err.to_string(),
            "No price series available for ticker BRK-B"
        );
    }

    #[test]
    fn persistence() {
        let err = DashboardError::Persistence("POST /update_data returned 503".into());
        assert_eq!(
            err.to_string(),
            "Persistence error: POST /update_data returned 503"
        );
    }

    #[test]
    fn data_fetch() {
        let err = DashboardError::DataFetch("no provider returned any price history".into());
        assert_eq!(
            err.to_string(),
            "Failed to fetch price history: no provider returned any price history"
        );
    }

    #[test]
    fn file_io() {
        let err = DashboardError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn serialization() {
        let err = DashboardError::Serialization("bad snapshot".into());
        assert_eq!(err.to_string(), "Serialization error: bad snapshot");
    }

    #[test]
    fn deserialization() {
        let err = DashboardError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn network() {
        let err = DashboardError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: DashboardError = io.into();
        match err {
            DashboardError::FileIO(msg) => assert!(msg.contains("no such file")),
            other => panic!("expected FileIO, got {other:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Deserialization(_)));
    }

    #[test]
    fn error_trait_object() {
        // DashboardError must be usable as a boxed std error.
        let err: Box<dyn std::error::Error> = Box::new(DashboardError::EditInProgress);
        assert_eq!(err.to_string(), "An edit is already being applied");
    }
}
