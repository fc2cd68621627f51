use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::DashboardError;
use crate::models::series::PriceSeries;

/// Trait abstraction for price history sources.
///
/// Each source (the hosted equities CSV, Yahoo Finance) implements this
/// trait. If a source stops working or changes its format, only that one
/// implementation is replaced — the rest of the codebase is untouched.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch OHLC history for the given tickers over a date range.
    ///
    /// Returns one `PriceSeries` per ticker, ordered by date ascending.
    /// Tickers the source has no data for are simply absent from the map;
    /// an `Err` means the source itself failed (network, malformed body).
    async fn fetch_history(
        &self,
        tickers: &[String],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, DashboardError>;
}
