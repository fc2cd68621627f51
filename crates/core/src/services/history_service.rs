use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;

use crate::errors::DashboardError;
use crate::models::series::{PriceSeries, SeriesCache, HISTORY_TTL};
use crate::providers::traits::HistoryProvider;

/// Default lookback window: two years of daily candles.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 730;

/// Fetches per-ticker OHLC history with TTL caching and provider fallback.
///
/// Cache strategy: a series fetched within the TTL (600 s by default) is
/// served as-is — callers must tolerate stale-but-valid data inside that
/// window. Stale or missing tickers are refetched from the providers in
/// registration order; if one provider fails, the next is tried.
///
/// Partial failure degrades: tickers no provider can serve are omitted
/// from the result so the dashboard can still render the rest. Only when
/// nothing at all could be retrieved does `get_history` return
/// `DataFetch`.
pub struct HistoryService {
    providers: Vec<Box<dyn HistoryProvider>>,
    cache: SeriesCache,
    lookback_days: i64,
}

impl HistoryService {
    pub fn new(providers: Vec<Box<dyn HistoryProvider>>) -> Self {
        Self {
            providers,
            cache: SeriesCache::default(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Override the cache TTL (mainly for tests).
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache = SeriesCache::new(ttl);
        self
    }

    /// Override the lookback window.
    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    /// Get OHLC history for the given tickers over the lookback window.
    pub async fn get_history(
        &mut self,
        tickers: &[String],
    ) -> Result<HashMap<String, PriceSeries>, DashboardError> {
        let to = chrono::Utc::now().date_naive();
        let from = to - chrono::Duration::days(self.lookback_days);
        self.get_history_range(tickers, from, to).await
    }

    /// Get OHLC history for an explicit date range.
    pub async fn get_history_range(
        &mut self,
        tickers: &[String],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, DashboardError> {
        let mut result: HashMap<String, PriceSeries> = HashMap::new();
        let mut missing: Vec<String> = Vec::new();

        for ticker in tickers {
            let upper = ticker.to_uppercase();
            match self.cache.get_fresh(&upper) {
                Some(series) => {
                    result.insert(upper, series.clone());
                }
                None => missing.push(upper),
            }
        }

        if missing.is_empty() {
            return Ok(result);
        }

        let mut last_error = None;
        for provider in &self.providers {
            if missing.is_empty() {
                break;
            }
            match provider.fetch_history(&missing, from, to).await {
                Ok(fetched) => {
                    missing.retain(|ticker| !fetched.contains_key(ticker));
                    for (ticker, mut series) in fetched {
                        series.sort();
                        self.cache.insert(&ticker, series.clone());
                        result.insert(ticker, series);
                    }
                }
                Err(e) => {
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }

        if result.is_empty() {
            if let Some(e) = last_error {
                return Err(DashboardError::DataFetch(e.to_string()));
            }
            if !tickers.is_empty() {
                return Err(DashboardError::DataFetch(
                    "no provider returned any price history".into(),
                ));
            }
        }

        // Tickers still missing are omitted; callers degrade per ticker.
        Ok(result)
    }

    /// Number of tickers currently cached.
    pub fn cached_tickers(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached series, forcing the next call to refetch.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl std::fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryService")
            .field("providers", &self.providers.len())
            .field("cache", &self.cache)
            .finish()
    }
}

/// Default TTL re-exported for callers configuring their own cache.
pub const DEFAULT_TTL: Duration = HISTORY_TTL;
