use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// One candlestick interval: Open-High-Low-Close for a trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// A per-ticker OHLC time series, ordered by date ascending.
/// Immutable once fetched; valid for the cache TTL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub points: Vec<OhlcPoint>,
}

impl PriceSeries {
    pub fn new(mut points: Vec<OhlcPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// The most recent close price, if the series is non-empty.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Re-sort points by date ascending. Providers are expected to return
    /// sorted data; this keeps the ordering invariant when they don't.
    pub fn sort(&mut self) {
        self.points.sort_by_key(|p| p.date);
    }
}

/// Default time-to-live for cached history: 600 seconds.
pub const HISTORY_TTL: Duration = Duration::from_secs(600);

struct CacheEntry {
    fetched_at: Instant,
    series: PriceSeries,
}

/// In-memory TTL cache of fetched price series, keyed by uppercased ticker.
///
/// A cached series is served as-is within the TTL window (stale-but-valid)
/// and refetched after expiry. Process-local only: history is cheap to
/// refetch, so nothing here is persisted.
pub struct SeriesCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl SeriesCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Get the cached series for a ticker if it is still within the TTL.
    pub fn get_fresh(&self, ticker: &str) -> Option<&PriceSeries> {
        let entry = self.entries.get(&ticker.to_uppercase())?;
        if entry.fetched_at.elapsed() <= self.ttl {
            Some(&entry.series)
        } else {
            None
        }
    }

    /// Insert or replace the cached series for a ticker, stamped now.
    pub fn insert(&mut self, ticker: &str, series: PriceSeries) {
        self.entries.insert(
            ticker.to_uppercase(),
            CacheEntry {
                fetched_at: Instant::now(),
                series,
            },
        );
    }

    /// Number of tickers currently cached (fresh or stale).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached series.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new(HISTORY_TTL)
    }
}

impl std::fmt::Debug for SeriesCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesCache")
            .field("tickers", &self.entries.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
