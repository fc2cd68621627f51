use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use super::traits::HistoryProvider;
use crate::errors::DashboardError;
use crate::models::series::{OhlcPoint, PriceSeries};

/// Hosted daily-OHLC dataset covering the seed equities.
pub const EQUITIES_CSV_URL: &str = "https://datasets.holoviz.org/equities/v1/equities.csv";

/// Price history provider backed by a hosted CSV of daily OHLC rows.
///
/// - **Free**: plain HTTPS GET, no API key.
/// - **Shape**: one row per (ticker, trading day) with
///   `Ticker,Date,Open,High,Low,Close,...` columns, addressed by header
///   name so extra columns (Volume, Adj Close) are ignored.
///
/// The whole file covers every ticker, so one fetch serves the full
/// dashboard regardless of how many tickers are requested.
pub struct EquitiesCsvProvider {
    client: Client,
    url: String,
}

impl EquitiesCsvProvider {
    pub fn new() -> Self {
        Self::with_url(EQUITIES_CSV_URL)
    }

    /// Point the provider at a different CSV endpoint (tests, mirrors).
    pub fn with_url(url: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }
}

impl Default for EquitiesCsvProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryProvider for EquitiesCsvProvider {
    fn name(&self) -> &str {
        "Equities CSV"
    }

    async fn fetch_history(
        &self,
        tickers: &[String],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, DashboardError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                DashboardError::DataFetch(format!("Equities CSV: HTTP error fetching {e}"))
            })?
            .text()
            .await?;

        let mut all = parse_equities_csv(&body)?;

        // Keep only the requested tickers, windowed to [from, to].
        let mut result = HashMap::new();
        for ticker in tickers {
            let upper = ticker.to_uppercase();
            if let Some(series) = all.remove(&upper) {
                let points: Vec<OhlcPoint> = series
                    .points
                    .into_iter()
                    .filter(|p| p.date >= from && p.date <= to)
                    .collect();
                if !points.is_empty() {
                    result.insert(upper, PriceSeries::new(points));
                }
            }
        }

        Ok(result)
    }
}

/// Parse the equities CSV body into per-ticker series.
///
/// The header row is required and addressed by column name; rows with
/// unparseable dates or numbers are skipped rather than failing the whole
/// file (the dataset occasionally carries blank cells).
pub fn parse_equities_csv(body: &str) -> Result<HashMap<String, PriceSeries>, DashboardError> {
    let mut lines = body.lines();
    let header = lines.next().ok_or_else(|| {
        DashboardError::DataFetch("Equities CSV: empty response body".into())
    })?;

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let col = |name: &str| -> Result<usize, DashboardError> {
        columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                DashboardError::DataFetch(format!("Equities CSV: missing '{name}' column"))
            })
    };

    let ticker_idx = col("Ticker")?;
    let date_idx = col("Date")?;
    let open_idx = col("Open")?;
    let high_idx = col("High")?;
    let low_idx = col("Low")?;
    let close_idx = col("Close")?;

    let mut by_ticker: HashMap<String, Vec<OhlcPoint>> = HashMap::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let field = |idx: usize| fields.get(idx).copied().unwrap_or("");

        let ticker = field(ticker_idx);
        if ticker.is_empty() {
            continue;
        }
        let date = match NaiveDate::parse_from_str(field(date_idx), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => continue,
        };
        let parse_num = |idx: usize| field(idx).parse::<f64>().ok();
        let (open, high, low, close) = match (
            parse_num(open_idx),
            parse_num(high_idx),
            parse_num(low_idx),
            parse_num(close_idx),
        ) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => continue,
        };

        by_ticker
            .entry(ticker.to_uppercase())
            .or_default()
            .push(OhlcPoint {
                date,
                open,
                high,
                low,
                close,
            });
    }

    if by_ticker.is_empty() {
        return Err(DashboardError::DataFetch(
            "Equities CSV: no parseable data rows".into(),
        ));
    }

    Ok(by_ticker
        .into_iter()
        .map(|(ticker, points)| (ticker, PriceSeries::new(points)))
        .collect())
}
