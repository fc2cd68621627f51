use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use time::OffsetDateTime;

use super::traits::HistoryProvider;
use crate::errors::DashboardError;
use crate::models::series::{OhlcPoint, PriceSeries};

/// Yahoo Finance provider for equity OHLC history.
///
/// - **Free**: No API key required.
/// - **Coverage**: Global equities, ETFs, indices.
/// - **Data**: Full historical OHLCV per ticker.
///
/// Used as the fallback when the hosted CSV is unreachable. Fetches one
/// ticker at a time; tickers Yahoo has no data for are skipped so the
/// rest of the dashboard still loads.
pub struct YahooHistoryProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooHistoryProvider {
    pub fn new() -> Result<Self, DashboardError> {
        let connector = yahoo_finance_api::YahooConnector::new().map_err(|e| {
            DashboardError::DataFetch(format!("Yahoo Finance: failed to create connector: {e}"))
        })?;
        Ok(Self { connector })
    }

    /// Convert a `chrono::NaiveDate` to `time::OffsetDateTime` (midnight UTC).
    fn to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime, DashboardError> {
        let month: time::Month = match date.month() {
            1 => time::Month::January,
            2 => time::Month::February,
            3 => time::Month::March,
            4 => time::Month::April,
            5 => time::Month::May,
            6 => time::Month::June,
            7 => time::Month::July,
            8 => time::Month::August,
            9 => time::Month::September,
            10 => time::Month::October,
            11 => time::Month::November,
            12 => time::Month::December,
            _ => unreachable!(),
        };

        let odt = time::Date::from_calendar_date(date.year(), month, date.day() as u8)
            .map_err(|e| {
                DashboardError::DataFetch(format!("Yahoo Finance: invalid date {date}: {e}"))
            })?
            .with_hms(0, 0, 0)
            .map_err(|e| {
                DashboardError::DataFetch(format!("Yahoo Finance: invalid time for {date}: {e}"))
            })?
            .assume_utc();
        Ok(odt)
    }

    /// Convert a unix timestamp (seconds) to `chrono::NaiveDate`.
    fn timestamp_to_naive_date(ts: i64) -> Option<NaiveDate> {
        chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
    }

    async fn fetch_one(
        &self,
        ticker: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<PriceSeries, DashboardError> {
        let start = Self::to_offset_datetime(from)?;
        let end = Self::to_offset_datetime(to + chrono::Duration::days(1))?; // inclusive end

        let resp = self
            .connector
            .get_quote_history(ticker, start, end)
            .await
            .map_err(|e| {
                DashboardError::DataFetch(format!(
                    "Yahoo Finance: failed to fetch history for {ticker}: {e}"
                ))
            })?;

        let quotes = resp.quotes().map_err(|e| {
            DashboardError::DataFetch(format!(
                "Yahoo Finance: failed to parse quotes for {ticker}: {e}"
            ))
        })?;

        let points: Vec<OhlcPoint> = quotes
            .iter()
            .filter_map(|q| {
                let date = Self::timestamp_to_naive_date(q.timestamp)?;
                if date >= from && date <= to {
                    Some(OhlcPoint {
                        date,
                        open: q.open,
                        high: q.high,
                        low: q.low,
                        close: q.close,
                    })
                } else {
                    None
                }
            })
            .collect();

        Ok(PriceSeries::new(points))
    }
}

#[async_trait]
impl HistoryProvider for YahooHistoryProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn fetch_history(
        &self,
        tickers: &[String],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HashMap<String, PriceSeries>, DashboardError> {
        let mut result = HashMap::new();
        let mut last_error = None;

        for ticker in tickers {
            let upper = ticker.to_uppercase();
            match self.fetch_one(&upper, from, to).await {
                Ok(series) if !series.is_empty() => {
                    result.insert(upper, series);
                }
                Ok(_) => {
                    // No data in range; leave the ticker out
                }
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }

        if result.is_empty() {
            if let Some(e) = last_error {
                return Err(e);
            }
        }

        Ok(result)
    }
}
