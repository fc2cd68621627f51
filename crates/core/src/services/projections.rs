use std::collections::HashMap;

use crate::models::chart::{AllocationChart, AllocationSlice, CandlestickChart};
use crate::models::holding::Holding;
use crate::models::series::PriceSeries;

/// Ticker shown when nothing is selected.
pub const FALLBACK_TICKER: &str = "AAPL";
pub const FALLBACK_COMPANY: &str = "Apple";

/// Pure read-side views over a store snapshot.
///
/// Both projections are deterministic functions of their inputs: no
/// shared state, no I/O. They tolerate an empty or partially-loaded
/// store by producing degenerate charts instead of failing.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Candlestick chart for the selected row's ticker.
    ///
    /// An empty selection, or one pointing outside the snapshot, falls
    /// back to AAPL. A ticker with no entry in the series map renders as
    /// an empty chart. Points are re-sorted by date ascending; providers
    /// should already return them sorted.
    pub fn candlestick(
        &self,
        selection: Option<usize>,
        rows: &[Holding],
        series: &HashMap<String, PriceSeries>,
    ) -> CandlestickChart {
        let (ticker, company) = match selection.and_then(|index| rows.get(index)) {
            Some(row) => (row.ticker.clone(), row.company.clone()),
            None => (FALLBACK_TICKER.to_string(), FALLBACK_COMPANY.to_string()),
        };

        let mut points = series
            .get(&ticker)
            .map(|s| s.points.clone())
            .unwrap_or_default();
        points.sort_by_key(|p| p.date);

        let title = format!("{ticker} {company} Daily Price");
        CandlestickChart {
            ticker,
            company,
            title,
            points,
        }
    }

    /// Portfolio-allocation chart: one slice per holding, proportional
    /// to `value`, with the total embedded in the title.
    pub fn allocation(&self, rows: &[Holding]) -> AllocationChart {
        let total_value: f64 = rows.iter().map(|r| r.value).sum();

        let slices = rows
            .iter()
            .map(|row| AllocationSlice {
                ticker: row.ticker.clone(),
                value: row.value,
                fraction: if total_value > 0.0 {
                    row.value / total_value
                } else {
                    0.0
                },
            })
            .collect();

        AllocationChart {
            title: format!("Portfolio Total $ {}", group_thousands(total_value)),
            total_value,
            slices,
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a non-negative amount with `,` thousands separators and no
/// decimal places, e.g. 1234567.8 → "1,234,568".
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
