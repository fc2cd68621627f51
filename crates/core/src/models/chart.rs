use serde::{Deserialize, Serialize};

use super::series::OhlcPoint;

/// Renderable description of a single-ticker candlestick chart.
///
/// The core computes these — the frontend just renders. An empty `points`
/// vector means the chart should render as a degenerate/empty plot rather
/// than fail (missing series, partially-loaded store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickChart {
    /// Ticker driving the chart (selection or fallback)
    pub ticker: String,

    /// Company display name
    pub company: String,

    /// Chart title, e.g. "AAPL Apple Daily Price"
    pub title: String,

    /// OHLC points ordered by date ascending
    pub points: Vec<OhlcPoint>,
}

/// One slice of the allocation pie: a ticker's share of total value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub ticker: String,

    /// Market value of this holding
    pub value: f64,

    /// `value / total_value`, or 0 when the total is 0
    pub fraction: f64,
}

/// Renderable description of the portfolio-allocation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationChart {
    /// Chart title with the total embedded, e.g. "Portfolio Total $ 1,234,567"
    pub title: String,

    /// Sum of all holdings' values
    pub total_value: f64,

    /// One slice per holding, in store row order
    pub slices: Vec<AllocationSlice>,
}
