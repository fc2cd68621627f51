pub mod traits;

// Price history provider implementations
pub mod equities_csv;
pub mod yahoo_finance;
