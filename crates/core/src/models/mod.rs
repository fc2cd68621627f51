pub mod chart;
pub mod edit;
pub mod holding;
pub mod series;
pub mod table;
