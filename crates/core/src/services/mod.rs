pub mod bus;
pub mod history_service;
pub mod projections;
pub mod reconciler;
pub mod store;
