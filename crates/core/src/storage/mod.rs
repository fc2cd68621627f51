pub mod file;
pub mod rest;
pub mod traits;
