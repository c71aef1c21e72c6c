//! Tracks product prices on amazon.co.jp and reports products whose price,
//! after loyalty points, dropped to a configured threshold.

pub mod config;
pub mod errors;
pub mod fetch;
pub mod notify;
pub mod product;
pub mod scraping;
pub mod storage;
pub mod update;
pub mod utilities;

pub use errors::ProductError;
