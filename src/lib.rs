pub mod compare;
pub mod config;
pub mod error;
pub mod queries;
pub mod report;
pub mod result_set;
pub mod scrape;
