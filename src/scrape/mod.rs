mod client;
mod engine;
mod extract;

pub use client::Scraper;
pub use engine::{builtin_engines, SearchEngine};
pub use extract::extract_links;
