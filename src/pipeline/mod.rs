//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Fetch the city list and stream one record per city

pub mod crawl;

pub use crawl::run_crawler;
