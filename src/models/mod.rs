// src/models/mod.rs

//! Domain models for the city crawler.

mod city;
mod config;
mod regions;
mod selectors;

// Re-export all public types
pub use city::{CityRecord, CityRecordOutput, Coordinates};
pub use config::{Config, CrawlerConfig, OutputConfig, OutputFormat, RegionConfig, SourceConfig};
pub use regions::{REGION_ALIASES, RegionAliasTable};
pub use selectors::{CompiledSelectors, parse_selector};

/// Counters accumulated over one crawl run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Rows matched by the row selector
    pub rows_seen: usize,

    /// Rows dropped for having the wrong shape or no city link
    pub rows_skipped: usize,

    /// Records handed to the sink
    pub cities: usize,

    /// Emitted records without coordinates
    pub unresolved_coordinates: usize,
}
