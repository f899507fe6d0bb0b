//! Application configuration structures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::selectors::parse_selector;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Where the city list lives and how its markup is read
    #[serde(default)]
    pub source: SourceConfig,

    /// Region canonicalization
    #[serde(default)]
    pub regions: RegionConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path).map_err(|e| {
            AppError::config(format!("failed to load {}: {}", path.display(), e))
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }

        let source = &self.source;
        Url::parse(&source.base_url)
            .map_err(|e| AppError::validation(format!("source.base_url: {e}")))?;
        Url::parse(&source.index_url)
            .map_err(|e| AppError::validation(format!("source.index_url: {e}")))?;

        if source.expected_cells == 0 {
            return Err(AppError::validation("source.expected_cells must be > 0"));
        }
        if source.name_column == source.region_column {
            return Err(AppError::validation(
                "source.name_column and source.region_column must differ",
            ));
        }
        for (key, column) in [
            ("source.name_column", source.name_column),
            ("source.region_column", source.region_column),
        ] {
            if column >= source.expected_cells {
                return Err(AppError::validation(format!(
                    "{key} ({column}) is outside a {}-cell row",
                    source.expected_cells
                )));
            }
        }

        for selector in [
            &source.row_selector,
            &source.name_link_selector,
            &source.coordinate_selector,
        ] {
            parse_selector(selector)?;
        }
        if source.latitude_attr.is_empty() || source.longitude_attr.is_empty() {
            return Err(AppError::validation(
                "source.latitude_attr and source.longitude_attr must be set",
            ));
        }

        for (raw, canonical) in &self.regions.aliases {
            if raw.trim().is_empty() || canonical.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "regions.aliases has an empty label ({raw:?} = {canonical:?})"
                )));
            }
        }
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Pause between city page requests in milliseconds
    #[serde(default)]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: 0,
        }
    }
}

/// Index page location and markup layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Origin that relative city links are resolved against
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// The page listing every city
    #[serde(default = "defaults::index_url")]
    pub index_url: String,

    /// Selector for candidate rows on the index page
    #[serde(default = "defaults::row_selector")]
    pub row_selector: String,

    /// Selector for the city link inside the name cell
    #[serde(default = "defaults::name_link_selector")]
    pub name_link_selector: String,

    /// Selector for coordinate annotations on a city page
    #[serde(default = "defaults::coordinate_selector")]
    pub coordinate_selector: String,

    #[serde(default = "defaults::latitude_attr")]
    pub latitude_attr: String,

    #[serde(default = "defaults::longitude_attr")]
    pub longitude_attr: String,

    /// Number of cells a city row must have
    #[serde(default = "defaults::expected_cells")]
    pub expected_cells: usize,

    /// Zero-based `td` index of the name cell
    #[serde(default = "defaults::name_column")]
    pub name_column: usize,

    /// Zero-based `td` index of the region cell
    #[serde(default = "defaults::region_column")]
    pub region_column: usize,

    /// Skip rows without a city link instead of emitting an unnamed record
    #[serde(default)]
    pub skip_unnamed_rows: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            index_url: defaults::index_url(),
            row_selector: defaults::row_selector(),
            name_link_selector: defaults::name_link_selector(),
            coordinate_selector: defaults::coordinate_selector(),
            latitude_attr: defaults::latitude_attr(),
            longitude_attr: defaults::longitude_attr(),
            expected_cells: defaults::expected_cells(),
            name_column: defaults::name_column(),
            region_column: defaults::region_column(),
            skip_unnamed_rows: false,
        }
    }
}

/// Region canonicalization settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegionConfig {
    /// Map raw region labels through the alias table
    #[serde(default)]
    pub canonicalize: bool,

    /// Extra raw -> canonical pairs merged over the built-in table
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Line format for emitted records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `name,region,latitude,longitude`
    #[default]
    Csv,
    /// One JSON object per line
    Jsonl,
}

mod defaults {
    pub fn user_agent() -> String {
        concat!("city-crawler/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn base_url() -> String {
        "https://ru.wikipedia.org".into()
    }
    pub fn index_url() -> String {
        "https://ru.wikipedia.org/wiki/%D0%A1%D0%BF%D0%B8%D1%81%D0%BE%D0%BA_%D0%B3%D0%BE%D1%80%D0%BE%D0%B4%D0%BE%D0%B2_%D0%A0%D0%BE%D1%81%D1%81%D0%B8%D0%B8".into()
    }
    pub fn row_selector() -> String {
        "table tbody tr".into()
    }
    pub fn name_link_selector() -> String {
        "a:first-child".into()
    }
    pub fn coordinate_selector() -> String {
        "span.coordinates a.mw-kartographer-maplink".into()
    }
    pub fn latitude_attr() -> String {
        "data-lat".into()
    }
    pub fn longitude_attr() -> String {
        "data-lon".into()
    }
    pub fn expected_cells() -> usize {
        9
    }
    pub fn name_column() -> usize {
        2
    }
    pub fn region_column() -> usize {
        3
    }
}
