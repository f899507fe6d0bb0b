// src/models/selectors.rs

//! CSS selectors for scraping the city list and city pages.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::SourceConfig;

/// Selectors from [`SourceConfig`], compiled once per run.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    /// Each candidate row in the index table
    pub row: Selector,

    /// The city link inside the name cell
    pub name_link: Selector,

    /// The coordinate annotation on a city page
    pub coordinates: Selector,
}

impl CompiledSelectors {
    pub fn compile(source: &SourceConfig) -> Result<Self> {
        Ok(Self {
            row: parse_selector(&source.row_selector)?,
            name_link: parse_selector(&source.name_link_selector)?,
            coordinates: parse_selector(&source.coordinate_selector)?,
        })
    }
}

/// Parse a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("table tbody tr").is_ok());
        assert!(parse_selector("span.coordinates a.mw-kartographer-maplink").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        let err = parse_selector("[[invalid").unwrap_err();
        assert!(matches!(err, AppError::Selector { ref selector, .. } if selector == "[[invalid"));
    }

    #[test]
    fn test_compile_defaults() {
        assert!(CompiledSelectors::compile(&SourceConfig::default()).is_ok());
    }
}
