// src/services/rows.rs

//! Index-table rows and their assembly into city records.
//!
//! Rows are read out of the parsed index page into owned [`RowDescriptor`]s
//! first, so the document is released before any city page is fetched.
//! [`RowExtractor::extract`] then turns one descriptor into one record.

use scraper::{ElementRef, Html};

use crate::models::{CityRecord, CompiledSelectors, Coordinates, SourceConfig};
use crate::services::{CoordinateResolver, RegionCanonicalizer};
use crate::utils::element_text;
use crate::utils::url::detail_url;

/// The city link found in a row's name cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLink {
    pub name: String,
    pub href: Option<String>,
}

/// Everything row extraction needs from one index-table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDescriptor {
    /// Number of direct element children (`td` and `th`)
    pub cell_count: usize,

    /// First link in the name cell, if any
    pub name_link: Option<NameLink>,

    /// Raw text of the region cell, `None` when the row has no such cell
    pub region: Option<String>,
}

/// Read every row matching the row selector, in document order.
pub fn parse_rows(
    document: &Html,
    selectors: &CompiledSelectors,
    source: &SourceConfig,
) -> Vec<RowDescriptor> {
    document
        .select(&selectors.row)
        .map(|row| describe_row(row, selectors, source))
        .collect()
}

fn describe_row(
    row: ElementRef<'_>,
    selectors: &CompiledSelectors,
    source: &SourceConfig,
) -> RowDescriptor {
    let cells: Vec<ElementRef<'_>> = row.children().filter_map(ElementRef::wrap).collect();
    let data_cells: Vec<ElementRef<'_>> = cells
        .iter()
        .copied()
        .filter(|cell| cell.value().name() == "td")
        .collect();

    let name_link = data_cells
        .get(source.name_column)
        .and_then(|cell| cell.select(&selectors.name_link).next())
        .map(|link| NameLink {
            name: element_text(&link),
            href: link.value().attr("href").map(str::to_string),
        });

    let region = data_cells.get(source.region_column).map(element_text);

    RowDescriptor {
        cell_count: cells.len(),
        name_link,
        region,
    }
}

/// Assembles city records from row descriptors.
pub struct RowExtractor<'a> {
    resolver: CoordinateResolver<'a>,
    canonicalizer: &'a RegionCanonicalizer,
    base_url: &'a str,
    expected_cells: usize,
    skip_unnamed_rows: bool,
}

impl<'a> RowExtractor<'a> {
    pub fn new(
        resolver: CoordinateResolver<'a>,
        canonicalizer: &'a RegionCanonicalizer,
        source: &'a SourceConfig,
    ) -> Self {
        Self {
            resolver,
            canonicalizer,
            base_url: &source.base_url,
            expected_cells: source.expected_cells,
            skip_unnamed_rows: source.skip_unnamed_rows,
        }
    }

    /// Whether `row` has the shape of a city row.
    pub fn is_city_row(&self, row: &RowDescriptor) -> bool {
        row.cell_count == self.expected_cells && row.region.is_some()
    }

    /// Build the record for `row`, or `None` when the row is not a city row.
    ///
    /// The city page is fetched and resolved before the region is assigned.
    pub async fn extract(&self, row: &RowDescriptor) -> Option<CityRecord> {
        if !self.is_city_row(row) {
            log::debug!("Skipping row with {} cells", row.cell_count);
            return None;
        }

        let mut city = CityRecord::default();

        match &row.name_link {
            Some(link) => {
                city.name = link.name.clone();
                city.coordinates = self.resolve_link(link).await;
            }
            None if self.skip_unnamed_rows => {
                log::warn!("Skipping row without a city link (region {:?})", row.region);
                return None;
            }
            None => {
                log::warn!(
                    "Row without a city link (region {:?}), emitting it unnamed",
                    row.region
                );
            }
        }

        let raw_region = row.region.as_deref().unwrap_or_default();
        city.region = self.canonicalizer.canonicalize(raw_region);

        Some(city)
    }

    async fn resolve_link(&self, link: &NameLink) -> Option<Coordinates> {
        let Some(href) = link.href.as_deref() else {
            log::warn!("City link for {:?} has no href", link.name);
            return None;
        };

        match detail_url(self.base_url, href) {
            Ok(url) => self.resolver.resolve(&url, &link.name).await,
            Err(error) => {
                log::warn!("Bad city link {href:?} for {:?}: {error}", link.name);
                None
            }
        }
    }
}
