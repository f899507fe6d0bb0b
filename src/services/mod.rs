//! Service layer for the city crawler.
//!
//! This module contains the business logic for:
//! - Region canonicalization (`RegionCanonicalizer`)
//! - Coordinate resolution from city pages (`CoordinateResolver`)
//! - Row parsing and record assembly (`RowExtractor`)

mod coordinates;
mod regions;
mod rows;

pub use coordinates::{CoordinateResolver, extract_coordinates};
pub use regions::{RegionCanonicalizer, canonicalize};
pub use rows::{NameLink, RowDescriptor, RowExtractor, parse_rows};
