// src/pipeline/crawl.rs

//! City list crawling pipeline.

use std::time::Duration;

use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{CompiledSelectors, Config, CrawlSummary, RegionAliasTable};
use crate::output::RecordSink;
use crate::services::{
    CoordinateResolver, RegionCanonicalizer, RowDescriptor, RowExtractor, parse_rows,
};
use crate::utils::http::PageFetcher;

/// Run the city crawler.
///
/// Fetches the index page, assembles one record per city row in document
/// order and appends each to `sink` before the next row is started. Only a
/// failure to fetch the index page or to write to the sink aborts the run.
pub async fn run_crawler(
    config: &Config,
    fetcher: &dyn PageFetcher,
    sink: &mut dyn RecordSink,
) -> Result<CrawlSummary> {
    let source = &config.source;
    let selectors = CompiledSelectors::compile(source)?;

    let table = RegionAliasTable::default().with_overrides(&config.regions.aliases);
    let canonicalizer = RegionCanonicalizer::new(table, config.regions.canonicalize);

    let rows = fetch_rows(fetcher, &source.index_url, &selectors, config).await?;
    log::info!("Found {} candidate rows", rows.len());

    let resolver = CoordinateResolver::new(
        fetcher,
        selectors.coordinates.clone(),
        &source.latitude_attr,
        &source.longitude_attr,
    );
    let extractor = RowExtractor::new(resolver, &canonicalizer, source);
    let delay = Duration::from_millis(config.crawler.request_delay_ms);

    let mut summary = CrawlSummary {
        rows_seen: rows.len(),
        ..CrawlSummary::default()
    };

    for row in &rows {
        let Some(city) = extractor.extract(row).await else {
            summary.rows_skipped += 1;
            continue;
        };

        sink.append(&city)?;
        summary.cities += 1;
        if !city.has_coordinates() {
            summary.unresolved_coordinates += 1;
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    log::info!("Total cities {}", summary.cities);
    Ok(summary)
}

/// Fetch the index page and read its rows.
///
/// The parsed document does not outlive this function.
async fn fetch_rows(
    fetcher: &dyn PageFetcher,
    index_url: &str,
    selectors: &CompiledSelectors,
    config: &Config,
) -> Result<Vec<RowDescriptor>> {
    let html = fetcher
        .fetch(index_url)
        .await
        .map_err(|e| AppError::index_fetch(index_url, e))?;

    let document = Html::parse_document(&html);
    Ok(parse_rows(&document, selectors, &config.source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CityRecord;
    use crate::utils::http::StaticFetcher;

    const INDEX: &str = "https://ru.wikipedia.org/wiki/Cities";

    fn config() -> Config {
        let mut config = Config::default();
        config.source.index_url = INDEX.to_string();
        config
    }

    fn row(name: &str, slug: &str, region: &str) -> String {
        format!(
            r#"<tr><td>1</td><td></td><td><a href="/wiki/{slug}">{name}</a></td><td>{region}</td><td></td><td></td><td></td><td></td><td></td></tr>"#
        )
    }

    #[tokio::test]
    async fn test_index_fetch_failure_is_fatal() {
        let fetcher = StaticFetcher::new();
        let mut sink: Vec<CityRecord> = Vec::new();

        let result = run_crawler(&config(), &fetcher, &mut sink).await;
        assert!(matches!(result, Err(AppError::IndexFetch { ref url, .. }) if url == INDEX));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_summary_counts_skips_and_unresolved() {
        let index = format!(
            "<table><tr><th>Город</th></tr>{}<tr><td colspan=9>—</td></tr>{}</table>",
            row("Тверь", "Tver", "Тверская область"),
            row("Казань", "Kazan", "Татарстан"),
        );
        let fetcher = StaticFetcher::new().with_page(INDEX, index).with_page(
            "https://ru.wikipedia.org/wiki/Kazan",
            r#"<span class="coordinates"><a class="mw-kartographer-maplink" data-lat="55.79" data-lon="49.12">x</a></span>"#,
        );
        let mut sink: Vec<CityRecord> = Vec::new();

        let summary = run_crawler(&config(), &fetcher, &mut sink).await.unwrap();
        assert_eq!(
            summary,
            CrawlSummary {
                rows_seen: 4,
                rows_skipped: 2,
                cities: 2,
                unresolved_coordinates: 1,
            }
        );
        assert_eq!(sink[0].name, "Тверь");
        assert!(!sink[0].has_coordinates());
        assert_eq!(sink[1].name, "Казань");
        assert!(sink[1].has_coordinates());
    }

    #[tokio::test]
    async fn test_config_aliases_extend_builtin_table() {
        let index = format!("<table>{}</table>", row("Сургут", "Surgut", "ХМАО"));
        let fetcher = StaticFetcher::new().with_page(INDEX, index);
        let mut config = config();
        config.regions.canonicalize = true;
        config
            .regions
            .aliases
            .insert("ХМАО".to_string(), "Ханты-Мансийский автономный округ".to_string());
        let mut sink: Vec<CityRecord> = Vec::new();

        run_crawler(&config, &fetcher, &mut sink).await.unwrap();
        assert_eq!(sink[0].region, "Ханты-Мансийский автономный округ");
    }
}
