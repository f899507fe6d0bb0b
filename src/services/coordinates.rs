// src/services/coordinates.rs

//! Coordinate resolution from city pages.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::Coordinates;
use crate::utils::http::PageFetcher;

/// Fetches a city page and reads its primary coordinate annotation.
pub struct CoordinateResolver<'a> {
    fetcher: &'a dyn PageFetcher,
    selector: Selector,
    latitude_attr: String,
    longitude_attr: String,
}

impl<'a> CoordinateResolver<'a> {
    pub fn new(
        fetcher: &'a dyn PageFetcher,
        selector: Selector,
        latitude_attr: impl Into<String>,
        longitude_attr: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            selector,
            latitude_attr: latitude_attr.into(),
            longitude_attr: longitude_attr.into(),
        }
    }

    /// Resolve the coordinates of `city` from the page at `url`.
    ///
    /// Fetch and parse failures are logged and yield `None`; they never
    /// propagate.
    pub async fn resolve(&self, url: &str, city: &str) -> Option<Coordinates> {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(error) => {
                log::warn!("Failed to fetch page for {city:?} ({url}): {error}");
                return None;
            }
        };

        let document = Html::parse_document(&html);
        match extract_coordinates(
            &document,
            &self.selector,
            &self.latitude_attr,
            &self.longitude_attr,
            city,
        ) {
            Ok(Some(coordinates)) => Some(coordinates),
            Ok(None) => {
                log::debug!("No coordinates on page for {city:?} ({url})");
                None
            }
            Err(error) => {
                log::warn!("{error}");
                None
            }
        }
    }
}

/// Read the first annotation matching `selector` in `document`.
///
/// Only the first match is considered; later annotations are ignored even
/// when the first one fails to parse. Returns `Ok(None)` when nothing matches.
pub fn extract_coordinates(
    document: &Html,
    selector: &Selector,
    latitude_attr: &str,
    longitude_attr: &str,
    city: &str,
) -> Result<Option<Coordinates>> {
    let Some(annotation) = document.select(selector).next() else {
        return Ok(None);
    };

    let element = annotation.value();
    let latitude = parse_axis(element.attr(latitude_attr), "lat", city)?;
    let longitude = parse_axis(element.attr(longitude_attr), "lon", city)?;

    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}

fn parse_axis(value: Option<&str>, axis: &'static str, city: &str) -> Result<f64> {
    let Some(value) = value else {
        return Err(AppError::coordinate(city, axis, "", "attribute missing"));
    };

    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        Ok(_) => Err(AppError::coordinate(city, axis, value, "not a finite number")),
        Err(e) => Err(AppError::coordinate(city, axis, value, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_selector;
    use crate::utils::http::StaticFetcher;

    const SELECTOR: &str = "span.coordinates a.mw-kartographer-maplink";

    fn page(annotations: &[(&str, &str)]) -> String {
        let links: String = annotations
            .iter()
            .map(|(lat, lon)| {
                format!(
                    r#"<span class="coordinates"><a class="mw-kartographer-maplink" data-lat="{lat}" data-lon="{lon}">{lat}, {lon}</a></span>"#
                )
            })
            .collect();
        format!("<html><body><p>Город</p>{links}</body></html>")
    }

    fn extract(html: &str) -> Result<Option<Coordinates>> {
        let document = Html::parse_document(html);
        let selector = parse_selector(SELECTOR).unwrap();
        extract_coordinates(&document, &selector, "data-lat", "data-lon", "Тест")
    }

    #[test]
    fn test_extracts_single_annotation() {
        let coordinates = extract(&page(&[("55.7887", "49.1221")])).unwrap().unwrap();
        assert_eq!(coordinates.latitude, 55.7887);
        assert_eq!(coordinates.longitude, 49.1221);
    }

    #[test]
    fn test_first_annotation_wins() {
        let coordinates = extract(&page(&[("55.75", "37.62"), ("10.0", "20.0")]))
            .unwrap()
            .unwrap();
        assert_eq!(coordinates.latitude, 55.75);
        assert_eq!(coordinates.longitude, 37.62);
    }

    #[test]
    fn test_bad_first_annotation_is_not_replaced_by_second() {
        let result = extract(&page(&[("abc", "37.62"), ("10.0", "20.0")]));
        assert!(matches!(result, Err(AppError::Coordinate { axis: "lat", .. })));
    }

    #[test]
    fn test_bad_longitude_fails_whole_pair() {
        let result = extract(&page(&[("55.75", "east")]));
        assert!(matches!(result, Err(AppError::Coordinate { axis: "lon", .. })));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(extract(&page(&[("NaN", "37.62")])).is_err());
        assert!(extract(&page(&[("55.75", "inf")])).is_err());
    }

    #[test]
    fn test_missing_attribute_is_an_error() {
        let html = r#"<span class="coordinates"><a class="mw-kartographer-maplink" data-lat="55.75">x</a></span>"#;
        assert!(matches!(
            extract(html),
            Err(AppError::Coordinate { axis: "lon", .. })
        ));
    }

    #[test]
    fn test_no_annotation_is_none() {
        assert_eq!(extract("<p>Нет координат</p>").unwrap(), None);
    }

    #[test]
    fn test_annotation_outside_coordinates_span_is_ignored() {
        let html = r#"<a class="mw-kartographer-maplink" data-lat="1" data-lon="2">x</a>"#;
        assert_eq!(extract(html).unwrap(), None);
    }

    fn resolver(fetcher: &StaticFetcher) -> CoordinateResolver<'_> {
        CoordinateResolver::new(
            fetcher,
            parse_selector(SELECTOR).unwrap(),
            "data-lat",
            "data-lon",
        )
    }

    #[tokio::test]
    async fn test_resolve_fetches_and_extracts() {
        let url = "https://ru.wikipedia.org/wiki/Kazan";
        let fetcher = StaticFetcher::new().with_page(url, page(&[("55.79", "49.12")]));
        let resolver = resolver(&fetcher);

        let first = resolver.resolve(url, "Казань").await;
        let second = resolver.resolve(url, "Казань").await;
        assert_eq!(
            first,
            Some(Coordinates {
                latitude: 55.79,
                longitude: 49.12
            })
        );
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_fetch_failure_is_none() {
        let fetcher = StaticFetcher::new();
        let resolver = resolver(&fetcher);
        assert_eq!(resolver.resolve("https://ru.wikipedia.org/wiki/Nowhere", "Нигде").await, None);
    }

    #[tokio::test]
    async fn test_resolve_parse_failure_is_none() {
        let url = "https://ru.wikipedia.org/wiki/Bad";
        let fetcher = StaticFetcher::new().with_page(url, page(&[("abc", "49.12")]));
        assert_eq!(resolver(&fetcher).resolve(url, "Плохой").await, None);
    }
}
