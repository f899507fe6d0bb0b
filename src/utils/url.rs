// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Resolve a city link against the base origin.
///
/// # Examples
/// ```
/// use city_crawler::utils::url::detail_url;
///
/// assert_eq!(
///     detail_url("https://ru.wikipedia.org", "/wiki/Kazan").unwrap(),
///     "https://ru.wikipedia.org/wiki/Kazan"
/// );
/// ```
pub fn detail_url(base: &str, href: &str) -> Result<String> {
    Ok(Url::parse(base)?.join(href)?.to_string())
}
