//! Utility functions and helpers.

pub mod http;
pub mod url;

/// Text content of an element with surrounding whitespace trimmed.
pub fn element_text(element: &scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn test_element_text_joins_and_trims() {
        let doc = Html::parse_fragment("<p>\n  Нижний <b>Новгород</b>\n</p>");
        let sel = Selector::parse("p").unwrap();
        let p = doc.select(&sel).next().unwrap();
        assert_eq!(element_text(&p), "Нижний Новгород");
    }
}
