use std::sync::LazyLock;

use scraper::Html;

use crate::errors::ProductError;
use crate::scraping::matcher::{element_text, find_first, FieldMatcher};

// Kindle e-book, legacy buy box and regular product templates.
static TITLE_MATCHERS: LazyLock<Vec<FieldMatcher>> = LazyLock::new(|| {
    vec![
        FieldMatcher::new("span#ebooksProductTitle"),
        FieldMatcher::new("span#btAsinTitle"),
        FieldMatcher::new("span#productTitle"),
    ]
});

/// Product title. Required: a missing or blank title node is an error.
pub fn extract_title(document: &Html, url: &str) -> Result<String, ProductError> {
    find_first(document, &TITLE_MATCHERS)
        .map(|node| element_text(&node))
        .filter(|title| !title.is_empty())
        .ok_or_else(|| ProductError::TitleNotFound {
            url: url.to_string(),
        })
}
