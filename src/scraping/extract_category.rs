use std::sync::LazyLock;

use scraper::Html;

use crate::scraping::matcher::{find_first, FieldMatcher};

static CATEGORY_MATCHERS: LazyLock<Vec<FieldMatcher>> =
    LazyLock::new(|| vec![FieldMatcher::new("div#nav-subnav")]);

/// Category name from the sub-navigation bar, if the page has one.
pub fn extract_category(document: &Html) -> Option<String> {
    find_first(document, &CATEGORY_MATCHERS)
        .and_then(|node| node.value().attr("data-category"))
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
}
