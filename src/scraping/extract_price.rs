use std::sync::LazyLock;

use scraper::Html;

use crate::errors::ProductError;
use crate::scraping::matcher::{direct_text, find_first, FieldMatcher};
use crate::scraping::normalize::parse_number;

static PRICE_MATCHERS: LazyLock<Vec<FieldMatcher>> = LazyLock::new(|| {
    vec![
        // "Kindle 価格" table in the right-hand column
        FieldMatcher::new(r#"td[class="a-color-price a-size-medium a-align-bottom"]"#),
        // green one-click buy box without a price row
        FieldMatcher::new(r#"b[class="priceLarge"]"#),
        FieldMatcher::new("span#priceblock_ourprice"),
    ]
});

/// Displayed price. Only the node's own text is read, since price nodes
/// sometimes nest a discount annotation such as `<p>￥ 300の割引 (20%)</p>`.
pub fn extract_price(document: &Html, url: &str) -> Result<u32, ProductError> {
    let node = find_first(document, &PRICE_MATCHERS).ok_or_else(|| ProductError::PriceNotFound {
        url: url.to_string(),
    })?;

    let text = direct_text(&node).unwrap_or_default();
    parse_number(&text).ok_or_else(|| ProductError::NumericFormat {
        url: url.to_string(),
        field: "price",
        text,
    })
}
