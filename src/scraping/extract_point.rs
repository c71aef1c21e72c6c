use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::errors::ProductError;
use crate::scraping::matcher::{element_text, find_first, FieldMatcher};
use crate::scraping::normalize::parse_number;

/// Token that marks a loyalty point amount, as in `150pt`.
pub const POINT_MARKER: &str = "pt";

static POINT_MATCHERS: LazyLock<Vec<FieldMatcher>> = LazyLock::new(|| {
    vec![
        FieldMatcher::new(r#"tr[class="loyalty-points"] > td[class="a-color-price a-align-bottom"]"#)
            .containing(POINT_MARKER),
        FieldMatcher::new(r#"td[class="price"]"#).containing(POINT_MARKER),
    ]
});

static POINT_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d[\d,]*)\s*pt").expect("point regex is valid"));

/// Loyalty points granted for the product.
///
/// A page without a point node yields 0. A point node whose marker is not
/// preceded by a number is an error.
pub fn extract_point(document: &Html, url: &str) -> Result<u32, ProductError> {
    let Some(node) = find_first(document, &POINT_MATCHERS) else {
        return Ok(0);
    };

    let text = element_text(&node);
    POINT_AMOUNT_RE
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|amount| parse_number(amount.as_str()))
        .ok_or_else(|| ProductError::PointFormat {
            url: url.to_string(),
            text,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loyalty_row(text: &str) -> String {
        format!(
            r#"<table><tr class="loyalty-points">
                 <td class="a-color-secondary">獲得ポイント:</td>
                 <td class="a-color-price a-align-bottom">{}</td>
               </tr></table>"#,
            text
        )
    }

    #[test]
    fn reads_amount_before_marker() {
        let document = Html::parse_document(&loyalty_row("150pt"));
        assert_eq!(extract_point(&document, "u").unwrap(), 150);

        let document = Html::parse_document(&loyalty_row(" 1,024 pt (20%) "));
        assert_eq!(extract_point(&document, "u").unwrap(), 1024);
    }

    #[test]
    fn reads_buy_box_price_cell() {
        let document = Html::parse_document(
            r#"<table><tr><td class="price">￥ 540</td><td class="price">5pt (1%)</td></tr></table>"#,
        );
        assert_eq!(extract_point(&document, "u").unwrap(), 5);
    }

    #[test]
    fn missing_point_node_defaults_to_zero() {
        let document = Html::parse_document("<html><body><span id=\"productTitle\">x</span></body></html>");
        assert_eq!(extract_point(&document, "u").unwrap(), 0);

        // a loyalty cell without the marker is not a point node
        let document = Html::parse_document(&loyalty_row("なし"));
        assert_eq!(extract_point(&document, "u").unwrap(), 0);
    }

    #[test]
    fn marker_without_amount_is_an_error() {
        let document = Html::parse_document(&loyalty_row("pt"));
        match extract_point(&document, "u") {
            Err(ProductError::PointFormat { text, .. }) => assert_eq!(text, "pt"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
