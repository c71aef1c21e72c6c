use scraper::Html;

use crate::errors::ProductError;
use crate::product::ProductFields;
use crate::scraping::{extract_category, extract_point, extract_price, extract_title};

/// Parses a fetched page body into a document tree.
///
/// html5ever recovers from malformed markup on its own, so the only bodies
/// rejected here are blank ones.
pub fn parse_page(body: &str, url: &str) -> Result<Html, ProductError> {
    if body.trim().is_empty() {
        return Err(ProductError::Parse {
            url: url.to_string(),
            reason: "body is empty".to_string(),
        });
    }

    Ok(Html::parse_document(body))
}

/// Extracts every product field from a parsed page, failing on the first
/// required field that is missing or malformed.
pub fn extract_data(document: &Html, url: &str) -> Result<ProductFields, ProductError> {
    let title = extract_title::extract_title(document, url)?;
    let category = extract_category::extract_category(document);
    let price = extract_price::extract_price(document, url)?;
    let point = extract_point::extract_point(document, url)?;

    Ok(ProductFields {
        title,
        category,
        price,
        point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.amazon.co.jp/dp/B01DUC3V14";

    fn extract(html: &str) -> Result<ProductFields, ProductError> {
        let document = parse_page(html, URL)?;
        extract_data(&document, URL)
    }

    #[test]
    fn regular_product_template() {
        let fields = extract(include_str!("../../tests/fixtures/product_page.html")).unwrap();
        assert_eq!(
            fields,
            ProductFields {
                title: "AIの遺電子　１ (少年チャンピオン・コミックス)".to_string(),
                category: Some("books".to_string()),
                price: 463,
                point: 5,
            }
        );
    }

    #[test]
    fn kindle_template() {
        let fields = extract(include_str!("../../tests/fixtures/kindle_page.html")).unwrap();
        assert_eq!(fields.title, "宇宙兄弟（３２） (モーニングコミックス)");
        assert_eq!(fields.category.as_deref(), Some("digital-text"));
        assert_eq!(fields.price, 475);
        assert_eq!(fields.point, 95);
    }

    #[test]
    fn legacy_buy_box_template() {
        let fields = extract(include_str!("../../tests/fixtures/buybox_page.html")).unwrap();
        assert_eq!(fields.title, "ドラゴンクエストXI　過ぎ去りし時を求めて - PS4");
        assert_eq!(fields.category, None);
        assert_eq!(fields.price, 6264);
        assert_eq!(fields.point, 63);
    }

    #[test]
    fn missing_title_fails_before_price() {
        let err = extract(include_str!("../../tests/fixtures/no_title_page.html")).unwrap_err();
        assert!(matches!(err, ProductError::TitleNotFound { .. }));
    }

    #[test]
    fn missing_price_fails() {
        let err = extract(r#"<span id="productTitle">x</span>"#).unwrap_err();
        assert!(matches!(err, ProductError::PriceNotFound { .. }));
    }

    #[test]
    fn rejects_blank_bodies() {
        assert!(matches!(parse_page("", URL), Err(ProductError::Parse { .. })));
        assert!(matches!(parse_page("  \n", URL), Err(ProductError::Parse { .. })));
    }

    #[test]
    fn replacement_characters_do_not_break_extraction() {
        let html = include_str!("../../tests/fixtures/product_page.html")
            .replace("<body>", "<body><!-- \u{FFFD} -->");
        let fields = extract(&html).unwrap();
        assert_eq!(fields.price, 463);
        assert_eq!(fields.point, 5);
    }

    #[test]
    fn tolerates_malformed_markup() {
        let fields = extract(
            r#"<html><body><span id=productTitle>壊れたページ</span><span id=priceblock_ourprice>￥ 100"#,
        )
        .unwrap();
        assert_eq!(fields.title, "壊れたページ");
        assert_eq!(fields.price, 100);
    }
}
