use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ProductError;

/// Base URL of a product page; `base + id` is the canonical product URL.
pub const DEFAULT_BASE_PRODUCT_URL: &str = "https://www.amazon.co.jp/dp/";

// A `dp` or `gp` path segment, an optional `product` segment, then the id
// segment terminated by `/` or the end of the path.
static PRODUCT_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)(?:dp|gp)/(?:product/)?([0-9A-Za-z]+)(?:/|$)")
        .expect("product path regex is valid")
});

/// Returns true when `id` is non-empty and only made of ASCII letters and digits.
pub fn is_valid_product_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Canonical product page URL for `id` on the default site.
pub fn product_url(id: &str) -> Option<String> {
    product_url_with_base(DEFAULT_BASE_PRODUCT_URL, id)
}

pub fn product_url_with_base(base_url: &str, id: &str) -> Option<String> {
    if !is_valid_product_id(id) {
        return None;
    }
    Some(format!("{}{}", base_url, id))
}

/// Extracts the product id from a product page URL.
///
/// Accepts absolute or relative URLs, `dp/<id>`, `dp/product/<id>` and
/// `gp/product/<id>` paths, a leading product-name segment, and trailing
/// segments or query strings. The query string and fragment are ignored,
/// and when the path holds several markers the first one wins.
pub fn extract_product_id_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    PRODUCT_PATH_RE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Accepts either a bare product id or a product URL.
pub fn resolve_product_id(input: &str) -> Result<String, ProductError> {
    let input = input.trim();
    if is_valid_product_id(input) {
        return Ok(input.to_string());
    }
    if input.contains('/') {
        return extract_product_id_from_url(input)
            .ok_or_else(|| ProductError::UrlExtraction(input.to_string()));
    }
    Err(ProductError::InvalidProductId(input.to_string()))
}
