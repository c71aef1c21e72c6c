use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ProductError;
use crate::product::product_id::{
    extract_product_id_from_url, is_valid_product_id, product_url_with_base,
    DEFAULT_BASE_PRODUCT_URL,
};

/// Threshold value meaning "never notify".
pub const NEVER_NOTIFY: i64 = -1;

/// A product page snapshot. Only `id` is known until the first successful update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub point: u32,
}

/// Fields read from a product page, applied to a [`Product`] as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub title: String,
    pub category: Option<String>,
    pub price: u32,
    pub point: u32,
}

impl Product {
    pub fn new_from_id(id: &str) -> Result<Self, ProductError> {
        if !is_valid_product_id(id) {
            return Err(ProductError::InvalidProductId(id.to_string()));
        }
        Ok(Product {
            id: id.to_string(),
            ..Default::default()
        })
    }

    pub fn new_from_url(url: &str) -> Result<Self, ProductError> {
        let id = extract_product_id_from_url(url)
            .ok_or_else(|| ProductError::UrlExtraction(url.to_string()))?;
        Ok(Product {
            id,
            ..Default::default()
        })
    }

    /// Canonical URL on `base_url`, empty if the id is not valid.
    pub fn url_with_base(&self, base_url: &str) -> String {
        product_url_with_base(base_url, &self.id).unwrap_or_default()
    }

    /// Price after the loyalty point credit. Can be negative.
    pub fn effective_price(&self) -> i64 {
        i64::from(self.price) - i64::from(self.point)
    }

    /// Overwrites every page-derived field. A page without a category
    /// clears the previous one.
    pub fn apply(&mut self, fields: ProductFields) {
        self.title = fields.title;
        self.category = fields.category.unwrap_or_default();
        self.price = fields.price;
        self.point = fields.point;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(DEFAULT_BASE_PRODUCT_URL))
    }
}

impl Product {
    /// Multi-line description with the product URL on `base_url`.
    pub fn summary(&self, base_url: &str) -> String {
        format!(
            "[{}]\n\
             Title         : {}\n\
             Current Price : {}\n\
             Point         : {}pt\n\
             URL           : {}\n",
            self.id,
            self.title,
            self.price,
            self.point,
            self.url_with_base(base_url)
        )
    }
}

/// A product in the tracked list with its notify threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "NotifyPrice", default = "never_notify")]
    pub notify_price: i64,
}

fn never_notify() -> i64 {
    NEVER_NOTIFY
}

impl TrackedProduct {
    pub fn new(product: Product, notify_price: i64) -> Self {
        TrackedProduct {
            product,
            notify_price,
        }
    }

    /// A negative threshold never notifies; otherwise notify once the
    /// effective price reaches the threshold.
    pub fn should_notify(&self) -> bool {
        self.notify_price >= 0 && self.notify_price >= self.product.effective_price()
    }
}
