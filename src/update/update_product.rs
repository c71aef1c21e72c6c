use tracing::debug;

use crate::errors::ProductError;
use crate::fetch::FetchPage;
use crate::product::{product_url_with_base, Product, DEFAULT_BASE_PRODUCT_URL};
use crate::scraping::{extract_data, parse_page};
use crate::update::UpdateStage;

/// Refreshes products from their pages through a [`FetchPage`] transport.
#[derive(Debug, Clone)]
pub struct ProductUpdater<F> {
    fetcher: F,
    base_url: String,
}

impl<F: FetchPage> ProductUpdater<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, DEFAULT_BASE_PRODUCT_URL)
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        ProductUpdater {
            fetcher,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn product_url(&self, product: &Product) -> Result<String, ProductError> {
        product_url_with_base(&self.base_url, &product.id)
            .ok_or_else(|| ProductError::InvalidProductId(product.id.clone()))
    }

    /// Fetches the product page and overwrites the page-derived fields.
    ///
    /// `product` is only written once every required field has been read,
    /// so on error it still holds its previous snapshot.
    pub async fn update(&self, product: &mut Product) -> Result<(), ProductError> {
        debug!(id = %product.id, stage = %UpdateStage::Idle);
        let url = self.product_url(product)?;

        debug!(id = %product.id, stage = %UpdateStage::Fetching, "GET {}", url);
        let body = self.fetcher.fetch_page(&url).await?;

        debug!(id = %product.id, stage = %UpdateStage::Parsing, bytes = body.len());
        let document = parse_page(&body, &url)?;

        debug!(id = %product.id, stage = %UpdateStage::Extracting);
        let fields = extract_data(&document, &url)?;

        product.apply(fields);
        debug!(id = %product.id, stage = %UpdateStage::Committed, price = product.price, point = product.point);
        Ok(())
    }
}
