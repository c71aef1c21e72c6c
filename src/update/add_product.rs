use anyhow::{bail, Result};
use tracing::info;

use crate::fetch::FetchPage;
use crate::product::{Product, TrackedProduct};
use crate::update::ProductUpdater;

/// Fetches a new product once and appends it to the tracked list.
///
/// Fails without touching `products` if the id is already tracked or the
/// first update fails.
pub async fn add_product<'a, F: FetchPage>(
    updater: &ProductUpdater<F>,
    products: &'a mut Vec<TrackedProduct>,
    id: &str,
    notify_price: i64,
) -> Result<&'a TrackedProduct> {
    if let Some(existing) = products.iter().find(|p| p.product.id == id) {
        bail!(
            "{} ({}) is already in the file.",
            existing.product.id,
            existing.product.title
        );
    }

    let mut product = Product::new_from_id(id)?;
    updater.update(&mut product).await?;
    info!("Succeeded to add \"{}\".", product.title);

    products.push(TrackedProduct::new(product, notify_price));
    Ok(&products[products.len() - 1])
}
