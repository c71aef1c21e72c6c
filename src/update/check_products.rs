use futures::stream::{self, StreamExt};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::errors::ProductError;
use crate::fetch::FetchPage;
use crate::product::{Product, TrackedProduct};
use crate::update::ProductUpdater;
use crate::utilities::generate_random_delay::generate_random_delay;

/// How a batch refresh paces its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Requests in flight at once. 1 keeps the refresh strictly sequential.
    pub max_concurrency: usize,
    /// Random gap between the starts of two consecutive requests, also
    /// when several are in flight.
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            max_concurrency: 1,
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }
}

/// A product whose effective price reached its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub point: u32,
    pub url: String,
}

#[derive(Debug)]
pub struct FailedUpdate {
    pub id: String,
    pub title: String,
    pub url: String,
    pub error: ProductError,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub updated: usize,
    pub failures: Vec<FailedUpdate>,
    pub notifications: Vec<Notification>,
}

/// Refreshes every tracked product in place and collects the ones to notify.
///
/// Each product is updated on a copy that replaces the stored one only on
/// success, so a failing product keeps its previous values and does not
/// stop the rest of the batch. Results are applied in input order whatever
/// the concurrency.
pub async fn check_products<F: FetchPage>(
    updater: &ProductUpdater<F>,
    products: &mut [TrackedProduct],
    options: &CheckOptions,
) -> CheckReport {
    // Held while waiting out the delay, so request starts stay spaced out
    // whatever the concurrency.
    let pacer = Mutex::new(());

    let results: Vec<Result<Product, ProductError>> = stream::iter(
        products.iter().enumerate().map(|(index, tracked)| {
            let mut product = tracked.product.clone();
            let pacer = &pacer;
            async move {
                if index > 0 {
                    let _turn = pacer.lock().await;
                    generate_random_delay(options.min_delay_ms, options.max_delay_ms).await;
                }
                info!("Checking \"{}\" ...", product.title);
                let result = updater.update(&mut product).await;
                result.map(|()| product)
            }
        }),
    )
    .buffered(options.max_concurrency.max(1))
    .collect()
    .await;

    let mut report = CheckReport::default();
    for (tracked, result) in products.iter_mut().zip(results) {
        let url = tracked.product.url_with_base(updater.base_url());
        match result {
            Ok(product) => {
                tracked.product = product;
                report.updated += 1;
                if tracked.should_notify() {
                    report.notifications.push(Notification {
                        id: tracked.product.id.clone(),
                        title: tracked.product.title.clone(),
                        price: tracked.product.price,
                        point: tracked.product.point,
                        url,
                    });
                }
            }
            Err(error) => {
                warn!(
                    "Failed to update \"{}\" ({}): {}",
                    tracked.product.title, url, error
                );
                report.failures.push(FailedUpdate {
                    id: tracked.product.id.clone(),
                    title: tracked.product.title.clone(),
                    url,
                    error,
                });
            }
        }
    }

    report
}
