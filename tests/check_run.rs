//! End-to-end check run: products file, mock site, refreshed file and
//! notification set.

use std::fs;

use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use amazonjp_price_checker::fetch::{PageFetcher, DEFAULT_USER_AGENT};
use amazonjp_price_checker::notify::render_message;
use amazonjp_price_checker::storage::{read_products, write_products};
use amazonjp_price_checker::update::{add_product, check_products, CheckOptions, ProductUpdater};
use amazonjp_price_checker::ProductError;

const PRODUCT: &str = include_str!("fixtures/product_page.html");
const KINDLE: &str = include_str!("fixtures/kindle_page.html");
const NO_TITLE: &str = include_str!("fixtures/no_title_page.html");

async fn mock_page(server: &MockServer, id: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/dp/{}", id)))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "text/html; charset=UTF-8"))
        .mount(server)
        .await;
}

fn updater(server: &MockServer) -> ProductUpdater<PageFetcher> {
    let fetcher = PageFetcher::new(DEFAULT_USER_AGENT, None).unwrap();
    ProductUpdater::with_base_url(fetcher, format!("{}/dp/", server.uri()))
}

#[tokio::test]
async fn check_refreshes_file_and_isolates_failures() {
    let server = MockServer::start().await;
    mock_page(&server, "B01DUC3V14", 200, PRODUCT).await;
    mock_page(&server, "B000BROKEN", 200, NO_TITLE).await;
    mock_page(&server, "B000000503", 503, "Service Unavailable").await;
    mock_page(&server, "B077G328Y2", 200, KINDLE).await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("products.json");
    fs::write(
        &file,
        r#"[
    {"ID": "B01DUC3V14", "Title": "", "Category": "", "Price": 0, "Point": 0, "NotifyPrice": 460},
    {"ID": "B000BROKEN", "Title": "壊れた商品", "Category": "books", "Price": 800, "Point": 8, "NotifyPrice": 900},
    {"ID": "B000000503", "Title": "混雑", "Category": "", "Price": 100, "Point": 0, "NotifyPrice": -1},
    {"ID": "B077G328Y2", "Title": "宇宙兄弟（３２）", "Category": "", "Price": 594, "Point": 0, "NotifyPrice": 300}
]"#,
    )
    .unwrap();

    let mut products = read_products(&file).unwrap();
    let before = products.clone();
    let report = check_products(&updater(&server), &mut products, &CheckOptions::default()).await;
    write_products(&file, &products).unwrap();

    assert_eq!(report.updated, 2);
    let failed: Vec<_> = report.failures.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(failed, ["B000BROKEN", "B000000503"]);
    assert!(matches!(
        report.failures[1].error,
        ProductError::HttpStatus { status: 503, .. }
    ));

    let saved = read_products(&file).unwrap();
    assert_eq!(saved, products);
    assert_eq!(saved[0].product.title, "AIの遺電子　１ (少年チャンピオン・コミックス)");
    assert_eq!(saved[0].product.price, 463);
    assert_eq!(saved[1], before[1]);
    assert_eq!(saved[2], before[2]);
    assert_eq!(saved[3].product.price, 475);
    assert_eq!(saved[3].product.point, 95);

    // 463 - 5 <= 460; 475 - 95 > 300; the broken item is never notified
    assert_eq!(report.notifications.len(), 1);
    assert_eq!(
        render_message(&report.notifications),
        format!(
            "AIの遺電子　１ (少年チャンピオン・コミックス) is now ￥463 (5 pt)\n{}/dp/B01DUC3V14\n\n",
            server.uri()
        )
    );
}

#[tokio::test]
async fn add_then_check_round_trip() {
    let server = MockServer::start().await;
    mock_page(&server, "B077G328Y2", 200, KINDLE).await;
    let updater = updater(&server);

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("products.json");

    let mut products = Vec::new();
    add_product(&updater, &mut products, "B077G328Y2", 400)
        .await
        .unwrap();
    write_products(&file, &products).unwrap();

    let mut products = read_products(&file).unwrap();
    assert_eq!(products[0].product.category, "digital-text");

    let report = check_products(&updater, &mut products, &CheckOptions::default()).await;
    assert_eq!(report.updated, 1);
    assert_eq!(report.notifications[0].id, "B077G328Y2");
    assert_eq!(report.notifications[0].url, format!("{}/dp/B077G328Y2", server.uri()));
}
