//! End-to-end: mock catalog API over HTTP, redb storage in a temp dir

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::Decimal;
use storefront::{CatalogView, CheckoutOutcome, Config, DetailState, Storefront};

const CATEGORIES: [&str; 4] = ["electronics", "jewelery", "men's clothing", "women's clothing"];

fn product_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Item {}", id),
        "price": id as f64 + 0.5,
        "description": "A product from the mock catalog",
        "category": CATEGORIES[(id as usize) % CATEGORIES.len()],
        "image": format!("https://example.com/{}.png", id),
        "rating": { "rate": 3.5, "count": id * 3 }
    })
}

async fn products() -> Json<Value> {
    Json(Value::Array((1..=20).map(product_json).collect()))
}

async fn product(Path(id): Path<i64>) -> axum::response::Response {
    if (1..=20).contains(&id) {
        Json(product_json(id)).into_response()
    } else {
        // The public catalog answers unknown ids this way
        (StatusCode::OK, "").into_response()
    }
}

async fn spawn_catalog(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn catalog_router() -> Router {
    Router::new()
        .route("/products", get(products))
        .route("/products/{id}", get(product))
}

fn config(base_url: &str, work_dir: &std::path::Path) -> Config {
    let mut config = Config::with_overrides(base_url, work_dir);
    config.page_size = 8;
    config.loading_delay = std::time::Duration::ZERO;
    config
}

#[tokio::test]
async fn test_browse_search_and_paginate() {
    let base_url = spawn_catalog(catalog_router()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut storefront = Storefront::initialize(&config(&base_url, dir.path())).unwrap();

    storefront.load_catalog().await.unwrap();
    assert_eq!(storefront.catalog().products().len(), 20);
    assert_eq!(storefront.catalog().visible().len(), 8);

    storefront.catalog_mut().load_more();
    assert_eq!(storefront.catalog().visible().len(), 20);
    storefront.catalog_mut().show_less();
    assert_eq!(storefront.catalog().visible().len(), 8);

    // id % 4 == 1 -> jewelery: 1, 5, 9, 13, 17
    storefront.set_search_input("JEWEL");
    storefront.submit_search();
    assert_eq!(storefront.catalog().result_count(), 5);
    assert!(storefront.catalog().is_searching());

    storefront.set_search_input("no such thing");
    storefront.submit_search();
    assert_eq!(
        storefront.catalog().view(),
        CatalogView::NoResults {
            term: "no such thing"
        }
    );

    storefront.set_search_input("");
    assert!(!storefront.catalog().is_searching());
    assert_eq!(storefront.catalog().result_count(), 20);
    assert_eq!(storefront.catalog().visible().len(), 8);
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let base_url = spawn_catalog(catalog_router()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(&base_url, dir.path());

    {
        let mut storefront = Storefront::initialize(&config).unwrap();
        storefront.load_catalog().await.unwrap();
        let first = storefront.catalog().visible()[0].clone();
        let second = storefront.catalog().visible()[1].clone();

        storefront.cart_mut().add_to_cart(&first);
        storefront.cart_mut().add_to_cart(&first);
        storefront.cart_mut().add_to_cart(&second);

        let mut detail = storefront.open_product(3).await;
        detail.quantity_mut().set(4);
        assert_eq!(storefront.add_detail_to_cart(&detail), 4);

        assert_eq!(storefront.cart().count(), 7);
        // 1.5 * 2 + 2.5 + 3.5 * 4
        assert_eq!(storefront.cart().total_price(), Decimal::new(195, 1));
        assert_eq!(storefront.checkout(), CheckoutOutcome::NotImplemented);
        assert_eq!(storefront.cart().count(), 7);
    }

    let storefront = Storefront::initialize(&config).unwrap();
    let cart = storefront.cart();
    assert_eq!(cart.lines().len(), 3);
    assert_eq!(cart.line(1).unwrap().quantity, 2);
    assert_eq!(cart.line(3).unwrap().quantity, 4);
    assert_eq!(cart.total_price(), Decimal::new(195, 1));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let base_url = spawn_catalog(catalog_router()).await;
    let dir = tempfile::tempdir().unwrap();
    let storefront = Storefront::initialize(&config(&base_url, dir.path())).unwrap();

    let detail = storefront.open_product(999).await;
    assert_eq!(detail.state(), &DetailState::NotFound);
    assert!(detail.product().is_none());
}

#[tokio::test]
async fn test_failed_catalog_then_try_again() {
    let router = Router::new().route(
        "/products",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base_url = spawn_catalog(router).await;
    let dir = tempfile::tempdir().unwrap();
    let mut storefront = Storefront::initialize(&config(&base_url, dir.path())).unwrap();

    assert!(storefront.load_catalog().await.is_err());
    assert!(matches!(
        storefront.catalog().view(),
        CatalogView::Failed { .. }
    ));

    assert!(storefront.reload_catalog().await.is_err());
    assert!(storefront.cart().is_empty());
}

#[tokio::test]
async fn test_malformed_persisted_cart_is_ignored() {
    use storefront::{LocalStorage, RedbStorage};

    let base_url = spawn_catalog(catalog_router()).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(&base_url, dir.path());
    {
        let storage = RedbStorage::open(config.storage_path()).unwrap();
        storage
            .set_item(storefront::cart::CART_STORAGE_KEY, "{ definitely not a cart")
            .unwrap();
    }

    let storefront = Storefront::initialize(&config).unwrap();
    assert!(storefront.cart().is_empty());
    assert!(!storefront.cart().is_persistence_degraded());
}
