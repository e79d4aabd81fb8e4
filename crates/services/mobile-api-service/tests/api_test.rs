//! Integration tests for the mobile listing endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use catalog::infra::{CacheState, Database};
use catalog::service::ServiceContainer;
use catalog::Catalog;
use common::DatabaseConfig;
use domain::{CreateBrand, CreateStore, CreateUser, UpdateBrand};
use mobile_api_service_lib::create_app;

// =============================================================================
// Test Helpers
// =============================================================================

async fn catalog() -> Catalog {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let database = Database::connect(&config).await.expect("sqlite should open");
    Catalog::new(database, CacheState::Disabled)
}

async fn seed_brands(catalog: &Catalog, count: usize) -> Vec<i32> {
    let brands = catalog.services().brands();
    let mut ids = Vec::with_capacity(count);
    for i in 1..=count {
        let brand = brands
            .create(CreateBrand {
                name: format!("Brand {}", i),
                ..Default::default()
            })
            .await
            .unwrap();
        ids.push(brand.id);
    }
    ids
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Listings
// =============================================================================

#[tokio::test]
async fn default_page_envelope() {
    let catalog = catalog().await;
    seed_brands(&catalog, 12).await;
    let app = create_app(&catalog);

    let (status, body) = get(&app, "/api/brands").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["total"], 12);
    assert_eq!(ids(&body).len(), 10);
}

#[tokio::test]
async fn pages_cover_every_active_row_once() {
    let catalog = catalog().await;
    let seeded = seed_brands(&catalog, 7).await;
    let app = create_app(&catalog);

    let mut seen = Vec::new();
    for page in 1..=3 {
        let (_, body) = get(&app, &format!("/api/brands?page={}&limit=3", page)).await;
        seen.extend(ids(&body));
    }

    let expected: Vec<i64> = seeded.into_iter().map(i64::from).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let catalog = catalog().await;
    seed_brands(&catalog, 2).await;
    let app = create_app(&catalog);

    let (status, body) = get(&app, "/api/brands?page=5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn huge_page_number_is_an_empty_page() {
    let catalog = catalog().await;
    seed_brands(&catalog, 3).await;
    let app = create_app(&catalog);

    for uri in [
        "/api/brands?page=9223372036854775807&limit=100",
        "/api/brands?page=1000000000000000000&limit=10",
    ] {
        let (status, body) = get(&app, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(ids(&body).is_empty());
        assert_eq!(body["pagination"]["total"], 3);
    }
}

#[tokio::test]
async fn invalid_query_falls_back_to_defaults() {
    let catalog = catalog().await;
    let app = create_app(&catalog);

    let (status, body) = get(&app, "/api/stores?page=abc&limit=-4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
}

#[tokio::test]
async fn limit_is_capped() {
    let catalog = catalog().await;
    let app = create_app(&catalog);

    let (_, body) = get(&app, "/api/users?limit=1000").await;

    assert_eq!(body["pagination"]["limit"], 100);
}

#[tokio::test]
async fn inactive_and_deleted_rows_are_hidden() {
    let catalog = catalog().await;
    let ids_seeded = seed_brands(&catalog, 3).await;
    let brands = catalog.services().brands();
    brands
        .update(
            ids_seeded[0],
            UpdateBrand {
                status: Some("inactive".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    brands.delete(ids_seeded[1]).await.unwrap();
    let app = create_app(&catalog);

    let (_, body) = get(&app, "/api/brands").await;

    assert_eq!(ids(&body), vec![i64::from(ids_seeded[2])]);
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn each_resource_has_its_own_listing() {
    let catalog = catalog().await;
    catalog
        .services()
        .users()
        .create(CreateUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: String::new(),
        })
        .await
        .unwrap();
    catalog
        .services()
        .stores()
        .create(CreateStore {
            name: "Main St".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let app = create_app(&catalog);

    let (_, users) = get(&app, "/api/users").await;
    let (_, stores) = get(&app, "/api/stores").await;
    let (_, brands) = get(&app, "/api/brands").await;

    assert_eq!(users["data"][0]["email"], "ann@x.com");
    assert_eq!(stores["data"][0]["name"], "Main St");
    assert_eq!(brands["pagination"]["total"], 0);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_names_the_service() {
    let catalog = catalog().await;
    let app = create_app(&catalog);

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "mobile-api-service");
}
