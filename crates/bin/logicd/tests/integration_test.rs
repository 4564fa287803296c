//! End-to-end smoke tests for the full logicd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use logic_adapter_http_axum::router;
use logic_adapter_http_axum::state::AppState;
use logic_adapter_storage_sqlite_sqlx::{
    Config, SqliteMenuRepository, SqliteRestaurantRepository,
};
use logic_app::services::menu_service::MenuService;
use logic_app::services::restaurant_service::RestaurantService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let restaurant_repo = SqliteRestaurantRepository::new(pool.clone());
    let menu_repo = SqliteMenuRepository::new(pool);

    let state = AppState::new(
        RestaurantService::new(restaurant_repo),
        MenuService::new(menu_repo),
    );

    router::build(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health_check/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_ok_on_root_probe() {
    let resp = app().await.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Restaurant lifecycle (create → retrieve → delete → 404)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_walk_restaurant_through_full_lifecycle() {
    let app = app().await;

    // Create
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/restaurants/",
            r#"{"name": "Trattoria"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["name"], "Trattoria");
    let id = created["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok(), "id must be a uuid");

    // Retrieve returns the identical record
    let resp = app
        .clone()
        .oneshot(get(&format!("/restaurants/{id}/")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, created);

    // Delete
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/restaurants/{id}/"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Subsequent retrieve is a 404
    let resp = app
        .oneshot(get(&format!("/restaurants/{id}/")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_exactly_the_created_records() {
    let app = app().await;

    for i in 0..5 {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/restaurants/",
                &format!(r#"{{"name": "Place {i}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(get("/restaurants/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = read_json(resp).await;
    let records = listed.as_array().unwrap();
    assert_eq!(records.len(), 5);

    let mut ids: Vec<&str> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5, "listed ids must be distinct");
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_rename_restaurant_via_put_and_patch() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/restaurants/", r#"{"name": "Old"}"#))
        .await
        .unwrap();
    let id = read_json(resp).await["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/restaurants/{id}/"),
            r#"{"name": "Renamed"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["name"], "Renamed");

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/restaurants/{id}/"),
            r#"{"name": "Patched"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get(&format!("/restaurants/{id}/")))
        .await
        .unwrap();
    assert_eq!(read_json(resp).await["name"], "Patched");
}

#[tokio::test]
async fn should_not_create_record_when_updating_unknown_id() {
    let app = app().await;
    let id = uuid::Uuid::new_v4();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/restaurants/{id}/"),
            r#"{"name": "Ghost"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.oneshot(get("/restaurants/")).await.unwrap();
    assert!(read_json(resp).await.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_blank_and_oversized_and_missing_names() {
    let app = app().await;

    let blank = app
        .clone()
        .oneshot(json_request("POST", "/restaurants/", r#"{"name": ""}"#))
        .await
        .unwrap();
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
    let body = read_json(blank).await;
    assert!(body["error"].as_str().unwrap().contains("name"));

    let oversized = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/restaurants/",
            &format!(r#"{{"name": "{}"}}"#, "x".repeat(256)),
        ))
        .await
        .unwrap();
    assert_eq!(oversized.status(), StatusCode::BAD_REQUEST);

    let missing = app
        .clone()
        .oneshot(json_request("POST", "/menus/", r"{}"))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted
    let resp = app.oneshot(get("/restaurants/")).await.unwrap();
    assert!(read_json(resp).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_ignore_client_supplied_id_on_create() {
    let app = app().await;
    let supplied = uuid::Uuid::new_v4().to_string();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/restaurants/",
            &format!(r#"{{"id": "{supplied}", "name": "Imposter"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_ne!(created["id"].as_str().unwrap(), supplied);

    // The supplied id addresses nothing
    let resp = app
        .oneshot(get(&format!("/restaurants/{supplied}/")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Menus (independent collection)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_manage_menus_independently_of_restaurants() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/menus/", r#"{"name": "Lunch"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let menu = read_json(resp).await;

    // The menu is not visible in the restaurant collection
    let resp = app.clone().oneshot(get("/restaurants/")).await.unwrap();
    assert!(read_json(resp).await.as_array().unwrap().is_empty());

    let id = menu["id"].as_str().unwrap();
    let resp = app.oneshot(get(&format!("/menus/{id}/"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, menu);
}

// ---------------------------------------------------------------------------
// Documentation endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_openapi_documents_publicly() {
    let app = app().await;

    let resp = app.clone().oneshot(get("/docs/swagger.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert_eq!(doc["info"]["title"], "Logic Service API");
    assert_eq!(doc["info"]["version"], "latest");
    assert!(doc["paths"].get("/restaurants/").is_some());
    assert!(doc["paths"].get("/menus/{id}/").is_some());

    let resp = app.clone().oneshot(get("/docs/swagger.yaml")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/docs/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Admin console
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_created_records_in_admin_list() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/restaurants/",
            r#"{"name": "Blue Bistro"}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get("/admin/restaurants")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Blue Bistro"));
}

#[tokio::test]
async fn should_create_and_delete_records_through_admin_forms() {
    let app = app().await;

    // Create through the PRG form
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/menus")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("name=Admin+Menu"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // Visible through the public API
    let resp = app.clone().oneshot(get("/menus/")).await.unwrap();
    let menus = read_json(resp).await;
    assert_eq!(menus.as_array().unwrap().len(), 1);
    assert_eq!(menus[0]["name"], "Admin Menu");
    let id = menus[0]["id"].as_str().unwrap().to_string();

    // Delete through the PRG form
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/admin/menus/{id}/delete"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app.oneshot(get("/menus/")).await.unwrap();
    assert!(read_json(resp).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_filter_admin_list_by_search_query() {
    let app = app().await;

    for name in ["Blue Bistro", "Red Diner"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/restaurants/",
                &format!(r#"{{"name": "{name}"}}"#),
            ))
            .await
            .unwrap();
    }

    let resp = app
        .oneshot(get("/admin/restaurants?q=bistro"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Blue Bistro"));
    assert!(!html.contains("Red Diner"));
}
