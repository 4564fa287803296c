//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use logic_app::ports::{MenuRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Registers the liveness probes, the resource routes, the documentation
/// endpoints, and the admin console under `/admin`. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<RR, MR>(state: AppState<RR, MR>) -> Router
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(health_check))
        .route("/health_check/", get(health_check))
        .route("/docs/", get(crate::docs::swagger_ui))
        .route("/docs/swagger.json", get(crate::docs::swagger_json))
        .route("/docs/swagger.yaml", get(crate::docs::swagger_yaml))
        .merge(crate::api::routes())
        .nest("/admin/", crate::admin::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. Deliberately independent of database reachability: the
/// process is alive as long as it can answer.
async fn health_check() -> &'static str {
    "OK"
}
