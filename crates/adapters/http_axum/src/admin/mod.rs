//! Server-side rendered admin console (no JavaScript).
//!
//! A generic record browser/editor over the entity store: one list page per
//! resource with `name`/`id` columns and free-text search on `name`, plus
//! create, edit, and delete forms. Forms use POST + redirect (PRG pattern)
//! to avoid double submission. The console consumes the same application
//! services as the JSON API and stays out of the API request path.

#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod menus;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use askama::Template;
use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;

use logic_app::ports::{MenuRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the `/admin` sub-router.
pub fn routes<RR, MR>() -> Router<AppState<RR, MR>>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<RR, MR>))
        .route(
            "/restaurants",
            get(restaurants::list::<RR, MR>).post(restaurants::create::<RR, MR>),
        )
        .route(
            "/restaurants/{id}",
            get(restaurants::edit::<RR, MR>).post(restaurants::update::<RR, MR>),
        )
        .route(
            "/restaurants/{id}/delete",
            post(restaurants::delete::<RR, MR>),
        )
        .route(
            "/menus",
            get(menus::list::<RR, MR>).post(menus::create::<RR, MR>),
        )
        .route(
            "/menus/{id}",
            get(menus::edit::<RR, MR>).post(menus::update::<RR, MR>),
        )
        .route("/menus/{id}/delete", post(menus::delete::<RR, MR>))
}

/// Free-text search parameters for list pages.
#[derive(Deserialize)]
pub struct SearchQuery {
    /// Substring to match against `name`; empty or missing lists everything.
    pub q: Option<String>,
}

/// Form body for create and update submissions.
#[derive(Deserialize)]
pub struct NameForm {
    pub name: String,
}

/// One table row on a list page.
pub struct Row {
    pub id: String,
    pub name: String,
}

/// Record list page, shared by both resources.
#[derive(Template)]
#[template(path = "record_list.html")]
pub struct RecordListTemplate {
    title: &'static str,
    resource: &'static str,
    query: String,
    rows: Vec<Row>,
}

impl RecordListTemplate {
    pub(crate) fn new(
        title: &'static str,
        resource: &'static str,
        query: String,
        rows: Vec<Row>,
    ) -> Self {
        Self {
            title,
            resource,
            query,
            rows,
        }
    }
}

impl IntoResponse for RecordListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Record edit page, shared by both resources.
#[derive(Template)]
#[template(path = "record_edit.html")]
pub struct RecordEditTemplate {
    title: &'static str,
    resource: &'static str,
    id: String,
    name: String,
}

impl RecordEditTemplate {
    pub(crate) fn new(
        title: &'static str,
        resource: &'static str,
        id: String,
        name: String,
    ) -> Self {
        Self {
            title,
            resource,
            id,
            name,
        }
    }
}

impl IntoResponse for RecordEditTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}
