//! JSON REST API handler modules.
//!
//! Paths carry trailing slashes, matching the public contract of the
//! original service (`GET /restaurants/`, `GET /restaurants/{id}/`, …).

#[allow(clippy::missing_errors_doc)]
pub mod menus;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::get;

use logic_app::ports::{MenuRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the resource sub-router.
pub fn routes<RR, MR>() -> Router<AppState<RR, MR>>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    Router::new()
        // Restaurants
        .route(
            "/restaurants/",
            get(restaurants::list::<RR, MR>).post(restaurants::create::<RR, MR>),
        )
        .route(
            "/restaurants/{id}/",
            get(restaurants::get::<RR, MR>)
                .put(restaurants::update::<RR, MR>)
                .patch(restaurants::update::<RR, MR>)
                .delete(restaurants::delete::<RR, MR>),
        )
        // Menus
        .route(
            "/menus/",
            get(menus::list::<RR, MR>).post(menus::create::<RR, MR>),
        )
        .route(
            "/menus/{id}/",
            get(menus::get::<RR, MR>)
                .put(menus::update::<RR, MR>)
                .patch(menus::update::<RR, MR>)
                .delete(menus::delete::<RR, MR>),
        )
}
