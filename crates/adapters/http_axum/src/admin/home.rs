//! Admin console home page — overview of the managed collections.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use logic_app::ports::{MenuRepository, RestaurantRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "admin_home.html")]
pub struct HomeTemplate {
    restaurant_count: usize,
    menu_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /admin/` — collection overview.
pub async fn index<RR, MR>(
    State(state): State<AppState<RR, MR>>,
) -> Result<HomeTemplate, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    let menus = state.menu_service.list_menus().await?;

    Ok(HomeTemplate {
        restaurant_count: restaurants.len(),
        menu_count: menus.len(),
    })
}
