//! Admin console pages for restaurants.

use std::str::FromStr;

use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;

use logic_app::ports::{MenuRepository, RestaurantRepository};
use logic_domain::error::{LogicError, NotFoundError};
use logic_domain::id::RestaurantId;

use super::{NameForm, RecordEditTemplate, RecordListTemplate, Row, SearchQuery};
use crate::error::ApiError;
use crate::state::AppState;

const LIST_URL: &str = "/admin/restaurants";

fn parse_id(raw: &str) -> Result<RestaurantId, ApiError> {
    RestaurantId::from_str(raw).map_err(|_| {
        ApiError::from(LogicError::from(NotFoundError {
            entity: "Restaurant",
            id: raw.to_string(),
        }))
    })
}

/// `GET /admin/restaurants` — list with optional name search.
pub async fn list<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Query(search): Query<SearchQuery>,
) -> Result<RecordListTemplate, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let query = search.q.unwrap_or_default();
    let restaurants = if query.is_empty() {
        state.restaurant_service.list_restaurants().await?
    } else {
        state.restaurant_service.search_restaurants(&query).await?
    };

    let rows = restaurants
        .into_iter()
        .map(|r| Row {
            id: r.id.to_string(),
            name: r.name,
        })
        .collect();

    Ok(RecordListTemplate::new("Restaurants", "restaurants", query, rows))
}

/// `POST /admin/restaurants` — create from form, then redirect (PRG).
pub async fn create<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    state.restaurant_service.create_restaurant(form.name).await?;
    Ok(Redirect::to(LIST_URL))
}

/// `GET /admin/restaurants/{id}` — edit form.
pub async fn edit<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<RecordEditTemplate, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    let restaurant = state.restaurant_service.get_restaurant(restaurant_id).await?;

    Ok(RecordEditTemplate::new(
        "Restaurants",
        "restaurants",
        restaurant.id.to_string(),
        restaurant.name,
    ))
}

/// `POST /admin/restaurants/{id}` — rename from form, then redirect (PRG).
pub async fn update<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    state
        .restaurant_service
        .update_restaurant(restaurant_id, form.name)
        .await?;
    Ok(Redirect::to(LIST_URL))
}

/// `POST /admin/restaurants/{id}/delete` — delete, then redirect to the list.
pub async fn delete<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    state.restaurant_service.delete_restaurant(restaurant_id).await?;
    Ok(Redirect::to(LIST_URL))
}
