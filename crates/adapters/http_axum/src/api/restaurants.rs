//! JSON REST handlers for restaurants.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use logic_app::ports::{MenuRepository, RestaurantRepository};
use logic_domain::error::{LogicError, NotFoundError};
use logic_domain::id::RestaurantId;
use logic_domain::restaurant::Restaurant;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or renaming a restaurant.
///
/// Identity is server-assigned: an `id` field in the body is ignored and
/// never overrides the generated or addressed identifier. `name` is optional
/// at the deserialization level so a missing field surfaces as a field-level
/// validation error (400) rather than a body rejection.
#[derive(Deserialize)]
pub struct WriteRestaurantRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Restaurant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the retrieve and update endpoints.
pub enum GetResponse {
    Ok(Json<Restaurant>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Restaurant>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// A path segment that is not a well-formed UUID can never address a stored
/// record, so it surfaces as 404 rather than 400.
fn parse_id(raw: &str) -> Result<RestaurantId, ApiError> {
    RestaurantId::from_str(raw).map_err(|_| {
        ApiError::from(LogicError::from(NotFoundError {
            entity: "Restaurant",
            id: raw.to_string(),
        }))
    })
}

/// `GET /restaurants/`
pub async fn list<RR, MR>(
    State(state): State<AppState<RR, MR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /restaurants/{id}/`
pub async fn get<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    let restaurant = state.restaurant_service.get_restaurant(restaurant_id).await?;
    Ok(GetResponse::Ok(Json(restaurant)))
}

/// `POST /restaurants/`
pub async fn create<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Json(req): Json<WriteRestaurantRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let created = state
        .restaurant_service
        .create_restaurant(req.name.unwrap_or_default())
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT|PATCH /restaurants/{id}/`
pub async fn update<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
    Json(req): Json<WriteRestaurantRequest>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    let updated = state
        .restaurant_service
        .update_restaurant(restaurant_id, req.name.unwrap_or_default())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /restaurants/{id}/`
pub async fn delete<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    state.restaurant_service.delete_restaurant(restaurant_id).await?;
    Ok(DeleteResponse::NoContent)
}
