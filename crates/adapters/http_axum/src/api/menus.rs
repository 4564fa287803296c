//! JSON REST handlers for menus.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use logic_app::ports::{MenuRepository, RestaurantRepository};
use logic_domain::error::{LogicError, NotFoundError};
use logic_domain::id::MenuId;
use logic_domain::menu::Menu;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or renaming a menu. Any `id` field in the body
/// is ignored; a missing `name` surfaces as a field-level validation error.
#[derive(Deserialize)]
pub struct WriteMenuRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Menu>>),
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
    Ok(Json<Menu>),
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
    Created(Json<Menu>),
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

fn parse_id(raw: &str) -> Result<MenuId, ApiError> {
    MenuId::from_str(raw).map_err(|_| {
        ApiError::from(LogicError::from(NotFoundError {
            entity: "Menu",
            id: raw.to_string(),
        }))
    })
}

/// `GET /menus/`
pub async fn list<RR, MR>(State(state): State<AppState<RR, MR>>) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menus = state.menu_service.list_menus().await?;
    Ok(ListResponse::Ok(Json(menus)))
}

/// `GET /menus/{id}/`
pub async fn get<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menu_id = parse_id(&id)?;
    let menu = state.menu_service.get_menu(menu_id).await?;
    Ok(GetResponse::Ok(Json(menu)))
}

/// `POST /menus/`
pub async fn create<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Json(req): Json<WriteMenuRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let created = state
        .menu_service
        .create_menu(req.name.unwrap_or_default())
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT|PATCH /menus/{id}/`
pub async fn update<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
    Json(req): Json<WriteMenuRequest>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menu_id = parse_id(&id)?;
    let updated = state
        .menu_service
        .update_menu(menu_id, req.name.unwrap_or_default())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /menus/{id}/`
pub async fn delete<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menu_id = parse_id(&id)?;
    state.menu_service.delete_menu(menu_id).await?;
    Ok(DeleteResponse::NoContent)
}
