//! Admin console pages for menus.

use std::str::FromStr;

use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;

use logic_app::ports::{MenuRepository, RestaurantRepository};
use logic_domain::error::{LogicError, NotFoundError};
use logic_domain::id::MenuId;

use super::{NameForm, RecordEditTemplate, RecordListTemplate, Row, SearchQuery};
use crate::error::ApiError;
use crate::state::AppState;

const LIST_URL: &str = "/admin/menus";

fn parse_id(raw: &str) -> Result<MenuId, ApiError> {
    MenuId::from_str(raw).map_err(|_| {
        ApiError::from(LogicError::from(NotFoundError {
            entity: "Menu",
            id: raw.to_string(),
        }))
    })
}

/// `GET /admin/menus` — list with optional name search.
pub async fn list<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Query(search): Query<SearchQuery>,
) -> Result<RecordListTemplate, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let query = search.q.unwrap_or_default();
    let menus = if query.is_empty() {
        state.menu_service.list_menus().await?
    } else {
        state.menu_service.search_menus(&query).await?
    };

    let rows = menus
        .into_iter()
        .map(|m| Row {
            id: m.id.to_string(),
            name: m.name,
        })
        .collect();

    Ok(RecordListTemplate::new("Menus", "menus", query, rows))
}

/// `POST /admin/menus` — create from form, then redirect (PRG).
pub async fn create<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    state.menu_service.create_menu(form.name).await?;
    Ok(Redirect::to(LIST_URL))
}

/// `GET /admin/menus/{id}` — edit form.
pub async fn edit<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<RecordEditTemplate, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menu_id = parse_id(&id)?;
    let menu = state.menu_service.get_menu(menu_id).await?;

    Ok(RecordEditTemplate::new(
        "Menus",
        "menus",
        menu.id.to_string(),
        menu.name,
    ))
}

/// `POST /admin/menus/{id}` — rename from form, then redirect (PRG).
pub async fn update<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menu_id = parse_id(&id)?;
    state.menu_service.update_menu(menu_id, form.name).await?;
    Ok(Redirect::to(LIST_URL))
}

/// `POST /admin/menus/{id}/delete` — delete, then redirect to the list.
pub async fn delete<RR, MR>(
    State(state): State<AppState<RR, MR>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    let menu_id = parse_id(&id)?;
    state.menu_service.delete_menu(menu_id).await?;
    Ok(Redirect::to(LIST_URL))
}
