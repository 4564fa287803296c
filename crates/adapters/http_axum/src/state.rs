//! Shared application state for axum handlers.

use std::sync::Arc;

use logic_app::ports::{MenuRepository, RestaurantRepository};
use logic_app::services::menu_service::MenuService;
use logic_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<RR, MR> {
    /// Restaurant CRUD service.
    pub restaurant_service: Arc<RestaurantService<RR>>,
    /// Menu CRUD service.
    pub menu_service: Arc<MenuService<MR>>,
}

impl<RR, MR> Clone for AppState<RR, MR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
            menu_service: Arc::clone(&self.menu_service),
        }
    }
}

impl<RR, MR> AppState<RR, MR>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        restaurant_service: RestaurantService<RR>,
        menu_service: MenuService<MR>,
    ) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
            menu_service: Arc::new(menu_service),
        }
    }
}
