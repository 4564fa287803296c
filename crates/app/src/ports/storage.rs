//! Storage port — repository traits for persistence.
//!
//! Each trait is the complete persistence contract for one record type.
//! `update` and `delete` report absence through their return value rather
//! than an error so the service layer decides how absence surfaces.
//! `search_by_name` exists for the admin console's free-text search; the
//! public API does not expose it.

use std::future::Future;

use logic_domain::error::LogicError;
use logic_domain::id::{MenuId, RestaurantId};
use logic_domain::menu::Menu;
use logic_domain::restaurant::Restaurant;

/// Persistence operations for [`Restaurant`] records.
pub trait RestaurantRepository {
    /// Persist a new record.
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, LogicError>> + Send;

    /// Fetch one record by identifier.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, LogicError>> + Send;

    /// Fetch every record. No ordering is guaranteed.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, LogicError>> + Send;

    /// Replace the stored record with the same id.
    ///
    /// Returns `None` (and stores nothing) when the id is absent.
    fn update(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Option<Restaurant>, LogicError>> + Send;

    /// Remove one record permanently. Returns `false` when the id was absent.
    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<bool, LogicError>> + Send;

    /// Case-insensitive substring search on `name`.
    fn search_by_name(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Restaurant>, LogicError>> + Send;
}

/// Persistence operations for [`Menu`] records.
pub trait MenuRepository {
    /// Persist a new record.
    fn create(&self, menu: Menu) -> impl Future<Output = Result<Menu, LogicError>> + Send;

    /// Fetch one record by identifier.
    fn get_by_id(
        &self,
        id: MenuId,
    ) -> impl Future<Output = Result<Option<Menu>, LogicError>> + Send;

    /// Fetch every record. No ordering is guaranteed.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Menu>, LogicError>> + Send;

    /// Replace the stored record with the same id.
    ///
    /// Returns `None` (and stores nothing) when the id is absent.
    fn update(
        &self,
        menu: Menu,
    ) -> impl Future<Output = Result<Option<Menu>, LogicError>> + Send;

    /// Remove one record permanently. Returns `false` when the id was absent.
    fn delete(&self, id: MenuId) -> impl Future<Output = Result<bool, LogicError>> + Send;

    /// Case-insensitive substring search on `name`.
    fn search_by_name(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Menu>, LogicError>> + Send;
}
