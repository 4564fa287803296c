//! Restaurant service — use-cases for managing restaurants.

use logic_domain::error::{LogicError, NotFoundError};
use logic_domain::id::RestaurantId;
use logic_domain::restaurant::Restaurant;

use crate::ports::RestaurantRepository;

/// Application service for restaurant CRUD operations.
pub struct RestaurantService<R> {
    repo: R,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new restaurant with a server-assigned identifier.
    ///
    /// Any identifier supplied by the caller is discarded; identity is
    /// generated here and never taken from the payload.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] if `name` violates field rules,
    /// or a storage error propagated from the repository.
    pub async fn create_restaurant(&self, name: String) -> Result<Restaurant, LogicError> {
        let restaurant = Restaurant::builder().name(name).build()?;
        tracing::debug!(id = %restaurant.id, "creating restaurant");
        self.repo.create(restaurant).await
    }

    /// Look up a restaurant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, LogicError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Restaurant",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all restaurants.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, LogicError> {
        self.repo.get_all().await
    }

    /// Replace the name of an existing restaurant.
    ///
    /// The update is a single atomic store operation; when `id` is absent
    /// nothing is created.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] if `name` violates field rules,
    /// [`LogicError::NotFound`] if the restaurant does not exist, or a
    /// storage error from the repository.
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        name: String,
    ) -> Result<Restaurant, LogicError> {
        let restaurant = Restaurant::builder().id(id).name(name).build()?;
        self.repo.update(restaurant).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Restaurant",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::NotFound`] if the restaurant does not exist,
    /// or a storage error propagated from the repository.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), LogicError> {
        if self.repo.delete(id).await? {
            tracing::debug!(%id, "deleted restaurant");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Restaurant",
                id: id.to_string(),
            }
            .into())
        }
    }

    /// Free-text search on restaurant names (admin console).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn search_restaurants(&self, query: &str) -> Result<Vec<Restaurant>, LogicError> {
        self.repo.search_by_name(query).await
    }
}
