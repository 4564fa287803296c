//! Restaurant — a named establishment exposed through the public API.

use serde::{Deserialize, Serialize};

use crate::NAME_MAX_LEN;
use crate::error::{LogicError, ValidationError};
use crate::id::RestaurantId;

/// A restaurant record. The identifier is server-assigned and immutable;
/// only `name` may change over the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
}

impl Restaurant {
    /// Create a builder for constructing a [`Restaurant`].
    #[must_use]
    pub fn builder() -> RestaurantBuilder {
        RestaurantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] when `name` is empty or longer
    /// than 255 characters.
    pub fn validate(&self) -> Result<(), LogicError> {
        validate_name(&self.name)?;
        Ok(())
    }
}

/// Validate a record name against the shared field rules.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] for the empty string and
/// [`ValidationError::NameTooLong`] above 255 characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong { len });
    }
    Ok(())
}

/// Step-by-step builder for [`Restaurant`].
#[derive(Debug, Default)]
pub struct RestaurantBuilder {
    id: Option<RestaurantId>,
    name: Option<String>,
}

impl RestaurantBuilder {
    #[must_use]
    pub fn id(mut self, id: RestaurantId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Restaurant`].
    ///
    /// A fresh random identifier is generated when none was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] if `name` is missing, empty, or
    /// too long.
    pub fn build(self) -> Result<Restaurant, LogicError> {
        let restaurant = Restaurant {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        restaurant.validate()?;
        Ok(restaurant)
    }
}
