//! Menu — a named menu exposed through the public API.
//!
//! Menus are an independent collection; no relationship to restaurants is
//! modelled.

use serde::{Deserialize, Serialize};

use crate::error::LogicError;
use crate::id::MenuId;
use crate::restaurant::validate_name;

/// A menu record. Structurally identical to a restaurant: a server-assigned
/// identifier plus a mutable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
}

impl Menu {
    /// Create a builder for constructing a [`Menu`].
    #[must_use]
    pub fn builder() -> MenuBuilder {
        MenuBuilder::default()
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

/// Step-by-step builder for [`Menu`].
#[derive(Debug, Default)]
pub struct MenuBuilder {
    id: Option<MenuId>,
    name: Option<String>,
}

impl MenuBuilder {
    #[must_use]
    pub fn id(mut self, id: MenuId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Menu`].
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] if `name` is missing, empty, or
    /// too long.
    pub fn build(self) -> Result<Menu, LogicError> {
        let menu = Menu {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        menu.validate()?;
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn should_build_valid_menu_when_name_provided() {
        let menu = Menu::builder().name("Lunch").build().unwrap();
        assert_eq!(menu.name, "Lunch");
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Menu::builder().name("").build();
        assert!(matches!(
            result,
            Err(LogicError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_supplied_id_when_building() {
        let id = MenuId::new();
        let menu = Menu::builder().id(id).name("Dinner").build().unwrap();
        assert_eq!(menu.id, id);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let menu = Menu::builder().name("Specials").build().unwrap();
        let json = serde_json::to_string(&menu).unwrap();
        let parsed: Menu = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, menu);
    }
}
