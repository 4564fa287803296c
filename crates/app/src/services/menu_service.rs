//! Menu service — use-cases for managing menus.

use logic_domain::error::{LogicError, NotFoundError};
use logic_domain::id::MenuId;
use logic_domain::menu::Menu;

use crate::ports::MenuRepository;

/// Application service for menu CRUD operations.
pub struct MenuService<R> {
    repo: R,
}

impl<R: MenuRepository> MenuService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new menu with a server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] if `name` violates field rules,
    /// or a storage error propagated from the repository.
    pub async fn create_menu(&self, name: String) -> Result<Menu, LogicError> {
        let menu = Menu::builder().name(name).build()?;
        tracing::debug!(id = %menu.id, "creating menu");
        self.repo.create(menu).await
    }

    /// Look up a menu by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::NotFound`] when no menu with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_menu(&self, id: MenuId) -> Result<Menu, LogicError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Menu",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all menus.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_menus(&self) -> Result<Vec<Menu>, LogicError> {
        self.repo.get_all().await
    }

    /// Replace the name of an existing menu.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Validation`] if `name` violates field rules,
    /// [`LogicError::NotFound`] if the menu does not exist, or a storage
    /// error from the repository.
    pub async fn update_menu(&self, id: MenuId, name: String) -> Result<Menu, LogicError> {
        let menu = Menu::builder().id(id).name(name).build()?;
        self.repo.update(menu).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Menu",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a menu by id.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::NotFound`] if the menu does not exist,
    /// or a storage error propagated from the repository.
    pub async fn delete_menu(&self, id: MenuId) -> Result<(), LogicError> {
        if self.repo.delete(id).await? {
            tracing::debug!(%id, "deleted menu");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Menu",
                id: id.to_string(),
            }
            .into())
        }
    }

    /// Free-text search on menu names (admin console).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn search_menus(&self, query: &str) -> Result<Vec<Menu>, LogicError> {
        self.repo.search_by_name(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryMenuRepo {
        store: Mutex<HashMap<MenuId, Menu>>,
    }

    impl MenuRepository for InMemoryMenuRepo {
        fn create(&self, menu: Menu) -> impl Future<Output = Result<Menu, LogicError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(menu.id, menu.clone());
            async { Ok(menu) }
        }

        fn get_by_id(
            &self,
            id: MenuId,
        ) -> impl Future<Output = Result<Option<Menu>, LogicError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Menu>, LogicError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Menu> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            menu: Menu,
        ) -> impl Future<Output = Result<Option<Menu>, LogicError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = if store.contains_key(&menu.id) {
                store.insert(menu.id, menu.clone());
                Some(menu)
            } else {
                None
            };
            async { Ok(result) }
        }

        fn delete(&self, id: MenuId) -> impl Future<Output = Result<bool, LogicError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }

        fn search_by_name(
            &self,
            query: &str,
        ) -> impl Future<Output = Result<Vec<Menu>, LogicError>> + Send {
            let needle = query.to_lowercase();
            let store = self.store.lock().unwrap();
            let result: Vec<Menu> = store
                .values()
                .filter(|m| m.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            async { Ok(result) }
        }
    }

    fn service() -> MenuService<InMemoryMenuRepo> {
        MenuService::new(InMemoryMenuRepo::default())
    }

    #[tokio::test]
    async fn should_create_and_fetch_menu() {
        let service = service();
        let created = service.create_menu("Lunch".to_string()).await.unwrap();
        let fetched = service.get_menu(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_allow_duplicate_names() {
        let service = service();
        let a = service.create_menu("Specials".to_string()).await.unwrap();
        let b = service.create_menu("Specials".to_string()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.list_menus().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_menu() {
        let service = service();
        let result = service.update_menu(MenuId::new(), "Ghost".to_string()).await;
        assert!(matches!(result, Err(LogicError::NotFound(_))));
        assert!(service.list_menus().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_menu_permanently() {
        let service = service();
        let created = service.create_menu("Dinner".to_string()).await.unwrap();
        service.delete_menu(created.id).await.unwrap();
        assert!(matches!(
            service.get_menu(created.id).await,
            Err(LogicError::NotFound(_))
        ));
    }
}
