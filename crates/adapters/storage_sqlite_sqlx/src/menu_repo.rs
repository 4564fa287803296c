//! `SQLite` implementation of [`MenuRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use logic_app::ports::MenuRepository;
use logic_domain::error::LogicError;
use logic_domain::id::MenuId;
use logic_domain::menu::Menu;

use crate::error::StorageError;
use crate::restaurant_repo::like_pattern;

struct Wrapper(Menu);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Menu> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        let id = MenuId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Menu { id, name }))
    }
}

const INSERT: &str = "INSERT INTO menus (id, name) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM menus WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM menus";
const UPDATE: &str = "UPDATE menus SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM menus WHERE id = ?";
const SEARCH_BY_NAME: &str = r"SELECT * FROM menus WHERE LOWER(name) LIKE LOWER(?) ESCAPE '\'";

/// `SQLite`-backed menu repository.
pub struct SqliteMenuRepository {
    pool: SqlitePool,
}

impl SqliteMenuRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for SqliteMenuRepository {
    async fn create(&self, menu: Menu) -> Result<Menu, LogicError> {
        sqlx::query(INSERT)
            .bind(menu.id.to_string())
            .bind(&menu.name)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(menu)
    }

    async fn get_by_id(&self, id: MenuId) -> Result<Option<Menu>, LogicError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Menu>, LogicError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, menu: Menu) -> Result<Option<Menu>, LogicError> {
        let result = sqlx::query(UPDATE)
            .bind(&menu.name)
            .bind(menu.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(menu))
        }
    }

    async fn delete(&self, id: MenuId) -> Result<bool, LogicError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Menu>, LogicError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SEARCH_BY_NAME)
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
