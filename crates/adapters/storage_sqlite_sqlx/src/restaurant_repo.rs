//! `SQLite` implementation of [`RestaurantRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use logic_app::ports::RestaurantRepository;
use logic_domain::error::LogicError;
use logic_domain::id::RestaurantId;
use logic_domain::restaurant::Restaurant;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Restaurant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Restaurant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        let id =
            RestaurantId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Restaurant { id, name }))
    }
}

const INSERT: &str = "INSERT INTO restaurants (id, name) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM restaurants";
const UPDATE: &str = "UPDATE restaurants SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ?";
const SEARCH_BY_NAME: &str =
    r"SELECT * FROM restaurants WHERE LOWER(name) LIKE LOWER(?) ESCAPE '\'";

/// Turn a free-text query into a `LIKE` pattern, neutralising wildcards.
pub(crate) fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_");
    format!("%{escaped}%")
}

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    async fn create(&self, restaurant: Restaurant) -> Result<Restaurant, LogicError> {
        sqlx::query(INSERT)
            .bind(restaurant.id.to_string())
            .bind(&restaurant.name)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(restaurant)
    }

    async fn get_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, LogicError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Restaurant>, LogicError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, restaurant: Restaurant) -> Result<Option<Restaurant>, LogicError> {
        let result = sqlx::query(UPDATE)
            .bind(&restaurant.name)
            .bind(restaurant.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(restaurant))
        }
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool, LogicError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Restaurant>, LogicError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SEARCH_BY_NAME)
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteRestaurantRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();

        SqliteRestaurantRepository::new(db.pool().clone())
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant::builder().name(name).build().unwrap()
    }

    #[tokio::test]
    async fn should_persist_and_fetch_restaurant_by_id() {
        let repo = setup().await;
        let created = repo.create(restaurant("Trattoria")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let repo = setup().await;
        let fetched = repo.get_by_id(RestaurantId::new()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn should_list_every_persisted_restaurant() {
        let repo = setup().await;
        for i in 0..4 {
            repo.create(restaurant(&format!("Place {i}"))).await.unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn should_replace_name_on_update() {
        let repo = setup().await;
        let created = repo.create(restaurant("Old")).await.unwrap();

        let updated = repo
            .update(Restaurant {
                id: created.id,
                name: "New".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.unwrap().name, "New");
        assert_eq!(repo.get_by_id(created.id).await.unwrap().unwrap().name, "New");
    }

    #[tokio::test]
    async fn should_return_none_when_updating_unknown_id() {
        let repo = setup().await;
        let result = repo.update(restaurant("Ghost")).await.unwrap();
        assert!(result.is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_absence_on_delete() {
        let repo = setup().await;
        let created = repo.create(restaurant("Gone")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_match_case_insensitive_substring_when_searching() {
        let repo = setup().await;
        repo.create(restaurant("Blue Bistro")).await.unwrap();
        repo.create(restaurant("Red Diner")).await.unwrap();

        let hits = repo.search_by_name("BISTRO").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Blue Bistro");
    }

    #[tokio::test]
    async fn should_not_treat_percent_as_wildcard_when_searching() {
        let repo = setup().await;
        repo.create(restaurant("100% Vegan")).await.unwrap();
        repo.create(restaurant("Steakhouse")).await.unwrap();

        let hits = repo.search_by_name("100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Vegan");
    }

    #[test]
    fn should_escape_like_wildcards_in_pattern() {
        assert_eq!(like_pattern("a_b%c"), r"%a\_b\%c%");
    }

    #[tokio::test]
    async fn should_allow_duplicate_names_with_distinct_ids() {
        let repo = setup().await;
        let a = repo.create(restaurant("Twin")).await.unwrap();
        let b = repo.create(restaurant("Twin")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }
}
