//! # logic-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `logic-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `logic-app` (for port traits) and `logic-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod menu_repo;
pub mod pool;
pub mod restaurant_repo;

pub use error::StorageError;
pub use menu_repo::SqliteMenuRepository;
pub use pool::{Config, Database};
pub use restaurant_repo::SqliteRestaurantRepository;
