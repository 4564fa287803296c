//! # logic-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RestaurantRepository` — CRUD plus name search for restaurants
//!   - `MenuRepository` — CRUD plus name search for menus
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RestaurantService` — create, get, list, update, delete, search
//!   - `MenuService` — same operations for menus
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `logic-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
