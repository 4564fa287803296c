//! # logic-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for restaurants and menus
//!   (`/restaurants/`, `/menus/`, list/retrieve/create/update/delete)
//! - Serve the **OpenAPI description** (`/docs/swagger.json`, `.yaml`) and a
//!   Swagger UI page (`/docs/`)
//! - Serve a **server-side-rendered admin console** under `/admin` —
//!   pure HTML forms with POST + redirect (PRG pattern), zero JavaScript
//! - Expose liveness probes at `/` and `/health_check/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `logic-app` (for port traits and services) and `logic-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod admin;
pub mod api;
pub mod docs;
pub mod error;
pub mod router;
pub mod state;
