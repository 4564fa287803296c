//! # logic-domain
//!
//! Pure domain model for the logic service, a Buildly-compatible CRUD
//! microservice exposing restaurants and menus.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **Restaurant** and **Menu** records with their invariants
//!   (server-assigned identity, non-empty name capped at 255 characters)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod menu;
pub mod restaurant;

/// Maximum number of characters allowed in a record name.
pub const NAME_MAX_LEN: usize = 255;
