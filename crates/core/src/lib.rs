//! Domain primitives shared by the `libretto` crates.
//!
//! - [`error`] -- the domain error taxonomy surfaced to API clients.
//! - [`pagination`] -- limit/offset clamping for list endpoints.
//! - [`sanitize`] -- free-text normalization for catalog names and titles.
//! - [`types`] -- id and timestamp aliases matching the database schema.

pub mod error;
pub mod pagination;
pub mod sanitize;
pub mod types;
