//! Authentication middleware extractors.
//!
//! - [`auth::CurrentAccount`] -- resolves a JWT Bearer token to the
//!   owning account row.

pub mod auth;
