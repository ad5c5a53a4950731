//! Repository layer.
//!
//! CRUD is provided by the generic [`crud::Repo`], instantiated once per
//! entity. Each `*_repo` module supplies the entity's SQL, its field
//! binders, and its enumerated search keys, plus any entity-specific
//! queries as inherent methods on the instantiation.

pub mod account_repo;
pub mod author_repo;
pub mod book_repo;
pub mod crud;
pub mod novelist_repo;

pub use account_repo::{AccountKey, AccountRepo};
pub use author_repo::{AuthorKey, AuthorRepo};
pub use book_repo::{BookKey, BookRepo};
pub use crud::{DeleteOutcome, Repo};
pub use novelist_repo::{NovelistKey, NovelistRepo};
