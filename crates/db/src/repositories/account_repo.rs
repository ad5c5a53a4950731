//! Repository instantiation for the `accounts` table.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use libretto_core::types::DbId;

use crate::models::account::{Account, CreateAccount, UpdateAccount};
use crate::repositories::crud::{BindFields, Entity, Insertable, KeyOf, Repo, SearchKey, Updatable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

impl Entity for Account {
    const TABLE: &'static str = "accounts";
    const COLUMNS: &'static str = COLUMNS;
}

impl Insertable for Account {
    type Create = CreateAccount;

    fn insert_sql() -> String {
        format!(
            "INSERT INTO accounts (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        )
    }
}

impl Updatable for Account {
    type Update = UpdateAccount;

    fn update_sql() -> String {
        format!(
            "UPDATE accounts SET
                username = $2,
                email = $3,
                password_hash = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        )
    }
}

impl BindFields for CreateAccount {
    fn bind_fields<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(self.username.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
    }
}

impl BindFields for UpdateAccount {
    fn bind_fields<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(self.username.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
    }
}

/// Searchable columns of the `accounts` table.
#[derive(Debug, Clone, Copy)]
pub enum AccountKey<'a> {
    Id(DbId),
    Username(&'a str),
    Email(&'a str),
}

impl SearchKey for AccountKey<'_> {
    fn column(&self) -> &'static str {
        match self {
            AccountKey::Id(_) => "id",
            AccountKey::Username(_) => "username",
            AccountKey::Email(_) => "email",
        }
    }

    fn bind_value<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match *self {
            AccountKey::Id(id) => query.bind(id),
            AccountKey::Username(value) | AccountKey::Email(value) => query.bind(value),
        }
    }
}

impl KeyOf<Account> for AccountKey<'_> {}

/// CRUD operations for accounts.
pub type AccountRepo = Repo<Account>;
