//! Generic typed CRUD over a single entity kind.
//!
//! [`Repo<E>`] is parametrized by one entity per instantiation
//! (`type AccountRepo = Repo<Account>;`). Searchable columns are a closed,
//! enumerated set per entity -- a [`SearchKey`] enum tied to its entity via
//! the [`KeyOf`] marker -- never a runtime column-name string, so a lookup
//! against a column that does not exist cannot be expressed.

use std::marker::PhantomData;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use libretto_core::types::DbId;

/// A persisted entity kind: one table, one column list.
pub trait Entity: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Column list shared across queries.
    const COLUMNS: &'static str;
}

/// An entity that can be inserted from a create DTO.
pub trait Insertable: Entity {
    /// DTO bound onto [`insert_sql`](Self::insert_sql)'s placeholders.
    type Create: BindFields + Send + Sync;

    /// INSERT statement with a RETURNING clause over [`Entity::COLUMNS`].
    fn insert_sql() -> String;
}

/// An entity that can be overwritten from an update DTO.
pub trait Updatable: Entity {
    /// DTO bound onto [`update_sql`](Self::update_sql)'s placeholders,
    /// starting at `$2` (`$1` is the row id).
    type Update: BindFields + Send + Sync;

    /// UPDATE-by-id statement. Must re-stamp `updated_at` and end in a
    /// RETURNING clause over [`Entity::COLUMNS`].
    fn update_sql() -> String;
}

/// Binds a DTO's fields, in placeholder order, onto a query.
pub trait BindFields {
    fn bind_fields<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments>;
}

/// One searchable column of some entity, carrying the value to compare.
pub trait SearchKey {
    /// Column name this key compares against.
    fn column(&self) -> &'static str;

    /// Bind the carried value as `$1` on the given query.
    fn bind_value<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments>;
}

/// Marker tying a [`SearchKey`] enum to the entity it may query.
pub trait KeyOf<E: Entity>: SearchKey {}

/// Result of [`Repo::delete_by_id`].
///
/// A storage failure is distinct from "row did not exist"; callers must
/// not collapse the two.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The row existed and was removed.
    Deleted,
    /// No row with that id.
    NotFound,
    /// The statement failed; nothing was removed.
    Failed(sqlx::Error),
}

/// Generic repository over one entity kind.
pub struct Repo<E>(PhantomData<E>);

impl<E: Entity> Repo<E> {
    /// Single-row lookup by equality on one enumerated column.
    ///
    /// An absent row is `Ok(None)`, not an error.
    pub async fn find_by<K>(pool: &PgPool, key: K) -> Result<Option<E>, sqlx::Error>
    where
        K: KeyOf<E> + Send + Sync,
    {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            E::COLUMNS,
            E::TABLE,
            key.column()
        );
        key.bind_value(sqlx::query_as::<_, E>(&query))
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete the row with the given id.
    ///
    /// A single DELETE statement is atomic: on failure nothing was removed,
    /// and the error is carried in [`DeleteOutcome::Failed`].
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> DeleteOutcome {
        let query = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        match sqlx::query(&query).bind(id).execute(pool).await {
            Ok(result) if result.rows_affected() > 0 => DeleteOutcome::Deleted,
            Ok(_) => DeleteOutcome::NotFound,
            Err(err) => {
                tracing::warn!(table = E::TABLE, id, error = %err, "delete failed");
                DeleteOutcome::Failed(err)
            }
        }
    }
}

impl<E: Insertable> Repo<E> {
    /// Insert a new row, returning it with its assigned id and timestamps.
    ///
    /// Constraint violations propagate as [`sqlx::Error`].
    pub async fn create(pool: &PgPool, input: &E::Create) -> Result<E, sqlx::Error> {
        let query = E::insert_sql();
        input
            .bind_fields(sqlx::query_as::<_, E>(&query))
            .fetch_one(pool)
            .await
    }
}

impl<E: Updatable> Repo<E> {
    /// Overwrite the row with the given id, re-stamping `updated_at`.
    ///
    /// Returns `None` when no such row exists -- callers must distinguish
    /// this from a successful overwrite with unchanged data.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &E::Update,
    ) -> Result<Option<E>, sqlx::Error> {
        let query = E::update_sql();
        input
            .bind_fields(sqlx::query_as::<_, E>(&query).bind(id))
            .fetch_optional(pool)
            .await
    }
}
