//! Integration tests for the generic repository and its instantiations.
//!
//! Exercises the repository layer against a real database:
//! - Create assigns surrogate ids and server timestamps
//! - Lookup by each enumerated search key
//! - Whole-record update re-stamps `updated_at`
//! - Tri-state delete
//! - Unique constraint violations propagate
//! - Author -> book cascade
//! - Book list filters and pagination

use assert_matches::assert_matches;
use sqlx::PgPool;

use libretto_db::models::account::{CreateAccount, UpdateAccount};
use libretto_db::models::author::CreateAuthor;
use libretto_db::models::book::{BookFilter, CreateBook};
use libretto_db::models::novelist::CreateNovelist;
use libretto_db::repositories::{
    AccountKey, AccountRepo, AuthorKey, AuthorRepo, BookKey, BookRepo, DeleteOutcome, NovelistRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_account(username: &str) -> CreateAccount {
    CreateAccount {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$fake-hash".to_string(),
    }
}

async fn seed_author(pool: &PgPool, name: &str) -> i64 {
    AuthorRepo::create(pool, &CreateAuthor { name: name.to_string() })
        .await
        .unwrap()
        .id
}

async fn seed_book(pool: &PgPool, author_id: i64, title: &str, year: i32) -> i64 {
    BookRepo::create(
        pool,
        &CreateBook {
            author_id,
            title: title.to_string(),
            publish_year: year,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_id_and_timestamps(pool: PgPool) {
    let account = AccountRepo::create(&pool, &new_account("alice")).await.unwrap();

    assert!(account.id > 0);
    assert_eq!(account.username, "alice");
    assert_eq!(account.email, "alice@test.com");
    assert_eq!(account.created_at, account.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_each_account_key(pool: PgPool) {
    let created = AccountRepo::create(&pool, &new_account("bob")).await.unwrap();

    let by_id = AccountRepo::find_by(&pool, AccountKey::Id(created.id))
        .await
        .unwrap()
        .expect("lookup by id should hit");
    assert_eq!(by_id.username, "bob");

    let by_username = AccountRepo::find_by(&pool, AccountKey::Username("bob"))
        .await
        .unwrap()
        .expect("lookup by username should hit");
    assert_eq!(by_username.id, created.id);

    let by_email = AccountRepo::find_by(&pool, AccountKey::Email("bob@test.com"))
        .await
        .unwrap()
        .expect("lookup by email should hit");
    assert_eq!(by_email.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_absent_is_none_not_error(pool: PgPool) {
    let missing = AccountRepo::find_by(&pool, AccountKey::Id(9999)).await.unwrap();
    assert!(missing.is_none());

    let missing = AuthorRepo::find_by(&pool, AuthorKey::Name("nobody")).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_and_restamps(pool: PgPool) {
    let created = AccountRepo::create(&pool, &new_account("carol")).await.unwrap();

    let update = UpdateAccount {
        username: "carol2".to_string(),
        email: "carol2@test.com".to_string(),
        password_hash: "$argon2id$new-hash".to_string(),
    };
    let updated = AccountRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("row exists, update should return it");

    assert_eq!(updated.username, "carol2");
    assert_eq!(updated.email, "carol2@test.com");
    assert_eq!(updated.password_hash, "$argon2id$new-hash");
    assert_eq!(updated.created_at, created.created_at);
    assert!(
        updated.updated_at > created.updated_at,
        "update must re-stamp updated_at"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_is_none(pool: PgPool) {
    let update = UpdateAccount {
        username: "ghost".to_string(),
        email: "ghost@test.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
    };
    let result = AccountRepo::update(&pool, 9999, &update).await.unwrap();
    assert!(result.is_none(), "updating a missing row must signal not-found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_tristate(pool: PgPool) {
    let created = AccountRepo::create(&pool, &new_account("dave")).await.unwrap();

    match AccountRepo::delete_by_id(&pool, created.id).await {
        DeleteOutcome::Deleted => {}
        other => panic!("first delete should report Deleted, got {other:?}"),
    }

    // The row is gone: a read misses and a second delete is NotFound.
    let gone = AccountRepo::find_by(&pool, AccountKey::Id(created.id)).await.unwrap();
    assert!(gone.is_none());

    match AccountRepo::delete_by_id(&pool, created.id).await {
        DeleteOutcome::NotFound => {}
        other => panic!("second delete should report NotFound, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Uniqueness constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_constraint(pool: PgPool) {
    AccountRepo::create(&pool, &new_account("erin")).await.unwrap();

    let mut duplicate = new_account("erin");
    duplicate.email = "other@test.com".to_string();

    let err = AccountRepo::create(&pool, &duplicate)
        .await
        .expect_err("duplicate username must violate uq_accounts_username");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_accounts_username"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_names_violate_constraints(pool: PgPool) {
    seed_author(&pool, "jane doe").await;
    let err = AuthorRepo::create(&pool, &CreateAuthor { name: "jane doe".to_string() })
        .await
        .expect_err("duplicate author name must fail");
    assert_matches!(err, sqlx::Error::Database(_));

    NovelistRepo::create(&pool, &CreateNovelist { name: "john roe".to_string() })
        .await
        .unwrap();
    let err = NovelistRepo::create(&pool, &CreateNovelist { name: "john roe".to_string() })
        .await
        .expect_err("duplicate novelist name must fail");
    assert_matches!(err, sqlx::Error::Database(_));
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_author_cascades_to_books(pool: PgPool) {
    let author_id = seed_author(&pool, "cascade author").await;
    let book_id = seed_book(&pool, author_id, "cascade book", 2020).await;

    match AuthorRepo::delete_by_id(&pool, author_id).await {
        DeleteOutcome::Deleted => {}
        other => panic!("author delete should succeed, got {other:?}"),
    }

    let orphan = BookRepo::find_by(&pool, BookKey::Id(book_id)).await.unwrap();
    assert!(orphan.is_none(), "books must be removed with their author");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_book_with_dangling_author_rejected(pool: PgPool) {
    let err = BookRepo::create(
        &pool,
        &CreateBook {
            author_id: 9999,
            title: "orphan book".to_string(),
            publish_year: 2020,
        },
    )
    .await
    .expect_err("a dangling author_id must violate the foreign key");
    assert_matches!(err, sqlx::Error::Database(_));
}

// ---------------------------------------------------------------------------
// Book listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_books_filters_and_pagination(pool: PgPool) {
    let author_id = seed_author(&pool, "prolific author").await;
    seed_book(&pool, author_id, "rust in practice", 2020).await;
    seed_book(&pool, author_id, "practical rust", 2021).await;
    seed_book(&pool, author_id, "cooking for one", 2021).await;

    // Substring filter, case-insensitive.
    let filter = BookFilter {
        title_contains: Some("RUST".to_string()),
        publish_year: None,
    };
    let books = BookRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert_eq!(books.len(), 2);

    // Year filter.
    let filter = BookFilter {
        title_contains: None,
        publish_year: Some(2021),
    };
    let books = BookRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert_eq!(books.len(), 2);

    // Combined filters.
    let filter = BookFilter {
        title_contains: Some("rust".to_string()),
        publish_year: Some(2021),
    };
    let books = BookRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "practical rust");

    // Pagination: page size 2, ordered by id.
    let all = BookFilter::default();
    let first_page = BookRepo::list(&pool, &all, 2, 0).await.unwrap();
    assert_eq!(first_page.len(), 2);
    let second_page = BookRepo::list(&pool, &all, 2, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert!(first_page[1].id < second_page[0].id);

    // No matches: an empty vec at this layer; the service decides policy.
    let filter = BookFilter {
        title_contains: Some("nonexistent".to_string()),
        publish_year: None,
    };
    let books = BookRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert!(books.is_empty());
}
