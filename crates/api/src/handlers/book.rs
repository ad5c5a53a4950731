//! Handlers for the `/book` resource. All operations require auth.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use libretto_core::error::CoreError;
use libretto_core::pagination::{clamp_limit, clamp_offset};
use libretto_core::sanitize::sanitize;
use libretto_core::types::DbId;
use libretto_db::models::book::{BookFilter, BookResponse, CreateBook};
use libretto_db::repositories::{AuthorKey, AuthorRepo, BookKey, BookRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentAccount;
use crate::query::PaginationParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /book`.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author_id: DbId,
    pub publish_year: i32,
}

/// Filter parameters for `GET /book` (`?title=&publish_year=`).
/// Pagination (`?skip=&limit=`) is extracted separately via
/// [`PaginationParams`].
#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    /// Case-insensitive substring match against the stored title.
    pub title: Option<String>,
    /// Exact publish-year match.
    pub publish_year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/book
///
/// Create a new book. The title is sanitized before the uniqueness check,
/// and the referenced author must exist.
pub async fn create(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Json(input): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let title = sanitize(&input.title);
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Book title must contain at least one letter or digit.".into(),
        )));
    }

    if BookRepo::find_by(&state.pool, BookKey::Title(&title))
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A book with this title already exists.".into(),
        )));
    }

    if AuthorRepo::find_by(&state.pool, AuthorKey::Id(input.author_id))
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound(
            "Author not found.".into(),
        )));
    }

    let create_dto = CreateBook {
        author_id: input.author_id,
        title,
        publish_year: input.publish_year,
    };

    let book = BookRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /api/v1/book/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookResponse>> {
    let book = BookRepo::find_by(&state.pool, BookKey::Id(id))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Book not found.".into())))?;

    Ok(Json(book.into()))
}

/// GET /api/v1/book
///
/// List books with optional title/year filters and skip/limit pagination.
/// An empty result set is a 404, not an empty 200: clients treat
/// "nothing matched" as an error condition.
pub async fn list(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Query(params): Query<ListBooksParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<BookResponse>>> {
    // Normalize the needle the same way stored titles are, so searching
    // for `"My Book!"` finds `"my book"`.
    let filter = BookFilter {
        title_contains: params
            .title
            .as_deref()
            .map(sanitize)
            .filter(|needle| !needle.is_empty()),
        publish_year: params.publish_year,
    };

    let limit = clamp_limit(page.limit);
    let offset = clamp_offset(page.skip);

    let books = BookRepo::list(&state.pool, &filter, limit, offset).await?;

    if books.is_empty() {
        return Err(AppError::Core(CoreError::NotFound(
            "No books found matching the given filters.".into(),
        )));
    }

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
