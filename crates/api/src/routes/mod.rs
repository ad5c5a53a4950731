pub mod account;
pub mod author;
pub mod book;
pub mod health;
pub mod novelist;
pub mod token;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /account                    create (public)
/// /account/{id}               get (public), update, delete (owner only)
///
/// /token                      issue token (public)
/// /token/refresh              re-issue token (public)
///
/// /author                     create (auth)
/// /author/{id}                get, delete (auth)
///
/// /novelist                   create (auth)
/// /novelist/{id}              get (auth)
///
/// /book                       create, list w/ filters (auth)
/// /book/{id}                  get (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/account", account::router())
        .nest("/token", token::router())
        .nest("/author", author::router())
        .nest("/novelist", novelist::router())
        .nest("/book", book::router())
}
