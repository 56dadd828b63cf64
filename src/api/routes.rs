//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, resolve_handler, shorten_handler, stats_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link registry routes, mounted under `/links`.
///
/// # Endpoints
///
/// - `POST   /shorten`              - Create a short link
/// - `GET    /{short_code}`         - Resolve a link and count the click
/// - `PUT    /{short_code}`         - Replace destination, optionally rename
/// - `DELETE /{short_code}`         - Delete a link
/// - `GET    /{short_code}/stats`   - Usage statistics
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/{short_code}",
            get(resolve_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/{short_code}/stats", get(stats_handler))
}
