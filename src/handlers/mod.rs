mod category;
mod question;
mod quiz;

use axum::Router;

use crate::AppState;

/// All API routes, relative to [`crate::names::API_PREFIX`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(category::routes())
        .merge(question::routes())
        .merge(quiz::routes())
}
