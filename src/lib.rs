pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod rejections;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(names::API_PREFIX, handlers::routes())
        .fallback(rejections::not_found)
        .layer(middleware::from_fn(rejections::method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
