mod error;
mod handlers;

pub use error::ApiError;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;

pub fn create_router(db: Database) -> Router {
    let api = Router::new()
        // Articles
        .route("/articles", get(handlers::list_articles))
        .route("/articles", post(handlers::create_article))
        .route("/articles/{id}", get(handlers::get_article))
        .route("/articles/{id}", put(handlers::update_article))
        .route("/articles/{id}", patch(handlers::update_article))
        .route("/articles/{id}", delete(handlers::delete_article))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
