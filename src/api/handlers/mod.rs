use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use super::ApiError;
use crate::db::Database;
use crate::models::{Article, ArticleParams};

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Articles
// ============================================================

pub async fn list_articles(
    State(db): State<Database>,
) -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(db.list_articles()?))
}

pub async fn get_article(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Article>, ApiError> {
    Ok(Json(db.get_article(id)?))
}

pub async fn create_article(
    State(db): State<Database>,
    Json(params): Json<ArticleParams>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let article = db.create_article(params.article)?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn update_article(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(params): Json<ArticleParams>,
) -> Result<Json<Article>, ApiError> {
    Ok(Json(db.update_article(id, params.article)?))
}

pub async fn delete_article(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    db.delete_article(id)?;
    Ok(StatusCode::NO_CONTENT)
}
