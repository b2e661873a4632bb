use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted article.
///
/// Both `title` and `content` are optional: the store imposes no presence
/// constraint, only length limits. The id and timestamps are assigned by the
/// store and never accepted from clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The whitelisted input fields for creating or updating an article.
///
/// Deserializing through this struct is the mass-assignment guard: any key in
/// the request body other than `title` and `content` is silently dropped.
/// On update, an absent field leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleFields {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request body envelope, matching the `{"article": {...}}` wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleParams {
    pub article: ArticleFields,
}
