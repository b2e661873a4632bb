mod error;
mod schema;
mod seed;

pub use error::{StoreError, ValidationErrors};

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::{Article, ArticleFields};

const TITLE_MAX_CHARS: usize = 255;
const CONTENT_MAX_CHARS: usize = 65_535;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "articled")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("articled.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    // ============================================================
    // Article operations
    // ============================================================

    /// All articles in insertion order. An empty list is a valid result.
    pub fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at, updated_at
             FROM articles ORDER BY created_at, id",
        )?;

        let articles = stmt
            .query_map([], |row| {
                Ok(Article {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    title: row.get(1)?,
                    content: row.get(2)?,
                    created_at: parse_datetime(row.get::<_, String>(3)?),
                    updated_at: parse_datetime(row.get::<_, String>(4)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    pub fn get_article(&self, id: Uuid) -> Result<Article, StoreError> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at, updated_at
             FROM articles WHERE id = ?",
        )?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Article {
                id: parse_uuid(row.get::<_, String>(0)?),
                title: row.get(1)?,
                content: row.get(2)?,
                created_at: parse_datetime(row.get::<_, String>(3)?),
                updated_at: parse_datetime(row.get::<_, String>(4)?),
            })
        } else {
            Err(StoreError::NotFound)
        }
    }

    pub fn create_article(&self, fields: ArticleFields) -> Result<Article, StoreError> {
        validate(&fields)?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO articles (id, title, content, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            (
                id.to_string(),
                &fields.title,
                &fields.content,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )?;

        Ok(Article {
            id,
            title: fields.title,
            content: fields.content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Partial update: an absent field keeps the stored value.
    pub fn update_article(&self, id: Uuid, fields: ArticleFields) -> Result<Article, StoreError> {
        validate(&fields)?;

        let existing = self.get_article(id)?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();
        let title = fields.title.or(existing.title);
        let content = fields.content.or(existing.content);

        conn.execute(
            "UPDATE articles SET title = ?, content = ?, updated_at = ? WHERE id = ?",
            (&title, &content, now.to_rfc3339(), id.to_string()),
        )?;

        Ok(Article {
            id,
            title,
            content,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    pub fn delete_article(&self, id: Uuid) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM articles WHERE id = ?", [id.to_string()])?;
        if rows > 0 {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn validate(fields: &ArticleFields) -> Result<(), StoreError> {
    let mut errors = ValidationErrors::default();

    if let Some(title) = &fields.title {
        if title.chars().count() > TITLE_MAX_CHARS {
            errors.add(
                "title",
                format!("is too long (maximum is {} characters)", TITLE_MAX_CHARS),
            );
        }
    }
    if let Some(content) = &fields.content {
        if content.chars().count() > CONTENT_MAX_CHARS {
            errors.add(
                "content",
                format!("is too long (maximum is {} characters)", CONTENT_MAX_CHARS),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation(errors))
    }
}

fn parse_uuid(s: String) -> Uuid {
    Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
