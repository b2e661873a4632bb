use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Field-level validation messages, keyed by field name.
///
/// Serializes to the shape clients receive in a 422 body:
/// `{"title": ["is too long (maximum is 255 characters)"]}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{} {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Errors surfaced by the article store.
///
/// `NotFound` and `Validation` are client-visible outcomes; `Sqlite` covers
/// everything else and is not exposed beyond a generic failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("article not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
