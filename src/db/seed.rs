//! Seed data for development databases.

use super::{Database, StoreError};
use crate::models::ArticleFields;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
];

impl Database {
    /// Insert the fixed starter articles plus `count` generated ones.
    ///
    /// Not idempotent: every run inserts a fresh batch, so repeat runs
    /// duplicate the starter rows. Returns the number of articles inserted.
    pub fn seed(&self, count: u32) -> Result<u32, StoreError> {
        self.create_article(ArticleFields {
            title: Some("First Article".to_string()),
            content: Some("This is the content of the first article.".to_string()),
        })?;
        self.create_article(ArticleFields {
            title: Some("Second Article".to_string()),
            content: Some("This is the content of the second article.".to_string()),
        })?;

        for n in 0..count {
            self.create_article(ArticleFields {
                title: Some(lorem_sentence(n as usize, 3 + (n as usize % 5))),
                content: Some(lorem_paragraphs(n as usize, 3)),
            })?;
        }

        Ok(count + 2)
    }
}

fn lorem_sentence(offset: usize, word_count: usize) -> String {
    let mut words = Vec::with_capacity(word_count);
    for i in 0..word_count {
        let word = WORDS[(offset * 7 + i) % WORDS.len()];
        if i == 0 {
            let mut chars = word.chars();
            let first = chars.next().map(|c| c.to_uppercase().to_string());
            words.push(format!("{}{}", first.unwrap_or_default(), chars.as_str()));
        } else {
            words.push(word.to_string());
        }
    }
    format!("{}.", words.join(" "))
}

fn lorem_paragraphs(offset: usize, paragraph_count: usize) -> String {
    (0..paragraph_count)
        .map(|p| lorem_sentence(offset + p * 11, 12))
        .collect::<Vec<_>>()
        .join("\n\n")
}
