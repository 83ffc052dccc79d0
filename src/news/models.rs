//! Data models for the article feed

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One record of the article-listing endpoint. Unknown fields are ignored.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ArticleRecord {
    pub title: String,
    pub user: ArticleAuthor,
    pub published_at: String,
    pub url: String,
}

/// Author block nested in an article record
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ArticleAuthor {
    pub name: String,
}

/// A headline as shown by the widget.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub author: String,
    pub published_label: String,
    pub url: String,
}

impl From<ArticleRecord> for NewsItem {
    fn from(record: ArticleRecord) -> Self {
        NewsItem {
            published_label: published_label(&record.published_at),
            title: record.title,
            author: record.user.name,
            url: record.url,
        }
    }
}

/// Formats an RFC 3339 timestamp as `19 Oct 2026`; unparseable input is kept as-is.
pub fn published_label(published_at: &str) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(at) => at.format("%-d %b %Y").to_string(),
        Err(_) => published_at.to_string(),
    }
}
