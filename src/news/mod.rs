//! One-shot news headline feed

pub mod api;
pub mod loader;
pub mod models;

pub const LOG_TARGET: &str = "lost_sounds::news";

pub use api::{parse_articles, NewsApiContract, NewsClient, NewsError, DEFAULT_NEWS_ENDPOINT};
pub use loader::{load_headlines, spawn_news_loader, NEWS_PAGE_SIZE, NEWS_TAG};
pub use models::{published_label, ArticleAuthor, ArticleRecord, NewsItem};
