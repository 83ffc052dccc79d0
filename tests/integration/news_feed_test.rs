//! Integration tests for the news feed client against a local HTTP endpoint
//!
//! The feed is served from a throwaway listener on 127.0.0.1 so these tests
//! never touch the network.

use crate::test_utils::mocks::{refused_url, serve_once};
use lost_sounds::news::{load_headlines, NewsApiContract, NewsClient, NewsError};

const TWO_ARTICLES: &str = r#"[
    {"title": "Quiet morning", "user": {"name": "Ada"}, "published_at": "2026-10-19T06:00:00Z", "url": "https://dev.to/ada/quiet-morning", "tag_list": ["news"]},
    {"title": "Late train", "user": {"name": "Linus", "username": "linus"}, "published_at": "2026-03-02T22:15:00Z", "url": "https://dev.to/linus/late-train"}
]"#;

#[cfg(test)]
mod news_feed_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_articles_from_local_endpoint() {
        let (url, server) = serve_once("200 OK", TWO_ARTICLES).await;
        let client = NewsClient::new(&url).expect("Local URL should be valid");

        let records = client.fetch_articles("news", 5).await.expect("Fetch should succeed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Quiet morning");
        assert_eq!(records[1].user.name, "Linus");

        server.await.expect("Server task panicked");
    }

    #[tokio::test]
    async fn test_load_headlines_maps_records() {
        let (url, server) = serve_once("200 OK", TWO_ARTICLES).await;
        let client = NewsClient::new(&url).expect("Local URL should be valid");

        let items = load_headlines(&client, "news", 5).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].author, "Ada");
        assert_eq!(items[0].published_label, "19 Oct 2026");
        assert_eq!(items[1].published_label, "2 Mar 2026");
        assert_eq!(items[1].url, "https://dev.to/linus/late-train");

        server.await.expect("Server task panicked");
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty_feed() {
        let (url, server) = serve_once("200 OK", r#"{"error": "not an array"}"#).await;
        let client = NewsClient::new(&url).expect("Local URL should be valid");

        assert!(load_headlines(&client, "news", 5).await.is_empty());
        server.await.expect("Server task panicked");
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let (url, server) = serve_once("500 Internal Server Error", "oops").await;
        let client = NewsClient::new(&url).expect("Local URL should be valid");

        let result = client.fetch_articles("news", 5).await;
        assert!(matches!(result, Err(NewsError::InvalidResponse(_))));
        server.await.expect("Server task panicked");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_empty_feed() {
        let client = NewsClient::new(&refused_url()).expect("Local URL should be valid");

        let result = client.fetch_articles("news", 5).await;
        assert!(matches!(result, Err(NewsError::Network(_))));
        assert!(load_headlines(&client, "news", 5).await.is_empty());
    }
}
