//! Article feed HTTP client

use crate::news::models::ArticleRecord;
use crate::news::LOG_TARGET;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Response, StatusCode};
use std::error::Error;
use std::fmt;
use tracing::{debug, error, trace, warn};
use url::Url;

pub const DEFAULT_NEWS_ENDPOINT: &str = "https://dev.to/api/articles";

/// Error types for feed operations
#[derive(Debug)]
pub enum NewsError {
    Network(ReqwestError),
    InvalidEndpoint(String),
    InvalidResponse(String),
}

impl fmt::Display for NewsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsError::Network(e) => write!(f, "Network error: {}", e),
            NewsError::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {}", msg),
            NewsError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl Error for NewsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NewsError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReqwestError> for NewsError {
    fn from(err: ReqwestError) -> Self {
        NewsError::Network(err)
    }
}

impl From<url::ParseError> for NewsError {
    fn from(err: url::ParseError) -> Self {
        NewsError::InvalidEndpoint(err.to_string())
    }
}

/// Read access to an article listing.
#[async_trait]
pub trait NewsApiContract: Send + Sync {
    /// Fetches one page of articles for `tag`.
    async fn fetch_articles(&self, tag: &str, per_page: usize) -> Result<Vec<ArticleRecord>, NewsError>;
}

/// Client for the public article-listing endpoint (no authentication).
#[derive(Clone, Debug)]
pub struct NewsClient {
    client: Client,
    endpoint: Url,
}

impl NewsClient {
    pub fn new(endpoint: &str) -> Result<Self, NewsError> {
        let endpoint = Url::parse(endpoint)?;
        debug!(target: LOG_TARGET, "Creating NewsClient for endpoint: {}", endpoint);

        let client = match Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!(target: LOG_TARGET, "Error creating HTTP client with timeout: {:?}. Falling back to default.", e);
                Client::new()
            }
        };

        Ok(NewsClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL for one page of a tag.
    pub fn articles_url(&self, tag: &str, per_page: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("tag", tag)
            .append_pair("per_page", &per_page.to_string());
        url
    }

    /// Checks the status and deserializes the JSON body.
    async fn handle_response(response: Response) -> Result<Vec<ArticleRecord>, NewsError> {
        let status = response.status();
        trace!(target: LOG_TARGET, "Response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(target: LOG_TARGET, "Feed request failed. Status: {}, Body: {}", status, error_text);
            return Err(match status {
                StatusCode::NOT_FOUND => NewsError::InvalidEndpoint(format!("Endpoint not found ({})", status)),
                _ => NewsError::InvalidResponse(format!("Request failed with status {}", status)),
            });
        }

        let body = response.text().await?;
        trace!(target: LOG_TARGET, "Response body length: {} bytes", body.len());
        parse_articles(&body)
    }
}

/// Parses the endpoint's JSON array.
pub fn parse_articles(body: &str) -> Result<Vec<ArticleRecord>, NewsError> {
    serde_json::from_str::<Vec<ArticleRecord>>(body).map_err(|e| {
        error!(target: LOG_TARGET, "JSON parsing error: {}", e);
        NewsError::InvalidResponse(format!("Failed to parse JSON response: {}", e))
    })
}

#[async_trait]
impl NewsApiContract for NewsClient {
    async fn fetch_articles(&self, tag: &str, per_page: usize) -> Result<Vec<ArticleRecord>, NewsError> {
        let url = self.articles_url(tag, per_page);
        debug!(target: LOG_TARGET, "Sending GET request to: {}", url);
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }
}
