use anyhow::anyhow;
use log::{debug, error};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Serialize;
use thiserror::Error;

use crate::{PageRequest, Repository, RepositoryFetcher, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

/// The versioned media type requested from the GitHub REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const EXPECTED_CONTENT_TYPE: &str = "application/json";

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Transport error
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// HTTP status error
    #[error("HTTP status error: {status} returned by {url}")]
    HttpStatus { status: StatusCode, url: String },
    /// Content type error
    #[error("Unexpected content type: {0}")]
    ContentType(String),
    /// Decode error
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The paging parameters of a REST request
#[derive(Debug, Serialize)]
struct RestPagingQuery {
    /// The 1-based page index.
    page: u32,
    /// The number of repositories per page.
    per_page: u16,
}

impl From<&PageRequest> for RestPagingQuery {
    fn from(request: &PageRequest) -> Self {
        Self {
            page: request.page,
            per_page: request.per_page,
        }
    }
}

/// Fetches repository pages from the GitHub REST API.
pub struct RestFetcher {
    client: Client,
    endpoint: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance targeting the given endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn user_repositories_url(&self, request: &PageRequest) -> String {
        format!("{}/users/{}/repos", self.endpoint, request.username)
    }

    fn has_json_content_type(content_type: &str) -> bool {
        content_type
            .split(';')
            .next()
            .map(|media_type| media_type.trim().eq_ignore_ascii_case(EXPECTED_CONTENT_TYPE))
            .unwrap_or(false)
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Repository>, FetcherError> {
        let url = self.user_repositories_url(request);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .query(&RestPagingQuery::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::HttpStatus { status, url });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !Self::has_json_content_type(&content_type) {
            return Err(FetcherError::ContentType(content_type));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes for {request}", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self, request: &PageRequest) -> StdResult<Vec<Repository>> {
        self.fetch_page(request).await.map_err(|e| {
            error!("Failed to fetch {request}: {e}");
            anyhow!(e)
        })
    }
}
