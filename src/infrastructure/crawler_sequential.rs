use std::sync::Arc;

use anyhow::anyhow;
use log::{debug, info};

use crate::{PageRequest, Repository, RepositoryCrawler, RepositoryFetcher, StdResult, Username};

/// The number of repositories requested per page by default.
pub const DEFAULT_REPOSITORIES_PER_PAGE: u16 = 100;

/// The state of one pagination session
#[derive(Debug)]
pub struct PaginationState {
    next_page: u32,
    repositories: Vec<Repository>,
    total_fetcher_calls: u32,
    completed: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            next_page: 1,
            repositories: vec![],
            total_fetcher_calls: 0,
            completed: false,
        }
    }
}

impl PaginationState {
    /// Builds the request for the next page, if pagination is not completed.
    pub fn next_request(&mut self, username: &Username, per_page: u16) -> Option<PageRequest> {
        if self.completed {
            return None;
        }
        let request = PageRequest::new(username, self.next_page, per_page);
        self.next_page += 1;
        self.total_fetcher_calls += 1;

        Some(request)
    }

    /// Appends the repositories of a fetched page.
    ///
    /// A page holding fewer repositories than requested completes the pagination.
    pub fn push_page(&mut self, repositories: Vec<Repository>, per_page: u16) {
        if repositories.len() < per_page as usize {
            self.completed = true;
        }
        self.repositories.extend(repositories);
    }

    /// Returns whether the last page has been received.
    pub fn has_completed(&self) -> bool {
        self.completed
    }

    /// Consumes the state and returns the accumulated repositories.
    pub fn into_repositories(self) -> Vec<Repository> {
        self.repositories
    }
}

/// A crawler that fetches the pages of a user's repositories one after the other
pub struct SequentialCrawler {
    fetcher: Arc<dyn RepositoryFetcher>,
    per_page: u16,
}

impl SequentialCrawler {
    /// Creates a new `SequentialCrawler` instance with the given fetcher and page size.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>, per_page: u16) -> Self {
        Self { fetcher, per_page }
    }
}

#[async_trait::async_trait]
impl RepositoryCrawler for SequentialCrawler {
    async fn crawl(&self, username: &Username) -> StdResult<Vec<Repository>> {
        if self.per_page == 0 {
            return Err(anyhow!(
                "Invalid page size, at least one repository per page is required"
            ));
        }

        let mut state = PaginationState::default();
        while let Some(request) = state.next_request(username, self.per_page) {
            info!("Processing request: {request}");
            let repositories = self.fetcher.fetch(&request).await?;
            let total_fetched_repositories = repositories.len();
            state.push_page(repositories, self.per_page);

            debug!(
                "Fetched repositories: page={}, done={}, total={}, Requests: done={}",
                request.page(),
                total_fetched_repositories,
                state.repositories.len(),
                state.total_fetcher_calls,
            );
        }
        info!(
            "Crawling completed for {username}: {} repositories in {} requests",
            state.repositories.len(),
            state.total_fetcher_calls
        );

        Ok(state.into_repositories())
    }
}
