use crate::{Repository, StdResult, Username};

/// A trait for retrieving all the repositories of a GitHub user.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryCrawler: Sync + Send {
    /// Crawl the GitHub API for the repositories of a user.
    async fn crawl(&self, username: &Username) -> StdResult<Vec<Repository>>;
}
