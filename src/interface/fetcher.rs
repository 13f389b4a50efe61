use crate::{PageRequest, Repository, StdResult};

/// A trait for fetching one page of repositories from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repositories listed on the requested page.
    async fn fetch(&self, request: &PageRequest) -> StdResult<Vec<Repository>>;
}
