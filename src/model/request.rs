use std::fmt::Display;

use super::Username;

/// A request for one page of the repositories of a GitHub user.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PageRequest {
    /// The owner of the repositories.
    pub(crate) username: Username,

    /// The 1-based page index.
    pub(crate) page: u32,

    /// The number of repositories to return per page.
    pub(crate) per_page: u16,
}

impl PageRequest {
    /// Creates a new `PageRequest` with the given username, page and page size.
    pub fn new(username: &Username, page: u32, per_page: u16) -> Self {
        Self {
            username: username.to_owned(),
            page,
            per_page,
        }
    }

    /// Retrieves the username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Retrieves the page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Retrieves the page size.
    pub fn per_page(&self) -> u16 {
        self.per_page
    }

    /// Creates a dummy `PageRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self {
            username: "octocat".parse().unwrap(),
            page: 1,
            per_page: 10,
        }
    }
}

impl Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PageRequest: username={}, page={}, per_page={}",
            self.username, self.page, self.per_page
        )
    }
}
