//! Loads the repositories of a GitHub user from the GitHub REST API, one page at a time.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
