use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Username validation error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsernameError {
    /// The username does not follow the GitHub username rules
    #[error(
        "Invalid username provided <{0}>. Username may only contain alphanumeric characters or single hyphens, and cannot begin or end with a hyphen. Maximum 39 characters."
    )]
    Invalid(String),
}
