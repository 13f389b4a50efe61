use std::{fmt::Display, ops::Deref, str::FromStr};

use serde::Deserialize;

use super::UsernameError;

/// The maximum length of a GitHub username.
pub const USERNAME_MAX_LENGTH: usize = 39;

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The login of a GitHub user.
///
/// A `Username` can only be built from a string that passes validation: 1 to 39
/// alphanumeric characters, with single hyphens allowed between two alphanumeric
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.is_empty() || bytes.len() > USERNAME_MAX_LENGTH {
            return false;
        }

        bytes.iter().enumerate().all(|(index, byte)| {
            byte.is_ascii_alphanumeric()
                || (*byte == b'-'
                    && index > 0
                    && index + 1 < bytes.len()
                    && bytes[index - 1].is_ascii_alphanumeric()
                    && bytes[index + 1].is_ascii_alphanumeric())
        })
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(UsernameError::Invalid(value.to_string()))
        }
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Deref for Username {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A GitHub repository, as listed by the user repositories endpoint.
///
/// Only the fields needed by the loader are decoded, any other field of the API
/// payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The name of the repository.
    name: RepositoryName,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(name: &str) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
