use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::RepositoryError;
use regex::Regex;
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(INVALID_BRANCH_NAME_REGEX));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> Result<Self, RepositoryError> {
        if name.is_empty() {
            return Err(RepositoryError::InvalidBranchName(name));
        }

        let invalid = INVALID_BRANCH_NAME
            .as_ref()
            .map_err(|e| RepositoryError::InvalidPattern {
                pattern: INVALID_BRANCH_NAME_REGEX,
                source: e.clone(),
            })?;

        if invalid.is_match(&name) {
            return Err(RepositoryError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
