//! Repository listing records.

use serde::Deserialize;

/// One repository as returned by the organization listing endpoint.
///
/// Immutable once fetched; scoped to a single pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,

    /// Web URL of the repository (used as the link target in the report).
    pub html_url: String,

    /// Star count.
    pub stargazers_count: u64,

    /// Fork count.
    pub forks_count: u64,

    /// API URL of the repository itself.
    pub url: String,
}

impl Repository {
    /// API URL of the repository's root file listing.
    #[must_use]
    pub fn contents_url(&self) -> String {
        format!("{}/contents", self.url)
    }
}
