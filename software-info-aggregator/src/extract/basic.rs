//! Basic repository info.

use crate::discovery::Repository;

/// Fields every summary row carries.
#[derive(Debug, Clone)]
pub struct BasicInfo {
    /// Markdown link label combining display name and web URL.
    ///
    /// The report table is the only consumer of this field, so the
    /// presentation lives here rather than in the renderer.
    pub name: String,

    /// Star count.
    pub stars: u64,

    /// Fork count.
    pub forks: u64,
}

/// Extracts the always-present fields from a repository record.
///
/// Pure transform, no I/O.
#[must_use]
pub fn basic_info(repository: &Repository) -> BasicInfo {
    BasicInfo {
        name: format!("[{}]({})", repository.name, repository.html_url),
        stars: repository.stargazers_count,
        forks: repository.forks_count,
    }
}
