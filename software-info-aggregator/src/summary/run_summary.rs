//! Run summary types.

use crate::table::RepoRecord;

/// Counters for a complete aggregation run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories aggregated.
    pub repositories: usize,

    /// Number of repositories with a published package.
    pub packages_found: usize,

    /// Number of repositories carrying a citation badge.
    pub citations_found: usize,
}

impl RunSummary {
    /// Updates the counters with one merged record.
    pub fn record(&mut self, record: &RepoRecord) {
        self.repositories += 1;
        if record.package.is_some() {
            self.packages_found += 1;
        }
        if record.zenodo.is_some() {
            self.citations_found += 1;
        }
    }
}
