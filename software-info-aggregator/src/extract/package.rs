//! Package name and download statistics.

use crate::config::Settings;
use crate::contents::{find_file, ContentEntry, ContentError};
use crate::fetch::{join_url, Fetcher};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::warn;

/// Manifest files expected to declare a package name, in preference order
/// as encountered in the listing.
pub const MANIFEST_CANDIDATES: &[&str] = &["setup.cfg", "pyproject.toml"];

/// Matches a `name = <token>` declaration on its own line.
///
/// The leading and trailing newline are part of the match, and matches are
/// non-overlapping. Which declaration wins is format-sensitive, so the
/// pattern must not be loosened.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\nname = ([\w"']*)\n"#).expect("NAME_PATTERN: invalid regex"));

/// A package-name declaration found in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The first declared name, with surrounding quotes stripped.
    pub name: String,

    /// Total declarations matched; more than one means the manifest was
    /// ambiguous and the first declaration won.
    pub occurrences: usize,
}

/// Package fields for one repository.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    /// Declared package name.
    pub name: String,

    /// Downloads over the last week.
    pub weekly_downloads: i64,

    /// Downloads over the last month.
    pub monthly_downloads: i64,
}

/// Recent download counts as served by the statistics endpoint.
#[derive(Debug, Deserialize)]
struct RecentStats {
    data: RecentCounts,
}

#[derive(Debug, Deserialize)]
struct RecentCounts {
    last_week: i64,
    last_month: i64,
}

/// Searches manifest text for a package-name declaration.
///
/// Pure transform. Returns `None` when no declaration matches.
#[must_use]
pub fn find_package_name(text: &str) -> Option<NameMatch> {
    let raw: Vec<&str> = NAME_PATTERN
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    let first = raw.first()?;
    Some(NameMatch {
        name: first.replace(['"', '\''], ""),
        occurrences: raw.len(),
    })
}

/// Extracts package fields for one repository, if any.
///
/// Locates the first manifest candidate in the listing, pattern-matches a
/// package name out of it, and cross-references the statistics endpoint
/// for recent download counts. No manifest or no name declaration yields
/// `Ok(None)`.
///
/// An ambiguous manifest (multiple declarations) is best-effort, not a
/// fault: a warning is logged and the first declaration is used.
///
/// # Errors
///
/// Returns [`ContentError`] if the manifest blob cannot be retrieved or
/// decoded, or if the statistics query fails. A failing statistics query
/// aborts the repository's aggregation; there is no partial package info.
pub async fn package_info(
    fetcher: &Fetcher,
    settings: &Settings,
    entries: &[ContentEntry],
) -> Result<Option<PackageInfo>, ContentError> {
    let Some(text) = find_file(fetcher, entries, MANIFEST_CANDIDATES).await? else {
        return Ok(None);
    };

    let Some(name_match) = find_package_name(&text) else {
        return Ok(None);
    };

    if name_match.occurrences > 1 {
        warn!(
            name = %name_match.name,
            occurrences = name_match.occurrences,
            "Manifest declares multiple package names, using the first"
        );
    }

    let url = join_url(&[
        &settings.pypistats_api_url,
        "packages",
        &name_match.name,
        "recent",
    ]);
    let stats: RecentStats = fetcher.fetch_json_anonymous(&url).await?;

    Ok(Some(PackageInfo {
        name: name_match.name,
        weekly_downloads: stats.data.last_week,
        monthly_downloads: stats.data.last_month,
    }))
}
