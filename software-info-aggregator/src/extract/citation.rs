//! Citation badges from the README.

use crate::contents::{find_file, ContentEntry, ContentError};
use crate::fetch::Fetcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// README candidates for the citation scan.
pub const README_CANDIDATES: &[&str] = &["README.md"];

/// Matches a markdown image-link wrapping a DOI badge and its target.
///
/// Unanchored substring scan over the whole document; the exact character
/// classes are format-sensitive and must not be loosened.
static DOI_BADGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[!\[DOI\]\(https://zenodo.org/badge/DOI/[\w.//]*\)\]\([\w.://]*\)"#)
        .expect("DOI_BADGE_PATTERN: invalid regex")
});

/// Collects every DOI badge in the text, concatenated in document order
/// with no separator.
///
/// Pure transform. Returns `None` when no badge matches.
#[must_use]
pub fn find_citation_badges(text: &str) -> Option<String> {
    let badges: String = DOI_BADGE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();

    if badges.is_empty() {
        None
    } else {
        Some(badges)
    }
}

/// Extracts the citation field for one repository, if any.
///
/// No README, or a README without a badge, yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`ContentError`] if the README blob cannot be retrieved or
/// decoded.
pub async fn citation_info(
    fetcher: &Fetcher,
    entries: &[ContentEntry],
) -> Result<Option<String>, ContentError> {
    let Some(text) = find_file(fetcher, entries, README_CANDIDATES).await? else {
        return Ok(None);
    };

    Ok(find_citation_badges(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE_A: &str =
        "[![DOI](https://zenodo.org/badge/DOI/10.5281/zenodo.1234567)](https://doi.org/10.5281/zenodo.1234567)";
    const BADGE_B: &str =
        "[![DOI](https://zenodo.org/badge/DOI/10.5281/zenodo.7654321)](https://doi.org/10.5281/zenodo.7654321)";

    #[test]
    fn finds_single_badge() {
        let text = format!("# Project\n\n{BADGE_A}\n\nSome docs.\n");

        assert_eq!(find_citation_badges(&text).as_deref(), Some(BADGE_A));
    }

    #[test]
    fn concatenates_badges_in_document_order() {
        let text = format!("intro {BADGE_B} middle {BADGE_A} end");

        let badges = find_citation_badges(&text).unwrap();

        assert_eq!(badges, format!("{BADGE_B}{BADGE_A}"));
    }

    #[test]
    fn plain_readme_yields_none() {
        assert!(find_citation_badges("# Project\n\nNo citations here.\n").is_none());
        // A non-DOI badge must not match.
        assert!(find_citation_badges(
            "[![CI](https://example.com/badge.svg)](https://example.com)"
        )
        .is_none());
    }

    #[tokio::test]
    async fn no_readme_yields_none() {
        let fetcher = Fetcher::new(None).unwrap();
        let entries = [ContentEntry {
            name: "CONTRIBUTING.md".to_string(),
            git_url: "unused".to_string(),
        }];

        let citation = citation_info(&fetcher, &entries).await.unwrap();

        assert!(citation.is_none());
    }
}
