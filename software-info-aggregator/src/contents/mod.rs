//! Repository file-listing scans.
//!
//! Given a repository's root file listing, this module locates named files
//! and retrieves their decoded text. Blob bodies arrive base64-encoded and
//! wrapped at 60 columns, so whitespace is stripped before decoding.

mod error;

pub use error::ContentError;

use crate::discovery::Repository;
use crate::fetch::{FetchError, Fetcher};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use tracing::debug;

/// One file descriptor from a repository's root listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// File name, e.g. `README.md`.
    pub name: String,

    /// API URL of the underlying blob.
    pub git_url: String,
}

/// Blob response body; only the encoded content matters here.
#[derive(Debug, Deserialize)]
struct Blob {
    content: String,
}

/// Fetches a repository's root file listing.
///
/// # Errors
///
/// Returns [`FetchError`] if the listing request fails.
pub async fn fetch_contents(
    fetcher: &Fetcher,
    repository: &Repository,
) -> Result<Vec<ContentEntry>, FetchError> {
    fetcher.fetch_json(&repository.contents_url()).await
}

/// Locates the first entry matching one of `candidates` and returns its
/// decoded text.
///
/// Entries are scanned in listing order, not candidate-list order. A
/// missing file is an expected, common case and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`ContentError`] if the blob fetch fails or the body cannot be
/// decoded.
pub async fn find_file(
    fetcher: &Fetcher,
    entries: &[ContentEntry],
    candidates: &[&str],
) -> Result<Option<String>, ContentError> {
    for entry in entries {
        if !candidates.contains(&entry.name.as_str()) {
            continue;
        }

        debug!(name = %entry.name, "Fetching file contents");
        let blob: Blob = fetcher.fetch_json(&entry.git_url).await?;
        return decode_blob(&entry.name, &blob.content).map(Some);
    }

    Ok(None)
}

/// Decodes a whitespace-wrapped base64 blob body into text.
fn decode_blob(name: &str, encoded: &str) -> Result<String, ContentError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ContentError::Base64 {
            name: name.to_string(),
            source: e,
        })?;

    String::from_utf8(bytes).map_err(|e| ContentError::Utf8 {
        name: name.to_string(),
        source: e,
    })
}
