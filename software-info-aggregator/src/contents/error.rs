//! Content scanning error types.

use crate::fetch::FetchError;
use thiserror::Error;

/// Errors that can occur while retrieving and decoding a file's contents.
///
/// A file simply not being present in the listing is not an error; the
/// scanner reports absence as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The blob fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The blob body was not valid base64.
    #[error("File '{name}' is not valid base64: {source}")]
    Base64 {
        name: String,
        #[source]
        source: base64::DecodeError,
    },

    /// The decoded bytes were not valid UTF-8.
    #[error("File '{name}' is not valid UTF-8: {source}")]
    Utf8 {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
