//! Runner error types.

/// Errors that can occur while running the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// HTTP fetch errors, at any stage.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// File retrieval and decoding errors.
    #[error(transparent)]
    Content(#[from] crate::contents::ContentError),

    /// Snapshot and report publishing errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
