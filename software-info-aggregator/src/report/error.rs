//! Report publishing error types.

use thiserror::Error;

/// Errors that can occur while publishing the snapshot and report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure while writing outputs or reading the template.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),
}
