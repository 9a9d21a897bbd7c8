//! Runner configuration.

use crate::config::Settings;
use chrono::NaiveDate;

/// Configuration for one aggregation run.
///
/// Everything the pipeline needs is passed in here explicitly; the library
/// never reads the environment or the clock itself.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Endpoint and output settings.
    settings: Settings,
    /// Bearer credential for the repository-hosting API, if any.
    token: Option<String>,
    /// Run date; names the snapshot and fills the report's date binding.
    date: NaiveDate,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(settings: Settings, token: Option<String>, date: NaiveDate) -> Self {
        Self {
            settings,
            token,
            date,
        }
    }

    /// Returns the endpoint and output settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the configured bearer credential.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the run date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the run date in `YYYY-MM-DD` form.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
