//! Settings deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Parsed settings from a `config.toml` file.
///
/// Every field has a default, so a partial (or missing) file yields a
/// usable configuration pointed at the production endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Organization whose repositories are aggregated.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Base URL of the repository-hosting API.
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Base URL of the package-statistics API.
    #[serde(default = "default_pypistats_api_url")]
    pub pypistats_api_url: String,

    /// Directory the snapshot history and rendered report are written to.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Repositories requested per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            github_api_url: default_github_api_url(),
            pypistats_api_url: default_pypistats_api_url(),
            output_root: default_output_root(),
            page_size: default_page_size(),
        }
    }
}

pub(crate) fn default_organization() -> String {
    "Sewer56".to_string()
}

pub(crate) fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

pub(crate) fn default_pypistats_api_url() -> String {
    "https://pypistats.org/api".to_string()
}

pub(crate) fn default_output_root() -> PathBuf {
    PathBuf::from("software_info")
}

pub(crate) fn default_page_size() -> usize {
    100
}
