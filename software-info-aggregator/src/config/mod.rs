//! Settings loading.
//!
//! This module handles parsing the optional `config.toml` settings file
//! that points the aggregator at an organization and a pair of API
//! endpoints.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Loads settings from a TOML file, falling back to defaults.
///
/// A missing file is not an error: the aggregator is expected to run with
/// zero on-disk configuration against the production endpoints.
///
/// # Arguments
///
/// * `path` - Path to the settings file (conventionally `config.toml`)
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, parsed,
/// or fails validation.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No settings file, using defaults");
        return Ok(Settings::default());
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings: Settings = toml::from_str(&text).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    validate_settings(&settings, path)?;

    info!(
        organization = %settings.organization,
        output_root = %settings.output_root.display(),
        "Loaded settings"
    );
    Ok(settings)
}

/// Validates loaded settings.
fn validate_settings(settings: &Settings, path: &Path) -> Result<(), ConfigError> {
    if settings.organization.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: "organization must not be empty".to_string(),
        });
    }

    if settings.page_size == 0 {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: "page-size must be at least 1".to_string(),
        });
    }

    for (field, value) in [
        ("github-api-url", &settings.github_api_url),
        ("pypistats-api-url", &settings.pypistats_api_url),
    ] {
        if Url::parse(value).is_err() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!("{field} is not a valid absolute URL: '{value}'"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(&temp.path().join("config.toml")).unwrap();

        assert_eq!(settings.github_api_url, "https://api.github.com");
        assert_eq!(settings.pypistats_api_url, "https://pypistats.org/api");
        assert_eq!(settings.page_size, 100);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
organization = "acme"
output-root = "out/software_info"
"#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();

        assert_eq!(settings.organization, "acme");
        assert_eq!(
            settings.output_root,
            std::path::PathBuf::from("out/software_info")
        );
        assert_eq!(settings.github_api_url, "https://api.github.com");
    }

    #[test]
    fn rejects_empty_organization() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "organization = \"  \"\n").unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_invalid_api_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "github-api-url = \"not a url\"\n").unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_zero_page_size() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "page-size = 0\n").unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "organization = [broken\n").unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
