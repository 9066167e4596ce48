//! Application configuration.

use crate::consts::cli_consts::network;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Environment variable that overrides the configured API URL.
pub const API_URL_ENV: &str = "FOODBOARD_API_URL";

/// Environment variable that selects the backend deployment.
pub const ENVIRONMENT_ENV: &str = "FOODBOARD_ENVIRONMENT";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Explicit API base URL. Takes precedence over `environment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Deployment used when no explicit URL is set.
    #[serde(default)]
    pub environment: Environment,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    network::REQUEST_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            environment: Environment::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Create Config with the given API URL and environment.
    #[cfg(test)]
    pub fn new(api_url: Option<String>, environment: Environment) -> Self {
        Config {
            api_url,
            environment,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration file if present, falling back to defaults when missing.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolves the API base URL.
    ///
    /// Order: command-line flag, `FOODBOARD_API_URL`, the saved `api_url`,
    /// then the URL of `environment` (which `FOODBOARD_ENVIRONMENT` overrides).
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        let env_url = std::env::var(API_URL_ENV).ok();
        let env_environment = std::env::var(ENVIRONMENT_ENV).ok();
        self.resolve_api_url_with(flag, env_url.as_deref(), env_environment.as_deref())
    }

    fn resolve_api_url_with(
        &self,
        flag: Option<&str>,
        env_url: Option<&str>,
        env_environment: Option<&str>,
    ) -> String {
        let explicit = [flag, env_url, self.api_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty());
        if let Some(url) = explicit {
            return url.trim_end_matches('/').to_string();
        }

        env_environment
            .and_then(|name| name.parse::<Environment>().ok())
            .unwrap_or(self.environment)
            .api_url()
    }
}

/// Location of the configuration file: `~/.foodboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(".foodboard").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new(
            Some("http://localhost:4000".to_string()),
            Environment::Staging,
        );
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = Config::new(None, Environment::Local);
        config1.save(&path).unwrap();

        let config2 = Config::new(None, Environment::Production);
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Missing fields fall back to their defaults.
    fn test_load_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    // A missing file is not an error.
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    // The flag beats the environment variable, which beats the saved URL.
    fn test_resolve_api_url_precedence() {
        let config = Config::new(Some("http://saved:1".to_string()), Environment::Staging);

        assert_eq!(
            config.resolve_api_url_with(Some("http://flag:1/"), Some("http://env:1"), None),
            "http://flag:1"
        );
        assert_eq!(
            config.resolve_api_url_with(None, Some("http://env:1"), None),
            "http://env:1"
        );
        assert_eq!(
            config.resolve_api_url_with(None, None, None),
            "http://saved:1"
        );
    }

    #[test]
    // Without any explicit URL the environment decides.
    fn test_resolve_api_url_from_environment() {
        let config = Config::new(None, Environment::Staging);

        assert_eq!(
            config.resolve_api_url_with(None, None, None),
            Environment::Staging.api_url()
        );
        assert_eq!(
            config.resolve_api_url_with(None, Some("  "), Some("production")),
            Environment::Production.api_url()
        );
    }
}
