//! Session setup and initialization

use crate::api::{FoodApi, FoodApiClient};
use crate::config::{Config, get_config_path};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Client for the food collection
    pub api: Arc<dyn FoodApi>,
    /// Resolved base URL (for display purposes)
    pub api_url: String,
}

/// Sets up a session against the configured backend
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Loads the configuration file, if there is one
/// 2. Resolves the API base URL
/// 3. Builds the HTTP client
///
/// # Arguments
/// * `api_url_flag` - Base URL given on the command line, overriding everything else
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The configuration could not be read or the client could not be built
pub fn setup_session(api_url_flag: Option<&str>) -> Result<SessionData, Box<dyn Error>> {
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;
    setup_session_with(&config, api_url_flag)
}

fn setup_session_with(
    config: &Config,
    api_url_flag: Option<&str>,
) -> Result<SessionData, Box<dyn Error>> {
    let api_url = config.resolve_api_url(api_url_flag);
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let client = FoodApiClient::new(api_url.clone(), timeout)?;

    Ok(SessionData {
        api: Arc::new(client),
        api_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The command-line URL wins over the saved one.
    fn test_flag_overrides_config_url() {
        let config = Config::new(Some("http://saved:1".to_string()), Default::default());

        let session = setup_session_with(&config, Some("http://flag:2/")).unwrap();

        assert_eq!(session.api_url, "http://flag:2");
        assert_eq!(session.api.base_url(), "http://flag:2");
    }
}
