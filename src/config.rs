use crate::services::group_builder::{DEFAULT_LISTING_PATH, DEFAULT_REDIRECT_DELAY};
use std::env;
use std::time::Duration;

/// Submission relay configuration
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Connected wallet; `None` means no session
    pub wallet_address: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub submitter: SubmitterConfig,
    pub log_level: String,
    pub environment: String,
    pub redirect_delay_ms: u64,
    pub groups_path: String,
}

impl SubmitterConfig {
    /// Create submitter config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("SUBMITTER_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let timeout_secs = env::var("SUBMITTER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let wallet_address = env::var("WALLET_ADDRESS")
            .ok()
            .filter(|s| !s.trim().is_empty());

        if timeout_secs == 0 {
            return Err("SUBMITTER_TIMEOUT_SECS must be greater than 0".to_string());
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("Invalid SUBMITTER_URL: {}", url));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            timeout_secs,
            wallet_address,
        })
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            wallet_address: None,
        }
    }
}

impl AppConfig {
    /// Create application config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let submitter = SubmitterConfig::from_env()?;

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string());

        let environment = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());

        let redirect_delay_ms = env::var("REDIRECT_DELAY_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REDIRECT_DELAY.as_millis() as u64);

        let groups_path = env::var("GROUPS_PATH")
            .unwrap_or_else(|_| DEFAULT_LISTING_PATH.to_string());

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL: {}. Must be one of: {:?}",
                log_level, valid_log_levels
            ));
        }

        // Validate environment
        let valid_environments = ["development", "staging", "production"];
        if !valid_environments.contains(&environment.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid ENVIRONMENT: {}. Must be one of: {:?}",
                environment, valid_environments
            ));
        }

        if !groups_path.starts_with('/') {
            return Err(format!("GROUPS_PATH must start with '/': {}", groups_path));
        }

        Ok(Self {
            submitter,
            log_level: log_level.to_lowercase(),
            environment: environment.to_lowercase(),
            redirect_delay_ms,
            groups_path,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Get redirect delay as Duration
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submitter: SubmitterConfig::default(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY.as_millis() as u64,
            groups_path: DEFAULT_LISTING_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitter_config_default() {
        let config = SubmitterConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.wallet_address.is_none());
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.redirect_delay(), Duration::from_millis(2000));
        assert_eq!(config.groups_path, "/groups");
        assert!(config.is_development());
        assert!(!config.is_production());
    }
}
