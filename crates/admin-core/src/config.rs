//! Console configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the exam REST API
    pub api_base: String,
    /// Initial rows per page
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// How long a notification stays up
    pub notice_timeout_ms: u32,
    pub log_level: String,
    /// Account the login form is checked against
    pub admin_username: String,
    /// Lowest passing score on the dashboard
    pub pass_mark: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:9000/api".to_string(),
            page_size: 10,
            page_size_options: vec![5, 10, 25],
            notice_timeout_ms: 6000,
            log_level: "info".to_string(),
            admin_username: "admin".to_string(),
            pass_mark: 40.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply an API base override (e.g. from the build environment).
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.to_string();
        }
        self
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::Invalid {
                field: "api_base",
                reason: format!("{} is not an http(s) URL", self.api_base),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = AppConfig::from_json(r#"{"page_size": 25, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.api_base, "http://localhost:9000/api");
    }

    #[test]
    fn rejects_zero_page_size_and_bad_url() {
        assert!(matches!(
            AppConfig::from_json(r#"{"page_size": 0}"#),
            Err(ConfigError::Invalid { field: "page_size", .. })
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"api_base": "localhost"}"#),
            Err(ConfigError::Invalid { field: "api_base", .. })
        ));
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = AppConfig::default().with_api_base(Some("  "));
        assert_eq!(config.api_base, "http://localhost:9000/api");
        let config = config.with_api_base(Some("https://exams.example.org/api"));
        assert_eq!(config.api_base, "https://exams.example.org/api");
    }
}
