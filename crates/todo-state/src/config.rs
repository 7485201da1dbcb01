//! App Configuration
//!
//! Seed list and add rules, loaded from JSON. Every field has a default, so a
//! partial file (or `{}`) is valid.

use std::collections::HashSet;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::todo::Todo;

/// Validation rules for the add operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRules {
    /// Accept todos whose text is empty or whitespace only
    pub allow_empty_text: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Todos present when the app starts
    pub seed: Vec<Todo>,
    pub rules: AddRules,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                Todo::done("Cook Supper"),
                Todo::new("Buy Bread"),
                Todo::new("Buy Milk"),
                Todo::new("Buy Flowers"),
            ],
            rules: AddRules::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The seed list must already satisfy the unique-key invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for todo in &self.seed {
            if !seen.insert(todo.key()) {
                return Err(ConfigError::DuplicateSeed(todo.text.clone()));
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("[CONFIG] Unknown log level {:?}, using info", self.log_level);
            LevelFilter::Info
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let config = AppConfig::default();
        let texts: Vec<&str> = config.seed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Cook Supper", "Buy Bread", "Buy Milk", "Buy Flowers"]);
        assert!(config.seed[0].is_done);
        assert!(config.seed[1..].iter().all(|t| !t.is_done));
        assert!(!config.rules.allow_empty_text);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{"rules":{"allowEmptyText":true}}"#).unwrap();
        assert!(config.rules.allow_empty_text);
        assert_eq!(config.seed, AppConfig::default().seed);
        assert_eq!(config.level_filter(), LevelFilter::Info);

        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_custom_seed_and_level() {
        let json = r#"{"seed":[{"text":"Water Plants","isDone":true}],"logLevel":"debug"}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.seed, vec![Todo::done("Water Plants")]);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let json = r#"{"seed":[{"text":"Buy Milk"},{"text":"buy milk"}]}"#;
        match AppConfig::from_json(json) {
            Err(ConfigError::DuplicateSeed(text)) => assert_eq!(text, "buy milk"),
            other => panic!("expected DuplicateSeed, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(AppConfig::from_json("{seed:"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let config = AppConfig::from_json(include_str!("../../../config/app.json"))
            .expect("bundled config should parse");
        assert_eq!(config.seed, AppConfig::default().seed);
    }
}
