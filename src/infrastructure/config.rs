//! Site configuration (site.toml)

use crate::domain::CountersMode;
use crate::error::{DiaryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the config file marking a site root
pub const CONFIG_FILE: &str = "site.toml";

fn default_mvp_months() -> f64 {
    3.0
}

fn default_overall_months() -> f64 {
    6.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// First day of the build; unset until the project has really started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_start: Option<NaiveDate>,
    #[serde(default)]
    pub counters_mode: CountersMode,
    #[serde(default = "default_mvp_months")]
    pub mvp_months: f64,
    #[serde(default = "default_overall_months")]
    pub overall_months: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            project_start: None,
            counters_mode: CountersMode::default(),
            mvp_months: default_mvp_months(),
            overall_months: default_overall_months(),
        }
    }
}

impl SiteConfig {
    /// Load config from site.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotSiteDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        Self::parse(&contents)
    }

    /// Parse config text, validating the goal durations
    pub fn parse(contents: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse site.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to site.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (key, months) in [
            ("mvp_months", self.mvp_months),
            ("overall_months", self.overall_months),
        ] {
            if !months.is_finite() || months <= 0.0 {
                return Err(DiaryError::Config(format!(
                    "Invalid {}: {} (must be a positive number of months)",
                    key, months
                )));
            }
        }
        Ok(())
    }

    /// Get a single value as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "project_start" => Ok(self
                .project_start
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "none".to_string())),
            "counters_mode" => Ok(self.counters_mode.to_string()),
            "mvp_months" => Ok(self.mvp_months.to_string()),
            "overall_months" => Ok(self.overall_months.to_string()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a single value from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "project_start" => {
                self.project_start = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                        DiaryError::Config(format!("Invalid project_start: '{}'", value))
                    })?)
                };
            }
            "counters_mode" => {
                self.counters_mode = value.parse().map_err(DiaryError::Config)?;
            }
            "mvp_months" | "overall_months" => {
                let months: f64 = value.parse().map_err(|_| {
                    DiaryError::Config(format!("Invalid {}: '{}' is not a number", key, value))
                })?;
                if key == "mvp_months" {
                    self.mvp_months = months;
                } else {
                    self.overall_months = months;
                }
                self.validate()?;
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    fn unknown_key(key: &str) -> DiaryError {
        DiaryError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: project_start, counters_mode, mvp_months, overall_months",
            key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.project_start, None);
        assert_eq!(config.counters_mode, CountersMode::Entries);
        assert_eq!(config.mvp_months, 3.0);
        assert_eq!(config.overall_months, 6.0);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.project_start = NaiveDate::from_ymd_opt(2025, 8, 20);
        config.counters_mode = CountersMode::Calendar;

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = SiteConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::parse("counters_mode = \"calendar\"\nmvp_months = 2\n").unwrap();
        assert_eq!(config.counters_mode, CountersMode::Calendar);
        assert_eq!(config.mvp_months, 2.0);
        assert_eq!(config.overall_months, 6.0);
        assert_eq!(config.project_start, None);
    }

    #[test]
    fn test_invalid_config_values() {
        assert!(SiteConfig::parse("counters_mode = \"weekly\"").is_err());
        assert!(SiteConfig::parse("mvp_months = 0").is_err());
        assert!(SiteConfig::parse("project_start = \"someday\"").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        match SiteConfig::load_from_dir(temp.path()).unwrap_err() {
            DiaryError::NotSiteDirectory(_) => {}
            other => panic!("Expected NotSiteDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_and_set() {
        let mut config = SiteConfig::default();
        assert_eq!(config.get("project_start").unwrap(), "none");

        config.set("project_start", "2025-01-01").unwrap();
        assert_eq!(config.get("project_start").unwrap(), "2025-01-01");
        config.set("project_start", "none").unwrap();
        assert_eq!(config.project_start, None);

        config.set("counters_mode", "calendar").unwrap();
        assert_eq!(config.get("counters_mode").unwrap(), "calendar");

        config.set("overall_months", "12").unwrap();
        assert_eq!(config.get("overall_months").unwrap(), "12");

        assert!(config.set("mvp_months", "-1").is_err());
        assert!(config.set("project_start", "01-01-2025").is_err());
        assert!(config.get("editor").is_err());
    }
}
