use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::{ScoringWeights, MAX_RESULTS};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub limits: LimitSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// TOML catalog file; the built-in catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_goal_weight")]
    pub goal: u32,
    #[serde(default = "default_skill_weight")]
    pub skill: u32,
    #[serde(default = "default_keyword_weight")]
    pub keyword: u32,
    #[serde(default = "default_education_weight")]
    pub education: u32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            goal: default_goal_weight(),
            skill: default_skill_weight(),
            keyword: default_keyword_weight(),
            education: default_education_weight(),
            max_results: default_max_results(),
        }
    }
}

impl From<&ScoringSettings> for ScoringWeights {
    fn from(settings: &ScoringSettings) -> Self {
        Self {
            goal: settings.goal,
            skill: settings.skill,
            keyword: settings.keyword,
            education: settings.education,
            max_results: settings.max_results,
        }
    }
}

fn default_goal_weight() -> u32 { 50 }
fn default_skill_weight() -> u32 { 10 }
fn default_keyword_weight() -> u32 { 5 }
fn default_education_weight() -> u32 { 5 }
fn default_max_results() -> usize { MAX_RESULTS }

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
        }
    }
}

fn default_max_batch_size() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAREER__)
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAREER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize and check value ranges
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RESULTS).contains(&self.scoring.max_results) {
            return Err(ConfigError::Message(format!(
                "scoring.max_results must be between 1 and {}, got {}",
                MAX_RESULTS, self.scoring.max_results
            )));
        }
        if self.limits.max_batch_size == 0 {
            return Err(ConfigError::Message(
                "limits.max_batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CAREER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
