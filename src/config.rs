use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub fallback: FallbackSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Hosted document store holding the university collection
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_academic_weight")]
    pub academic: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_field_weight")]
    pub field: f64,
    #[serde(default = "default_quality_weight")]
    pub quality: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            academic: default_academic_weight(),
            location: default_location_weight(),
            budget: default_budget_weight(),
            field: default_field_weight(),
            quality: default_quality_weight(),
        }
    }
}

fn default_academic_weight() -> f64 { 40.0 }
fn default_location_weight() -> f64 { 20.0 }
fn default_budget_weight() -> f64 { 20.0 }
fn default_field_weight() -> f64 { 10.0 }
fn default_quality_weight() -> f64 { 10.0 }

/// Empty-primary fallback behavior (see `FallbackPolicy`)
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    #[serde(default = "default_use_reference")]
    pub use_reference_on_empty: bool,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            use_reference_on_empty: default_use_reference(),
        }
    }
}

fn default_use_reference() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with UNISPHERE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with UNISPHERE_)
            // e.g., UNISPHERE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("UNISPHERE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("UNISPHERE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Override store credentials from plain environment variables so the
/// service picks them up from deployment secrets without the prefixed form
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let store_endpoint = env::var("UNISPHERE_STORE__ENDPOINT").ok();
    let store_api_key = env::var("STORE_API_KEY")
        .or_else(|_| env::var("UNISPHERE_STORE__API_KEY"))
        .ok();
    let store_project_id = env::var("UNISPHERE_STORE__PROJECT_ID").ok();
    let store_database_id = env::var("UNISPHERE_STORE__DATABASE_ID").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(endpoint) = store_endpoint {
        builder = builder.set_override("store.endpoint", endpoint)?;
    }
    if let Some(api_key) = store_api_key {
        builder = builder.set_override("store.api_key", api_key)?;
    }
    if let Some(project_id) = store_project_id {
        builder = builder.set_override("store.project_id", project_id)?;
    }
    if let Some(database_id) = store_database_id {
        builder = builder.set_override("store.database_id", database_id)?;
    }

    builder.build()
}
