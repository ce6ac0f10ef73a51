use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_cocktail_base_url")]
    pub cocktail_base_url: String,
    #[serde(default = "default_meal_base_url")]
    pub meal_base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            cocktail_base_url: default_cocktail_base_url(),
            meal_base_url: default_meal_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_cocktail_base_url() -> String {
    "https://www.thecocktaildb.com/api/json/v1/1".to_string()
}

fn default_meal_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SIPSIDE_)
    /// 4. A bare PORT variable, for platforms that inject one
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SIPSIDE_)
            // e.g., SIPSIDE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SIPSIDE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_port_override(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SIPSIDE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the bare PORT environment variable on top of everything else.
/// We check PORT first, then SIPSIDE_SERVER__PORT via the normal layering.
fn apply_port_override(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_upstream_settings() {
        let upstream = UpstreamSettings::default();
        assert!(upstream.cocktail_base_url.contains("thecocktaildb.com"));
        assert!(upstream.meal_base_url.contains("themealdb.com"));
    }

    #[test]
    fn test_settings_deserialize_from_empty_table() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(
            settings.upstream.cocktail_base_url,
            "https://www.thecocktaildb.com/api/json/v1/1"
        );
    }
}
