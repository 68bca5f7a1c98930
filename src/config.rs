use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for lvforge
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LvforgeConfig {
    /// Volume path defaults
    pub volumes: VolumeConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VolumeConfig {
    /// Directory under which device nodes appear, e.g. /dev
    pub location: String,
    /// Filesystem type used when formatting, unless overridden per call
    pub filesystem: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Default for LvforgeConfig {
    fn default() -> Self {
        Self {
            volumes: VolumeConfig {
                location: "/dev".to_string(),
                filesystem: "ext4".to_string(),
            },
            observability: ObservabilityConfig {
                tracing_enabled: true,
                log_level: "info".to_string(),
            },
        }
    }
}

impl LvforgeConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (lvforge.toml)
    /// 3. Environment variables (prefixed with LVFORGE_)
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("volumes.location", defaults.volumes.location)?
            .set_default("volumes.filesystem", defaults.volumes.filesystem)?
            .set_default(
                "observability.tracing_enabled",
                defaults.observability.tracing_enabled,
            )?
            .set_default("observability.log_level", defaults.observability.log_level)?;

        if Path::new("lvforge.toml").exists() {
            builder = builder.add_source(File::with_name("lvforge"));
        }

        builder = builder.add_source(
            Environment::with_prefix("LVFORGE")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<LvforgeConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = LvforgeConfig::load_env_file();
        LvforgeConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static LvforgeConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::debug!("Configuration loaded successfully");
    Ok(())
}
