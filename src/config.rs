//! Configuration loading.
//!
//! Layered: crate defaults, then an optional TOML file, then `RESTREE_*`
//! environment overrides (e.g. `RESTREE_SERIALIZATION__MAX_DEPTH=4`).

use crate::error::GatewayError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Representation serialization settings
    #[serde(default)]
    pub serialization: SerializationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the payload serializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializationConfig {
    /// Maximum payload traversal depth before the placeholder terminates
    /// the walk.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    16
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration: defaults, then `file` when given, then
    /// `RESTREE_*` environment variables (`__` separates nesting levels).
    pub fn load(file: Option<&Path>) -> Result<GatewayConfig, GatewayError> {
        let mut builder = Config::builder()
            .set_default("serialization.max_depth", default_max_depth() as i64)?;

        if let Some(path) = file {
            builder = builder.add_source(
                File::with_name(&path.to_string_lossy()).required(false),
            );
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("RESTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
