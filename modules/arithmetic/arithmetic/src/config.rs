//! Configuration for the arithmetic module.
//!
//! The module reads its section from `modules.arithmetic.config`. A missing
//! module entry or section falls back to [`ArithmeticConfig::default`].

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;

/// Name under which the module's section lives in the configuration tree.
pub const MODULE_NAME: &str = "arithmetic";

/// Prefix of environment variables merged over the configuration file.
pub const ENV_PREFIX: &str = "ARITHMETIC__";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    Invalid {
        module: &'static str,
        #[source]
        source: Box<figment::Error>,
    },
}

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArithmeticConfig {
    /// Emit a `debug` event per operation and a `warn` event per rejected
    /// division.
    pub trace_operations: bool,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            trace_operations: true,
        }
    }
}

impl ArithmeticConfig {
    /// Extract the module section from `figment`, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the section exists but does not
    /// deserialize.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let path = format!("modules.{MODULE_NAME}.config");
        match figment.find_value(&path) {
            Ok(value) => value.deserialize().map_err(invalid),
            Err(e) if e.missing() => Ok(Self::default()),
            Err(e) => Err(invalid(e)),
        }
    }

    /// Load from an optional YAML file, then `ARITHMETIC__*` environment
    /// variables (nested keys split on `__`).
    ///
    /// A path that does not exist contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the merged section is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = Self::from_figment(&figment)?;
        tracing::debug!(?config, "arithmetic config loaded");
        Ok(config)
    }
}

fn invalid(source: figment::Error) -> ConfigError {
    ConfigError::Invalid {
        module: MODULE_NAME,
        source: Box::new(source),
    }
}
