//! Service configuration.
//!
//! Values come from struct defaults, overridden by `PORT`, `ENVIRONMENT`
//! and `APP_HOST`. No other variables are read.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;

use crate::Environment;

#[cfg(feature = "tracing")]
use crate::logging::{init_logging, LogFormat, DEFAULT_LOG_FILTER};

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Host used when `APP_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Variables read by [`ConfigBuilder::build`] and the keys they populate.
const VARS: [(&str, &str); 3] = [
    ("PORT", "port"),
    ("ENVIRONMENT", "environment"),
    ("APP_HOST", "host"),
];

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// A variable could not be converted to its field type.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Greeting service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// # Example
    ///
    /// ```ignore
    /// let config: ServiceConfig = ServiceConfig::builder()
    ///     .with_dotenv()
    ///     .build()?;
    /// ```
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AsRef<ServiceConfig> for ServiceConfig {
    fn as_ref(&self) -> &ServiceConfig {
        self
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    load_dotenv: bool,
    vars: Option<config::Map<String, String>>,
    #[cfg(feature = "tracing")]
    init_logging: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` from the working directory before reading variables.
    ///
    /// Variables already present in the process environment win.
    pub fn with_dotenv(mut self) -> Self {
        self.load_dotenv = true;
        self
    }

    /// Read variables from `vars` instead of the process environment.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Initialize logging from `LOG_FORMAT` and `RUST_LOG`.
    #[cfg(feature = "tracing")]
    pub fn with_logging_from_env(mut self) -> Self {
        self.init_logging = true;
        self
    }

    pub fn build<C: DeserializeOwned>(self) -> Result<C, ConfigError> {
        if self.load_dotenv {
            let _ = dotenvy::dotenv();
        }

        #[cfg(feature = "tracing")]
        if self.init_logging {
            init_logging(LogFormat::from_env(), DEFAULT_LOG_FILTER);
        }

        config::Config::builder()
            .add_source(EnvSource { vars: self.vars })
            .build()
            .and_then(|c| c.try_deserialize::<C>())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Source for the variables in [`VARS`]. Empty values are treated as unset.
#[derive(Debug, Clone)]
struct EnvSource {
    vars: Option<config::Map<String, String>>,
}

impl EnvSource {
    fn var(&self, key: &str) -> Option<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => env::var(key).ok(),
        };
        value.filter(|v| !v.is_empty())
    }
}

impl config::Source for EnvSource {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        use config::{Value, ValueKind};

        let mut map = config::Map::new();
        for (var, key) in VARS {
            if let Some(val) = self.var(var) {
                let kind = match val.parse::<i64>() {
                    Ok(n) if key == "port" => ValueKind::I64(n),
                    _ => ValueKind::String(val),
                };
                let origin = var.to_string();
                map.insert(key.to_string(), Value::new(Some(&origin), kind));
            }
        }

        Ok(map)
    }
}
