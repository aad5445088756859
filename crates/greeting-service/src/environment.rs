//! Deployment environment name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name used when `ENVIRONMENT` is unset or empty.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Deployment environment the service reports in its greeting.
///
/// The name is kept exactly as configured (`dev`, `prod`, `staging-eu`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Environment(String);

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self(DEFAULT_ENVIRONMENT.to_string())
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Environment {
    /// Blank names fall back to [`DEFAULT_ENVIRONMENT`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::default()
        } else {
            Self(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_production(&self) -> bool {
        matches!(self.0.to_lowercase().as_str(), "production" | "prod")
    }

    pub fn is_development(&self) -> bool {
        matches!(self.0.to_lowercase().as_str(), "development" | "dev")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_keeps_name_verbatim() {
        assert_eq!("prod".parse::<Environment>().unwrap().as_str(), "prod");
        assert_eq!("Staging".parse::<Environment>().unwrap().as_str(), "Staging");
        assert_eq!(Environment::new("qa-1").to_string(), "qa-1");
    }

    #[test]
    fn environment_empty_falls_back_to_dev() {
        assert_eq!("".parse::<Environment>().unwrap(), Environment::default());
        assert_eq!(Environment::new("").as_str(), "dev");
    }

    #[test]
    fn environment_is_methods() {
        assert!(Environment::new("prod").is_production());
        assert!(Environment::new("PRODUCTION").is_production());
        assert!(!Environment::new("prod").is_development());
        assert!(Environment::new("dev").is_development());
        assert!(Environment::new("Development").is_development());

        let staging = Environment::new("staging");
        assert!(!staging.is_production());
        assert!(!staging.is_development());
    }

    #[test]
    fn environment_default() {
        assert_eq!(Environment::default().as_str(), DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn environment_serializes_as_plain_string() {
        let json = serde_json::to_string(&Environment::new("prod")).unwrap();
        assert_eq!(json, r#""prod""#);

        let env: Environment = serde_json::from_str(r#""staging""#).unwrap();
        assert_eq!(env.as_str(), "staging");

        let env: Environment = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(env.as_str(), "dev");
    }
}
