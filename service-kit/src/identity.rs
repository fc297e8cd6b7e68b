//! Name and version a service reports about itself.
use crate::env::{self, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    pub name: String,
    pub version: String,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// `SERVICE_NAME` / `SERVICE_VERSION` override the compiled-in defaults.
    pub fn from_env(default_name: &str, default_version: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            name: env::string_or("SERVICE_NAME", default_name)?,
            version: env::string_or("SERVICE_VERSION", default_version)?,
        })
    }
}
