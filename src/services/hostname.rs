//! Host name lookup behind a trait so the failure path can be exercised.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostnameError {
    #[error("hostname unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("hostname is not valid UTF-8: {0}")]
    NotUtf8(String),
}

pub trait HostnameSource: Send + Sync {
    fn hostname(&self) -> Result<String, HostnameError>;
}

/// Asks the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        hostname::get()?
            .into_string()
            .map_err(|raw| HostnameError::NotUtf8(raw.to_string_lossy().into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_hostname_is_not_empty() {
        let name = SystemHostname.hostname().unwrap();
        assert!(!name.is_empty());
    }
}
