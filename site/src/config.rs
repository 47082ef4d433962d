//! Environment configuration for the site host.

use std::time::Duration;

use thiserror::Error;

pub const BACKEND_URL_VAR: &str = "MAJESTEA_BACKEND_URL";
pub const REFRESH_SECS_VAR: &str = "MAJESTEA_REFRESH_SECS";

/// Longest accepted refresh period: one week.
pub const MAX_REFRESH_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidRefreshPeriod { var: &'static str, value: String },
    #[error("{var} must be at most {max} seconds, got {secs}")]
    RefreshPeriodTooLong { var: &'static str, secs: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Backend origin; `/api` is appended by the client. Empty when unset,
    /// in which case every fetch fails and fallback content is served.
    pub backend_url: String,
    /// `None` disables the refresh daemon.
    pub refresh_period: Option<Duration>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup(BACKEND_URL_VAR).unwrap_or_default();

        let refresh_period = match lookup(REFRESH_SECS_VAR) {
            None => None,
            Some(value) => {
                let invalid = || ConfigError::InvalidRefreshPeriod {
                    var: REFRESH_SECS_VAR,
                    value: value.clone(),
                };
                let secs: u64 = value.trim().parse().map_err(|_| invalid())?;
                if secs > MAX_REFRESH_SECS {
                    return Err(ConfigError::RefreshPeriodTooLong {
                        var: REFRESH_SECS_VAR,
                        secs,
                        max: MAX_REFRESH_SECS,
                    });
                }
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        Ok(Self {
            backend_url,
            refresh_period,
        })
    }
}
