use crate::validation::{ValidationConfig, dnsmx::RecordPolicy, length::LengthLimits};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading settings from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Service settings read from environment variables (and `.env`).
///
/// | variable             | default     |
/// |----------------------|-------------|
/// | `HOST`               | `127.0.0.1` |
/// | `PORT`               | `8080`      |
/// | `DNS_TIMEOUT_SECS`   | `5`         |
/// | `DNS_RECORD_POLICY`  | `mx`        |
/// | `LOCAL_MAX_LENGTH`   | `64`        |
/// | `DOMAIN_MAX_LENGTH`  | `255`       |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub dns_timeout: Duration,
    pub record_policy: RecordPolicy,
    pub limits: LengthLimits,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dns_timeout: Duration::from_secs(5),
            record_policy: RecordPolicy::Mx,
            limits: LengthLimits::default(),
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse(&lookup, "PORT")?.unwrap_or(defaults.port);
        let dns_timeout = parse(&lookup, "DNS_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.dns_timeout);
        let record_policy = match lookup("DNS_RECORD_POLICY").as_deref() {
            None | Some("mx") => RecordPolicy::Mx,
            Some("mx_or_address") => RecordPolicy::MxOrAddress,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "DNS_RECORD_POLICY",
                    value: other.to_string(),
                });
            }
        };
        let local = parse::<i64, _>(&lookup, "LOCAL_MAX_LENGTH")?
            .unwrap_or(defaults.limits.local as i64);
        let domain = parse::<i64, _>(&lookup, "DOMAIN_MAX_LENGTH")?
            .unwrap_or(defaults.limits.domain as i64);

        Ok(Self {
            host,
            port,
            dns_timeout,
            record_policy,
            limits: LengthLimits::from_signed(local, domain),
        })
    }

    /// Baseline validation options every request starts from.
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig::default()
            .with_local_max_length(self.limits.local)
            .with_domain_max_length(self.limits.domain)
            .with_record_policy(self.record_policy)
            .with_dns_timeout(self.dns_timeout)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidValue { key, value }),
        },
    }
}
