//! Listener, logging and browser-access settings for the analysis service.

use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest an evaluation request may run before the timeout layer answers.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the service listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Production switches logs to JSON and closes CORS unless origins are listed.
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on one `/api/analyze` call, simulation included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call the API.
    pub cors_origins: Option<String>,
}

/// Deployment flavour.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Which browser origins may call the analysis endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Exactly these origins.
    Listed(Vec<String>),
    /// Any origin; the development default so local front ends just work.
    AnyOrigin,
    /// No cross-origin access; the production default.
    SameOriginOnly,
}

impl fmt::Display for CorsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorsPolicy::Listed(origins) => write!(f, "{}", origins.join(",")),
            CorsPolicy::AnyOrigin => write!(f, "any"),
            CorsPolicy::SameOriginOnly => write!(f, "same-origin"),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ValidationError::InvalidHost(addr))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolves the CORS policy. Listed origins win; otherwise the
    /// environment decides.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if !origins.is_empty() {
            CorsPolicy::Listed(origins)
        } else if self.is_production() {
            CorsPolicy::SameOriginOnly
        } else {
            CorsPolicy::AnyOrigin
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,choice_compass=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_8080_in_development() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn listed_origins_take_precedence() {
        let config = ServerConfig {
            environment: Environment::Production,
            cors_origins: Some("http://localhost:5173, http://localhost:3000,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.cors_policy(),
            CorsPolicy::Listed(vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ])
        );
    }

    #[test]
    fn unlisted_origins_follow_environment() {
        let mut config = ServerConfig {
            cors_origins: Some(" , ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cors_policy(), CorsPolicy::AnyOrigin);

        config.environment = Environment::Production;
        assert_eq!(config.cors_policy(), CorsPolicy::SameOriginOnly);
        assert_eq!(config.cors_policy().to_string(), "same-origin");
    }

    #[test]
    fn environment_parses_lowercase() {
        let env: Environment = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(env, Environment::Production);
        assert_eq!(env.as_str(), "production");
        assert!(serde_json::from_str::<Environment>("\"staging\"").is_err());
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn timeout_must_be_positive_and_bounded() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }
}
