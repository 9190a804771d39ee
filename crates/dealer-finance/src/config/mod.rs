use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::financing::{LenderMatcher, MatchingConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub financing: FinancingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            financing: FinancingConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Lender catalog source and matcher tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancingConfig {
    /// JSON or CSV catalog; the built-in reference catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub quote_term_months: u32,
    /// Year vehicle ages are measured against; the current year when unset.
    pub reference_year: Option<i32>,
}

impl Default for FinancingConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            quote_term_months: MatchingConfig::default().quote_term_months,
            reference_year: None,
        }
    }
}

impl FinancingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path = env::var("FINANCING_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let quote_term_months = match env::var("FINANCING_QUOTE_TERM_MONTHS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|term| *term > 0)
                .ok_or(ConfigError::InvalidQuoteTerm)?,
            Err(_) => defaults.quote_term_months,
        };

        let reference_year = match env::var("FINANCING_REFERENCE_YEAR") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<i32>()
                    .map_err(|_| ConfigError::InvalidReferenceYear)?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            catalog_path,
            quote_term_months,
            reference_year,
        })
    }

    /// Matcher honoring the configured quote term and reference year.
    pub fn matcher(&self) -> LenderMatcher {
        let matcher = LenderMatcher::new(MatchingConfig {
            quote_term_months: self.quote_term_months,
            ..MatchingConfig::default()
        });

        match self.reference_year {
            Some(year) => matcher.with_reference_year(year),
            None => matcher,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidQuoteTerm,
    InvalidReferenceYear,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidQuoteTerm => {
                write!(f, "FINANCING_QUOTE_TERM_MONTHS must be a positive whole number")
            }
            ConfigError::InvalidReferenceYear => {
                write!(f, "FINANCING_REFERENCE_YEAR must be a calendar year")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidQuoteTerm
            | ConfigError::InvalidReferenceYear => None,
        }
    }
}
