// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server configuration module
//!
//! This module provides configuration structures and loading logic for the
//! bridge server and for the Scorechain API connection it forwards to.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, Environment as ConfigEnv, File, Map};
use scorechain_client::{DEFAULT_BASE_URL, ScorechainConfig, ScorechainError};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{ServerError, ServerResult};

/// Default listening port of the bridge
pub const DEFAULT_PORT: u16 = 8080;

/// A validated server port that ensures the value is appropriate for the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerPort {
    port: u16,
    environment: Environment,
}

impl ServerPort {
    /// Create a new `ServerPort`, ensuring it's valid for the given environment
    ///
    /// # Errors
    ///
    /// Returns an error if the port is 0 in non-testing environments
    pub fn new(port: u16, environment: Environment) -> Result<Self> {
        if port == 0 && environment != Environment::Testing {
            return Err(anyhow!("port cannot be 0 in non-testing environments"));
        }
        Ok(Self { port, environment })
    }

    /// Default port for development
    pub const fn default_development() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::Development,
        }
    }

    /// Testing port (port 0, chosen by the OS)
    pub const fn testing() -> Self {
        Self {
            port: 0,
            environment: Environment::Testing,
        }
    }

    /// Get the port value
    pub fn value(&self) -> u16 {
        self.port
    }
}

impl<'de> Deserialize<'de> for ServerPort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let port = u16::deserialize(deserializer)?;
        // validated against the real environment once loading completes
        Ok(Self {
            port,
            environment: Environment::Development,
        })
    }
}

/// A validated timeout duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(Duration);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Default timeout (30 seconds)
    pub const fn default_value() -> Self {
        Self(Duration::from_secs(30))
    }

    /// Testing timeout (5 seconds)
    pub const fn testing() -> Self {
        Self(Duration::from_secs(5))
    }

    /// Get the timeout value
    pub fn value(&self) -> Duration {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self::default_value()
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment
    Development,
    /// Testing environment
    Testing,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

/// Connection settings for the Scorechain Ethereum API
///
/// Read from `SC_ETH_URL` and `SC_ETH_TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorechainSettings {
    /// Base URL of the API
    pub url: String,
    /// Optional API token
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl Default for ScorechainSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl ScorechainSettings {
    /// Load settings from the given variables, or the process environment when `None`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is not a usable URL.
    pub fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("url", DEFAULT_BASE_URL)?
            .add_source(
                ConfigEnv::with_prefix("SC_ETH")
                    .prefix_separator("_")
                    .source(vars),
            )
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings
            .client_config()
            .map_err(|e| ConfigError::Message(format!("invalid Scorechain settings: {e}")))?;

        Ok(settings)
    }

    /// Client configuration derived from these settings
    ///
    /// # Errors
    ///
    /// Returns `ScorechainError::Config` if the base URL is not a usable URL.
    pub fn client_config(&self) -> Result<ScorechainConfig, ScorechainError> {
        ScorechainConfig::parse(&self.url, self.token.clone())
    }
}

/// Server configuration for different environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: IpAddr,
    /// Server port (validated for environment compatibility)
    pub port: ServerPort,
    /// Request timeout in seconds (validated range: 1-300)
    pub timeout_seconds: TimeoutSeconds,
    /// Environment type
    pub environment: Environment,
    /// Scorechain API connection
    #[serde(skip)]
    pub scorechain: ScorechainSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::default_development(),
            timeout_seconds: TimeoutSeconds::default(),
            environment: Environment::Development,
            scorechain: ScorechainSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables and optional configuration files
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if configuration is invalid or cannot be loaded.
    pub fn from_env() -> ServerResult<Self> {
        Self::load().map_err(|e| ServerError::Config {
            message: format!("failed to load configuration: {e}"),
        })
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. Configuration file (config.json)
    /// 3. Environment-specific files (config.{env}.json)
    /// 4. Variables with SERVER_ prefix (`SERVER_TIMEOUT_SECONDS`)
    /// 5. `ENVIRONMENT`
    ///
    /// Scorechain settings are read from `SC_ETH_URL` and `SC_ETH_TOKEN`.
    /// `vars` replaces the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let env_var = match &vars {
            Some(vars) => vars.get("ENVIRONMENT").cloned(),
            None => std::env::var("ENVIRONMENT").ok(),
        };
        let environment = env_var
            .as_deref()
            .unwrap_or("development")
            .to_lowercase();

        let mut config_builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("timeout_seconds", 30)?
            .set_default("environment", "development")?
            .add_source(File::with_name("config.json").required(false))
            .add_source(File::with_name(&format!("config.{environment}.json")).required(false))
            .add_source(
                ConfigEnv::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars.clone()),
            );

        if env_var.is_some() {
            config_builder = config_builder.set_override("environment", environment)?;
        }

        let config = config_builder.build()?;
        let mut server_config: Self = config.try_deserialize()?;

        server_config.port = ServerPort::new(server_config.port.value(), server_config.environment)
            .map_err(|e| ConfigError::Message(format!("invalid port configuration: {e}")))?;
        server_config.scorechain = ScorechainSettings::load_from(vars)?;

        Ok(server_config)
    }

    /// Create configuration optimized for testing
    pub fn for_testing() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::testing(),
            timeout_seconds: TimeoutSeconds::testing(),
            environment: Environment::Testing,
            scorechain: ScorechainSettings::default(),
        }
    }

    /// Replace the Scorechain settings
    #[must_use]
    pub fn with_scorechain(mut self, scorechain: ScorechainSettings) -> Self {
        self.scorechain = scorechain;
        self
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port.value())
    }
}
