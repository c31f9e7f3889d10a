//! Configuration for orderwire
//!
//! Centralized configuration with sensible defaults. Values can be set
//! through the builder or loaded from environment variables.

use crate::error::{OrderWireError, Result};

/// Default bound on nested messages and groups
pub const DEFAULT_RECURSION_LIMIT: usize = 100;

/// Main configuration for an orderwire process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Runtime Configuration
    // -------------------------------------------------------------------------
    /// Deployment environment (develop, staging, production)
    pub environment: String,

    /// Log level for the orderwire target (trace, debug, info, warn, error)
    pub log_level: String,

    // -------------------------------------------------------------------------
    // Decoder Configuration
    // -------------------------------------------------------------------------
    /// What to do with fields the schema does not know
    pub unknown_fields: UnknownFieldPolicy,

    /// Max nesting of messages and groups
    pub recursion_limit: usize,

    /// Reject inputs larger than this many bytes (unbounded if None)
    pub max_message_size: Option<usize>,
}

/// Handling of fields whose number is not part of the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Keep the raw bytes and re-emit them on encode
    #[default]
    Preserve,

    /// Step over them and drop the bytes
    Discard,
}

impl std::str::FromStr for UnknownFieldPolicy {
    type Err = OrderWireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(UnknownFieldPolicy::Preserve),
            "discard" => Ok(UnknownFieldPolicy::Discard),
            other => Err(OrderWireError::Config(format!(
                "unknown field policy must be 'preserve' or 'discard', got '{}'",
                other
            ))),
        }
    }
}

/// Per-call decoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub unknown_fields: UnknownFieldPolicy,
    pub recursion_limit: usize,
    pub max_message_size: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Preserve,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_message_size: None,
        }
    }
}

impl DecodeOptions {
    pub fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn max_message_size(mut self, max: Option<usize>) -> Self {
        self.max_message_size = max;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "develop".to_string(),
            log_level: "debug".to_string(),
            unknown_fields: UnknownFieldPolicy::Preserve,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_message_size: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load from process environment variables
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Recognized keys:
    /// - `ENVIRONMENT`
    /// - `LOG_LEVEL`
    /// - `ORDERWIRE_UNKNOWN_FIELDS` (`preserve` | `discard`)
    /// - `ORDERWIRE_RECURSION_LIMIT`
    /// - `ORDERWIRE_MAX_MESSAGE_SIZE` (bytes)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let unknown_fields = match lookup("ORDERWIRE_UNKNOWN_FIELDS") {
            Some(value) => value.parse()?,
            None => defaults.unknown_fields,
        };

        let recursion_limit = match lookup("ORDERWIRE_RECURSION_LIMIT") {
            Some(value) => parse_usize("ORDERWIRE_RECURSION_LIMIT", &value)?,
            None => defaults.recursion_limit,
        };

        let max_message_size = match lookup("ORDERWIRE_MAX_MESSAGE_SIZE") {
            Some(value) => Some(parse_usize("ORDERWIRE_MAX_MESSAGE_SIZE", &value)?),
            None => defaults.max_message_size,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            unknown_fields,
            recursion_limit,
            max_message_size,
        })
    }

    /// Decoder settings derived from this config
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            unknown_fields: self.unknown_fields,
            recursion_limit: self.recursion_limit,
            max_message_size: self.max_message_size,
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn log_filter(&self) -> String {
        format!("info,orderwire={}", self.log_level)
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        OrderWireError::Config(format!("{} must be a non-negative integer, got '{}'", key, value))
    })
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the deployment environment
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.config.environment = environment.into();
        self
    }

    /// Set the log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Set the unknown field policy
    pub fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.config.unknown_fields = policy;
        self
    }

    /// Set the max nesting depth
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    /// Set the max accepted input size (in bytes)
    pub fn max_message_size(mut self, max: Option<usize>) -> Self {
        self.config.max_message_size = max;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
