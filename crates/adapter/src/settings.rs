use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{BID_TTL_SECS, DEFAULT_CURRENCY};

/// Vendor endpoint and bid defaults, injected into the adapter at
/// construction time so environments can override them without code change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BidderConfig {
    /// Zeta RTB endpoint receiving the outbound payload.
    #[validate(url)]
    pub endpoint: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Cache lifetime advertised on returned bids, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u32,
    /// Marks outbound payloads as test traffic.
    #[serde(default)]
    pub test_mode: bool,
}

/// User-sync endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncConfig {
    /// Iframe sync page; the consent query string is appended to it.
    #[validate(url)]
    pub iframe_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub bidder: BidderConfig,
    #[validate(nested)]
    pub sync: SyncConfig,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_ttl_secs() -> u32 {
    BID_TTL_SECS
}

impl Settings {
    /// Load the embedded default configuration, with environment overrides.
    pub fn new() -> Result<Self, ConfigError> {
        let toml_str = include_str!("../../../zeta-adapter.toml");
        Self::from_toml(toml_str)
    }

    /// Parse settings from a TOML string, layered with `ZETA_ADAPTER__…`
    /// environment overrides, and validate the result.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let environment = Environment::default().prefix("ZETA_ADAPTER").separator("__");

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(settings)
    }
}
