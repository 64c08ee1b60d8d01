//! Configuration types for basket-fees

use serde::Deserialize;

use crate::fees::FeeParams;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub fees: FeesConfig,
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,
    pub telemetry: TelemetryConfig,
}

/// Basket-wide fee constants
#[derive(Debug, Clone, Deserialize)]
pub struct FeesConfig {
    pub scaling_factor: f64,
    pub deposit_fee: f64,
    pub redemption_fee: f64,
    #[serde(default)]
    pub minimum_fee: f64,
}

/// One constituent token and its target basket weight
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub symbol: String,
    pub target: f64,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormatConfig,
}

/// Log output format selection
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

impl Config {
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Fee parameters for one configured token
    pub fn fee_params(&self, symbol: &str) -> Option<FeeParams> {
        self.tokens
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| FeeParams {
                target: t.target,
                deposit_fee: self.fees.deposit_fee,
                redemption_fee: self.fees.redemption_fee,
                scaling_factor: self.fees.scaling_factor,
                minimum_fee: self.fees.minimum_fee,
            })
    }
}
