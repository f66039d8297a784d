//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Breakdown defaults.
    #[serde(default)]
    pub breakdown: BreakdownConfig,
    /// Profile of the demo wallet owner.
    #[serde(default)]
    pub person: PersonConfig,
}

/// Breakdown defaults used when the caller gives none.
#[derive(Debug, Clone, Deserialize)]
pub struct BreakdownConfig {
    /// Policy tag (`highestFirst`, `dollars`, `twenties`).
    #[serde(default = "default_policy")]
    pub default_policy: String,
    /// Amount to break down.
    #[serde(default = "default_amount")]
    pub default_amount: u64,
}

fn default_policy() -> String {
    "highestFirst".to_string()
}

fn default_amount() -> u64 {
    186
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            default_policy: default_policy(),
            default_amount: default_amount(),
        }
    }
}

/// Profile of the wallet owner.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonConfig {
    /// Given name.
    #[serde(default = "default_first_name")]
    pub first_name: String,
    /// Family name.
    #[serde(default = "default_last_name")]
    pub last_name: String,
    /// Age in years.
    #[serde(default = "default_age")]
    pub age: u32,
    /// Height in metres.
    #[serde(default = "default_height_m")]
    pub height_m: Decimal,
    /// Weight in kilograms.
    #[serde(default = "default_weight_kg")]
    pub weight_kg: Decimal,
}

fn default_first_name() -> String {
    "Ryu".to_string()
}

fn default_last_name() -> String {
    "Poolhopper".to_string()
}

fn default_age() -> u32 {
    40
}

fn default_height_m() -> Decimal {
    Decimal::new(18, 1) // 1.8
}

fn default_weight_kg() -> Decimal {
    Decimal::from(140)
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            last_name: default_last_name(),
            age: default_age(),
            height_m: default_height_m(),
            weight_kg: default_weight_kg(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `BILLFOLD__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BILLFOLD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
