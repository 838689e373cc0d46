use crate::tax::LONG_TERM_GAINS_RATE;
use anyhow::{Context, Result};
use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `REEL_TAX_RATE=0.2`.
pub const ENV_PREFIX: &str = "REEL";

fn default_depreciation_rate() -> f64 {
    0.02
}

fn default_allow_negative_balance() -> bool {
    true
}

fn default_news_delay_secs() -> u64 {
    5
}

/// Named constant sets for the valuation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// 5% profit on buys, taxed at 15%.
    #[default]
    ProfitAndTax,
    /// Buys add a flat 3% of the invested amount, untaxed.
    FlatMultiplier,
}

impl Preset {
    pub fn config(self) -> EngineConfig {
        match self {
            Preset::ProfitAndTax => EngineConfig::new(0.05, LONG_TERM_GAINS_RATE, 0.02),
            Preset::FlatMultiplier => EngineConfig::new(0.03, 0.0, 0.02),
        }
    }
}

/// Rates and behaviour switches for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fraction of the invested amount booked as gross profit on a buy.
    profit_rate: f64,
    /// Fraction of gross profit withheld as tax.
    tax_rate: f64,
    /// Fraction of the sold amount subtracted from the cumulative change.
    #[serde(default = "default_depreciation_rate")]
    depreciation_rate: f64,
    /// When false, sells that would push the total value below zero are refused.
    #[serde(default = "default_allow_negative_balance")]
    allow_negative_balance: bool,
    /// Delay before the breaking-news alert fires after a selection.
    #[serde(default = "default_news_delay_secs")]
    news_delay_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl EngineConfig {
    pub fn new(profit_rate: f64, tax_rate: f64, depreciation_rate: f64) -> Self {
        Self {
            profit_rate,
            tax_rate,
            depreciation_rate,
            allow_negative_balance: default_allow_negative_balance(),
            news_delay_secs: default_news_delay_secs(),
        }
    }

    /// Layers the preset, an optional config file and `REEL_*` environment variables,
    /// later sources overriding earlier ones.
    pub fn load(preset: Preset, file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(preset, file, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with_env(
        preset: Preset,
        file: Option<&Path>,
        env: Environment,
    ) -> Result<Self> {
        let defaults =
            Config::try_from(&preset.config()).context("Failed to serialize preset defaults")?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(env.try_parsing(true));

        let config: Self = builder
            .build()
            .context("Failed to build engine configuration")?
            .try_deserialize()
            .context("Failed to deserialize engine configuration")?;

        log::info!("Engine configuration loaded: {:?}", config);
        Ok(config)
    }

    pub fn with_allow_negative_balance(mut self, allow: bool) -> Self {
        self.allow_negative_balance = allow;
        self
    }

    pub fn profit_rate(&self) -> f64 {
        self.profit_rate
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn depreciation_rate(&self) -> f64 {
        self.depreciation_rate
    }

    pub fn allow_negative_balance(&self) -> bool {
        self.allow_negative_balance
    }

    pub fn news_delay(&self) -> Duration {
        Duration::from_secs(self.news_delay_secs)
    }
}
