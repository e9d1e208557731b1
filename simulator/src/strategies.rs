//! Built-in strategies addressable by name from scenario files and flags.

use crate::{positive, ConfigError};
use crapsim_execution::strategy::{
    DontPassLay, IronCross, NoBet, PassLineOdds, Place68, RegressAndPress,
};
use crapsim_execution::DynStrategy;
use crapsim_types::Chips;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Names accepted by `--strategy` and the `type` tag of scenario entries.
pub const STRATEGY_NAMES: [&str; 6] = [
    "no-bet",
    "pass-line-odds",
    "dont-pass-lay",
    "place-6-8",
    "iron-cross",
    "regress-and-press",
];

/// One strategy entry of a scenario. Omitted parameters take the
/// strategy's defaults.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StrategyConfig {
    NoBet,
    PassLineOdds(PassLineOddsConfig),
    DontPassLay(DontPassLayConfig),
    #[serde(rename = "place-6-8")]
    Place68(Place68Config),
    IronCross(IronCrossConfig),
    RegressAndPress(RegressAndPressConfig),
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PassLineOddsConfig {
    pub pass_amount: Chips,
    pub odds_multiple: u32,
}

impl Default for PassLineOddsConfig {
    fn default() -> Self {
        let strategy = PassLineOdds::default();
        Self {
            pass_amount: strategy.pass_amount,
            odds_multiple: strategy.odds_multiple,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DontPassLayConfig {
    pub dont_pass_amount: Chips,
    pub lay_multiple: u32,
}

impl Default for DontPassLayConfig {
    fn default() -> Self {
        let strategy = DontPassLay::default();
        Self {
            dont_pass_amount: strategy.dont_pass_amount,
            lay_multiple: strategy.lay_multiple,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Place68Config {
    pub place_amount: Chips,
}

impl Default for Place68Config {
    fn default() -> Self {
        Self {
            place_amount: Place68::default().place_amount,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IronCrossConfig {
    pub unit: Chips,
}

impl Default for IronCrossConfig {
    fn default() -> Self {
        Self {
            unit: IronCross::default().unit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegressAndPressConfig {
    pub initial_5_9: Chips,
    pub initial_6_8: Chips,
    pub base_5_9: Chips,
    pub base_6_8: Chips,
}

impl Default for RegressAndPressConfig {
    fn default() -> Self {
        let strategy = RegressAndPress::default();
        Self {
            initial_5_9: strategy.initial_5_9,
            initial_6_8: strategy.initial_6_8,
            base_5_9: strategy.base_5_9,
            base_6_8: strategy.base_6_8,
        }
    }
}

impl StrategyConfig {
    /// Default-parameter entry for `name`.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Ok(match name {
            "no-bet" => StrategyConfig::NoBet,
            "pass-line-odds" => StrategyConfig::PassLineOdds(Default::default()),
            "dont-pass-lay" => StrategyConfig::DontPassLay(Default::default()),
            "place-6-8" => StrategyConfig::Place68(Default::default()),
            "iron-cross" => StrategyConfig::IronCross(Default::default()),
            "regress-and-press" => StrategyConfig::RegressAndPress(Default::default()),
            _ => {
                return Err(ConfigError::UnknownStrategy {
                    name: name.to_string(),
                })
            }
        })
    }

    /// Check parameters and build the strategy.
    pub fn build(&self) -> Result<Arc<dyn DynStrategy>, ConfigError> {
        let strategy: Arc<dyn DynStrategy> = match *self {
            StrategyConfig::NoBet => Arc::new(NoBet),
            StrategyConfig::PassLineOdds(config) => Arc::new(PassLineOdds::new(
                positive("pass_amount", config.pass_amount)?,
                config.odds_multiple,
            )),
            StrategyConfig::DontPassLay(config) => Arc::new(DontPassLay::new(
                positive("dont_pass_amount", config.dont_pass_amount)?,
                config.lay_multiple,
            )),
            StrategyConfig::Place68(config) => {
                Arc::new(Place68::new(positive("place_amount", config.place_amount)?))
            }
            StrategyConfig::IronCross(config) => {
                Arc::new(IronCross::new(positive("unit", config.unit)?))
            }
            StrategyConfig::RegressAndPress(config) => Arc::new(RegressAndPress::new(
                positive("initial_5_9", config.initial_5_9)?,
                positive("initial_6_8", config.initial_6_8)?,
                positive("base_5_9", config.base_5_9)?,
                positive("base_6_8", config.base_6_8)?,
            )),
        };
        Ok(strategy)
    }
}

/// Built-in strategy `name` with default parameters.
pub fn strategy_by_name(name: &str) -> Result<Arc<dyn DynStrategy>, ConfigError> {
    StrategyConfig::from_name(name)?.build()
}
