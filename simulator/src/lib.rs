//! Scenario files and reports for the `crapsim` binary.

use crapsim_execution::{DynStrategy, SessionPlan, SimulationConfig, Termination};
use crapsim_types::{Chips, RulesError, TableRules, TableRulesConfig, DEFAULT_BANKROLL};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};
use thiserror::Error;
use tracing::Level;

pub mod report;
pub mod strategies;

pub use strategies::{strategy_by_name, StrategyConfig, STRATEGY_NAMES};

/// A simulation scenario as written in a YAML or JSON file.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rules: TableRulesConfig,
    pub bankroll: Chips,
    pub seed: Option<u64>,
    pub rolls: Option<u64>,
    pub shooters: Option<u64>,
    pub sessions: Option<SessionsConfig>,
    pub log_level: String,
    pub strategies: Vec<StrategyConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: TableRulesConfig::default(),
            bankroll: Chips::from_dollars(DEFAULT_BANKROLL),
            seed: None,
            rolls: None,
            shooters: None,
            sessions: None,
            log_level: default_log_level(),
            strategies: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionsConfig {
    pub count: u32,
    pub shooters_per_session: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path} as YAML")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("could not parse {path} as JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported scenario format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid table rules")]
    InvalidRules(#[from] RulesError),
    #[error("unknown strategy: {name} (known: {})", STRATEGY_NAMES.join(", "))]
    UnknownStrategy { name: String },
    #[error("no strategies configured")]
    NoStrategies,
    #[error("one of rolls, shooters or sessions must be set")]
    MissingBound,
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("{field} must be positive (got {value})")]
    InvalidAmount { field: &'static str, value: Chips },
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
}

/// A scenario ready to run.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub simulation: SimulationConfig,
    pub log_level: Level,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn non_zero(field: &'static str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidNonZero { field, value });
    }
    Ok(value)
}

pub(crate) fn positive(field: &'static str, value: Chips) -> Result<Chips, ConfigError> {
    if !value.is_positive() {
        return Err(ConfigError::InvalidAmount { field, value });
    }
    Ok(value)
}

pub fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    Level::from_str(value).map_err(|_| ConfigError::InvalidLogLevel {
        value: value.to_string(),
    })
}

impl Config {
    /// Load a scenario, choosing the parser by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&contents).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            }),
            Some("json") => Self::from_json(&contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn termination(&self) -> Result<Option<Termination>, ConfigError> {
        let rolls = self.rolls.map(|n| non_zero("rolls", n)).transpose()?;
        let shooters = self.shooters.map(|n| non_zero("shooters", n)).transpose()?;
        Ok(match (rolls, shooters) {
            (Some(rolls), Some(shooters)) => Some(Termination::RollsOrShooters { rolls, shooters }),
            (Some(rolls), None) => Some(Termination::Rolls(rolls)),
            (None, Some(shooters)) => Some(Termination::Shooters(shooters)),
            (None, None) => None,
        })
    }

    pub fn session_plan(&self) -> Result<Option<SessionPlan>, ConfigError> {
        let Some(sessions) = self.sessions else {
            return Ok(None);
        };
        non_zero("sessions.count", u64::from(sessions.count))?;
        non_zero("sessions.shooters_per_session", sessions.shooters_per_session)?;
        Ok(Some(SessionPlan {
            shooters_per_session: sessions.shooters_per_session,
            sessions: sessions.count,
        }))
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let rules = TableRules::try_from(self.rules.clone())?;
        let bankroll = positive("bankroll", self.bankroll)?;
        let termination = self.termination()?;
        let session_plan = self.session_plan()?;
        if termination.is_none() && session_plan.is_none() {
            return Err(ConfigError::MissingBound);
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        let strategies = self
            .strategies
            .iter()
            .map(StrategyConfig::build)
            .collect::<Result<Vec<Arc<dyn DynStrategy>>, _>>()?;
        let log_level = parse_log_level(&self.log_level)?;

        let simulation = SimulationConfig {
            strategies,
            termination,
            starting_bankroll: bankroll,
            rules,
            seed: self.seed,
            dice_sequence: None,
            session_plan,
        };
        Ok(ValidatedConfig {
            simulation,
            log_level,
        })
    }
}
