use anyhow::Context;
use clap::{Parser, Subcommand};
use crapsim_execution::{run_sessions, StrategyRunner};
use crapsim_simulator::{
    parse_log_level,
    report::{self, Format},
    Config, SessionsConfig, StrategyConfig,
};
use crapsim_types::{Chips, DEFAULT_BANKROLL, DEFAULT_SEQUENCE_LENGTH};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare craps betting strategies on identical dice.", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Maximum log level; overrides the scenario file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a YAML or JSON scenario file
    Run {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Compare strategies over one shared dice sequence
    Compare(Scenario),
    /// Run many fixed-length sessions and summarize them
    Sessions {
        #[command(flatten)]
        scenario: Scenario,

        /// Number of sessions
        #[arg(long, default_value_t = 100)]
        count: u32,

        /// Shooters in each session
        #[arg(long, default_value_t = 10)]
        shooters_per_session: u64,
    },
}

#[derive(clap::Args, Debug)]
struct Scenario {
    /// Built-in strategy to run (repeatable)
    #[arg(short, long = "strategy", required = true)]
    strategies: Vec<String>,

    #[arg(long)]
    rolls: Option<u64>,

    #[arg(long)]
    shooters: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Starting bankroll in dollars
    #[arg(long, default_value_t = DEFAULT_BANKROLL as f64)]
    bankroll: f64,
}

impl Scenario {
    fn into_config(self, sessions: Option<SessionsConfig>) -> anyhow::Result<Config> {
        let strategies = self
            .strategies
            .iter()
            .map(|name| StrategyConfig::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        let rolls = match (self.rolls, self.shooters, sessions) {
            (None, None, None) => Some(DEFAULT_SEQUENCE_LENGTH),
            _ => self.rolls,
        };
        Ok(Config {
            bankroll: Chips::from(self.bankroll),
            seed: self.seed,
            rolls,
            shooters: self.shooters,
            sessions,
            strategies,
            ..Config::default()
        })
    }
}

fn init_logging(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load scenario
    let config = match args.command {
        Command::Run { config } => Config::load(&config)
            .with_context(|| format!("failed to load scenario {}", config.display()))?,
        Command::Compare(scenario) => scenario.into_config(None)?,
        Command::Sessions {
            scenario,
            count,
            shooters_per_session,
        } => scenario.into_config(Some(SessionsConfig {
            count,
            shooters_per_session,
        }))?,
    };
    let mut validated = config.validate().context("invalid scenario")?;
    if let Some(level) = &args.log_level {
        validated.log_level = parse_log_level(level)?;
    }

    // Create logger
    init_logging(validated.log_level, args.json_logs);
    info!(config = ?validated.simulation, "scenario loaded");

    // Run and report
    let mut stdout = io::stdout().lock();
    let session_plan = validated.simulation.session_plan;
    match session_plan {
        Some(plan) => {
            let results = run_sessions(&validated.simulation, plan)?;
            match args.format {
                Format::Text => report::write_sessions(&mut stdout, &results)?,
                Format::Json => writeln!(stdout, "{}", report::to_json(&results)?)?,
            }
        }
        None => {
            let results = StrategyRunner::new(validated.simulation).run()?;
            match args.format {
                Format::Text => {
                    report::write_comparison(&mut stdout, &results)?;
                    if let Some(first) = results.first() {
                        writeln!(stdout)?;
                        report::write_distribution(&mut stdout, first)?;
                    }
                }
                Format::Json => writeln!(stdout, "{}", report::to_json(&results)?)?,
            }
        }
    }
    stdout.flush().context("failed to write report")?;

    Ok(())
}
