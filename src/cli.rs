//! CLI definition and dispatch.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_rate_store::CsvRateStore;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::fixed_price_adapter::FixedPriceAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::validate_simulation_config;
use crate::domain::currency::{Currency, ExchangeRates};
use crate::domain::error::FarmError;
use crate::domain::farm::{Farm, FarmParams};
use crate::domain::holdings::{parse_holdings, parse_purchase};
use crate::domain::simulation::run_strategy;
use crate::domain::strategy::Strategy;
use crate::ports::config_port::ConfigPort;
use crate::ports::price_port::PricePort;
use crate::ports::rate_store_port::RateStorePort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "zoonfarm", about = "Compounding-yield projection for zoan farming")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a projection
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Display currency; falls back to [report] currency, then USD
        #[arg(long)]
        currency: Option<Currency>,
        /// Override the configured horizon
        #[arg(long)]
        days: Option<u32>,
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
    /// Validate a simulation configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Inspect or extend the historical capacity store
    Capacity {
        #[command(subcommand)]
        command: CapacityCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CapacityCommand {
    /// Print the most recent capacity reading
    Latest {
        #[arg(short, long)]
        store: PathBuf,
    },
    /// Print the average daily capacity change across the history
    Growth {
        #[arg(short, long)]
        store: PathBuf,
    },
    /// Append a capacity reading
    Record {
        #[arg(short, long)]
        store: PathBuf,
        #[arg(short, long)]
        value: u64,
        /// Defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ReportFormat {
    Text,
    Csv,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            output,
            currency,
            days,
            format,
        } => run_simulate(&config, output.as_ref(), currency, days, format),
        Command::Validate { config } => run_validate(&config),
        Command::Capacity { command } => run_capacity(command),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, FarmError> {
    FileConfigAdapter::from_file(path).map_err(|e| FarmError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Build the seeded ledger from a validated config. The unit price goes
/// through the price port so a different source can slot in later.
pub fn build_farm(config: &dyn ConfigPort) -> Result<Farm, FarmError> {
    let holdings = config
        .get_string("holdings", "zoans")
        .ok_or_else(|| FarmError::ConfigMissing {
            section: "holdings".to_string(),
            key: "zoans".to_string(),
        })?;
    let zoans = parse_holdings(&holdings)?;

    let price_port = FixedPriceAdapter::new(config.get_double("market", "zoon_usd", 0.0));
    let symbol = config
        .get_string("market", "symbol")
        .unwrap_or_else(|| "ZOON".to_string());
    let price_of_unit = price_port.unit_price(&symbol)?;

    Ok(Farm::new(
        zoans,
        FarmParams {
            external_capacity: config.get_double("simulation", "external_capacity", 0.0),
            price_of_unit,
            pool_daily_reward: config.get_double("simulation", "pool_daily_reward", 0.0),
            starting_balance: config.get_double("simulation", "starting_balance", 0.0),
        },
    ))
}

/// Build the strategy from a validated config, zeros meaning "off" for the
/// optional knobs.
pub fn build_strategy(
    config: &dyn ConfigPort,
    days_override: Option<u32>,
) -> Result<Strategy, FarmError> {
    let days = match days_override {
        Some(days) => days,
        // Out-of-range values collapse to 0 and fail strategy validation.
        None => u32::try_from(config.get_int("simulation", "days", 0)).unwrap_or(0),
    };

    let purchase = match config.get_string("strategy", "purchase") {
        Some(spec) => Some(parse_purchase(&spec)?),
        None => None,
    };

    let payout_ratio = positive(config.get_double("strategy", "payout_ratio", 0.0));
    let price_decay_ratio = positive(config.get_double("market", "price_decay_ratio", 0.0));
    let capacity_growth = positive(config.get_double("simulation", "capacity_growth", 0.0));

    let strategy = Strategy {
        days,
        purchase,
        purchase_interval: u32::try_from(config.get_int("strategy", "purchase_interval", 1))
            .unwrap_or(0),
        payout_ratio,
        price_decay_ratio,
        capacity_growth,
    };
    strategy.validate()?;
    Ok(strategy)
}

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

fn resolve_currency(
    config: &dyn ConfigPort,
    override_arg: Option<Currency>,
) -> Result<Currency, FarmError> {
    if let Some(currency) = override_arg {
        return Ok(currency);
    }
    match config.get_string("report", "currency") {
        Some(s) => s.parse().map_err(|reason| FarmError::ConfigInvalid {
            section: "report".to_string(),
            key: "currency".to_string(),
            reason,
        }),
        None => Ok(Currency::Usd),
    }
}

fn run_simulate(
    config_path: &PathBuf,
    output_path: Option<&PathBuf>,
    currency_arg: Option<Currency>,
    days_override: Option<u32>,
    format: ReportFormat,
) -> ExitCode {
    match simulate(config_path, output_path, currency_arg, days_override, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn simulate(
    config_path: &PathBuf,
    output_path: Option<&PathBuf>,
    currency_arg: Option<Currency>,
    days_override: Option<u32>,
    format: ReportFormat,
) -> Result<(), FarmError> {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = load_config(config_path)?;
    validate_simulation_config(&adapter)?;

    let currency = resolve_currency(&adapter, currency_arg)?;
    let mut farm = build_farm(&adapter)?;
    let strategy = build_strategy(&adapter, days_override)?;

    eprintln!(
        "Projecting {} days over {} seeded zoans...",
        strategy.days,
        farm.zoan_count()
    );
    let report = run_strategy(&mut farm, &strategy)?;

    let renderer: Box<dyn ReportPort> = match format {
        ReportFormat::Text => Box::new(TextReportAdapter),
        ReportFormat::Csv => Box::new(CsvReportAdapter),
    };
    let rates = ExchangeRates::default();

    match output_path {
        Some(path) => {
            let mut file = File::create(path)?;
            renderer.write(&report, currency, &rates, &mut file)?;
            file.flush()?;
            eprintln!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            renderer.write(&report, currency, &rates, &mut handle)?;
        }
    }
    Ok(())
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    match validate_simulation_config(&adapter) {
        Ok(()) => {
            println!("{} is valid", config_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_capacity(command: CapacityCommand) -> ExitCode {
    match capacity(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn capacity(command: CapacityCommand) -> Result<(), FarmError> {
    match command {
        CapacityCommand::Latest { store } => {
            let store = CsvRateStore::open(&store)?;
            println!("{}", store.latest()?);
        }
        CapacityCommand::Growth { store } => {
            let store = CsvRateStore::open(&store)?;
            println!("{}", store.average_daily_change()?);
        }
        CapacityCommand::Record { store, value, date } => {
            let mut store = CsvRateStore::open(&store)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            store.append(value, date)?;
            println!("recorded {value} for {date}");
        }
    }
    Ok(())
}
