//! Append Callback CLI Application
//!
//! This is the command-line interface for the append-callback library.
//! It builds a sequence, appends a literal to it and lets a named callback
//! report what it observes. On top of the library it adds:
//! - Configuration files (config.toml)
//! - Named callbacks (print, json, log, silent)
//! - Console and JSON rendering

use anyhow::{Context, Result};
use append_callback::{Appender, Sequence, Value};
use clap::Parser;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

mod callbacks;
mod config;
mod report;

use config::AppConfig;
use report::OutputFormat;

/// Append Callback - append a literal to a sequence, then run a callback
#[derive(Parser, Debug)]
#[command(name = "append-callback-cli")]
#[command(about = "Append a literal to a sequence, then invoke a callback", long_about = None)]
#[command(version)]
struct Args {
    /// Initial sequence values (default: Juan Karla Ricardo Pedro)
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    /// Literal to append (numbers and true/false are typed, anything else is text)
    #[arg(short, long, value_name = "VALUE")]
    literal: Option<String>,

    /// Callback to invoke after appending (print, json, log, silent)
    #[arg(long, value_name = "NAME")]
    callback: Option<String>,

    /// Number of times to append and invoke the callback
    #[arg(short, long, value_name = "COUNT")]
    repeat: Option<usize>,

    /// Output format used by the print and log callbacks
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::debug!("Append Callback CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using library v{}", append_callback::VERSION);

    let config = resolve_config(&args)?;
    run(&config)
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if !args.values.is_empty() {
        config.sequence.values = args.values.iter().map(|v| Value::parse_literal(v)).collect();
    }
    if let Some(literal) = &args.literal {
        config.append.literal = Value::parse_literal(literal);
    }
    if let Some(name) = &args.callback {
        config.callback.name = name.clone();
    }
    if let Some(repeat) = args.repeat {
        config.callback.repeat = repeat;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    config.append.validate().context("Invalid [append] configuration")?;

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Append the configured literal `repeat` times, invoking the callback after each
fn run(config: &AppConfig) -> Result<()> {
    let appender = Appender::new(config.append.clone());
    let shared = Sequence::from(config.sequence.values.clone()).into_shared();
    let stdout = Rc::new(RefCell::new(io::stdout()));
    let name = &config.callback.name;

    if config.callback.repeat == 0 {
        log::warn!("Repeat count is 0, sequence left untouched");
    }

    for round in 1..=config.callback.repeat {
        log::debug!("Round {}/{}", round, config.callback.repeat);

        let callback = callbacks::resolve(name, &shared, config.output.format, &stdout);
        appender
            .try_append_then_call(&shared, callback)
            .with_context(|| format!("Cannot invoke callback '{}'", name))?;
    }

    log::info!("Final sequence length: {}", shared.borrow().len());
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
