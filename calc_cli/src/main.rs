//! # Calculadora CLI Application
//!
//! Terminal front end for `calc_core`:
//!
//! - `calc_cli eval soma --n1 2 --n2 3` - one-shot evaluation
//! - `calc_cli operations` - list operations and their operands
//! - `calc_cli plot -a 1 -b 0 -c -4 --csv` - sampled curve of a quadratic
//! - `calc_cli` / `calc_cli tui` - interactive calculator built with Ratatui

mod app;
mod cli;
mod commands;
mod terminal;
mod ui;

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{Cli, Command};

/// Default filter when neither --log-level nor RUST_LOG is set
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("parsing --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else if cli.is_interactive() {
        // The UI owns the terminal; without a log file, logs are dropped
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match &cli.command {
        Some(Command::Eval(args)) => println!("{}", commands::run_eval(args)?),
        Some(Command::Operations { json }) => println!("{}", commands::render_operations(*json)?),
        Some(Command::Plot(args)) => println!("{}", commands::render_plot(args)?),
        Some(Command::Tui(_)) | None => {
            let args = cli.tui_args();
            terminal::run(App::new(args.operation, args.theme.into()))?;
        }
    }

    Ok(())
}
