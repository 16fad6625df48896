//! Command line definition.

use std::path::PathBuf;

use calc_core::{OperandField, Operands, Operation, Theme};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "calc_cli",
    version,
    about = "Calculadora - arithmetic, square roots and quadratics in the terminal"
)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `calc_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The interactive UI owns the terminal, so logs must not go to stderr
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Tui(_)))
    }

    /// Startup choices for the interactive UI; defaults when no subcommand
    pub fn tui_args(&self) -> TuiArgs {
        match &self.command {
            Some(Command::Tui(args)) => args.clone(),
            _ => TuiArgs::default(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one operation and print the result
    Eval(EvalArgs),
    /// List the available operations and the operands each one needs
    Operations {
        #[arg(long)]
        json: bool,
    },
    /// Print the sampled curve of f(x) = a·x² + b·x + c
    Plot(PlotArgs),
    /// Interactive terminal calculator (default)
    Tui(TuiArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    #[default]
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TuiArgs {
    /// Operation selected at startup (wire tag, e.g. `raiz`)
    #[arg(long, value_name = "TAG", default_value_t = Operation::Add)]
    pub operation: Operation,

    /// Theme at startup
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Operation tag: soma, subtracao, multiplicacao, divisao, raiz,
    /// equacao2grau or funcao2grau
    pub operation: String,

    #[command(flatten)]
    pub operands: OperandArgs,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Default, Args)]
pub struct OperandArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub n1: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub n2: Option<f64>,
    #[arg(short = 'a', long = "a", allow_negative_numbers = true)]
    pub a: Option<f64>,
    #[arg(short = 'b', long = "b", allow_negative_numbers = true)]
    pub b: Option<f64>,
    #[arg(short = 'c', long = "c", allow_negative_numbers = true)]
    pub c: Option<f64>,
}

impl OperandArgs {
    pub fn to_operands(&self) -> Operands {
        let mut operands = Operands::default();
        operands.set(OperandField::N1, self.n1);
        operands.set(OperandField::N2, self.n2);
        operands.set(OperandField::A, self.a);
        operands.set(OperandField::B, self.b);
        operands.set(OperandField::C, self.c);
        operands
    }
}

#[derive(Debug, Args)]
pub struct PlotArgs {
    #[arg(short = 'a', long = "a", allow_negative_numbers = true)]
    pub a: f64,
    #[arg(short = 'b', long = "b", allow_negative_numbers = true)]
    pub b: f64,
    #[arg(short = 'c', long = "c", allow_negative_numbers = true)]
    pub c: f64,

    /// Number of samples
    #[arg(long, default_value_t = calc_core::plot::DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    #[arg(long, default_value_t = calc_core::plot::DEFAULT_X_RANGE.0, allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value_t = calc_core::plot::DEFAULT_X_RANGE.1, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Print `x,y` lines instead of JSON
    #[arg(long)]
    pub csv: bool,
}
