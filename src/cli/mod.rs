//! CLI interface for basket-fees
//!
//! Provides subcommands for:
//! - `quote`: Price a single deposit or redemption
//! - `sweep`: Print the fee curve across the valid deviation range
//! - `config`: Show loaded configuration

mod quote;
mod sweep;

pub use quote::QuoteArgs;
pub use sweep::SweepArgs;

use clap::{Parser, Subcommand, ValueEnum};

use crate::fees::TransactionMode;

#[derive(Parser, Debug)]
#[command(name = "basket-fees")]
#[command(about = "Deterministic fee-curve engine for token-basket deposits and redemptions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a single deposit or redemption
    Quote(QuoteArgs),
    /// Print the fee curve across the valid deviation range
    Sweep(SweepArgs),
    /// Show loaded configuration
    Config,
}

/// Transaction direction as a CLI flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Deposit,
    Redemption,
}

impl From<ModeArg> for TransactionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Deposit => TransactionMode::Deposit,
            ModeArg::Redemption => TransactionMode::Redemption,
        }
    }
}
