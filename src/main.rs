use clap::Parser;

use basket_fees::cli::{Cli, Commands};
use basket_fees::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = basket_fees::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Quote(args) => {
            tracing::info!(token = %args.token, "Quoting transaction");
            args.execute(&config)?;
        }
        Commands::Sweep(args) => {
            tracing::info!(token = %args.token, "Sweeping fee curve");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Fees: scaling={}, deposit={}, redemption={}, minimum={}",
                config.fees.scaling_factor,
                config.fees.deposit_fee,
                config.fees.redemption_fee,
                config.fees.minimum_fee
            );
            for token in &config.tokens {
                println!("  Token: {} target={}", token.symbol, token.target);
            }
        }
    }

    Ok(())
}
