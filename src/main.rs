use clap::Parser;
use cuotas::cli::{Cli, Commands};
use cuotas::config::Config;
use cuotas::pricing::LoanPricer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    cuotas::telemetry::init_telemetry(&config.telemetry)?;

    let pricer = LoanPricer::from_config(&config.pricing);

    match cli.command {
        Commands::Quote(args) => args.execute(&pricer)?,
        Commands::Payload(args) => args.execute(&pricer)?,
        Commands::Rate(args) => args.execute(&pricer)?,
        Commands::Config => {
            println!("Current configuration:");
            println!("  Base rate: {}%", config.pricing.base_rate_pct);
            println!("  Privileged role: {}", config.pricing.privileged_role);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
