mod api;
mod cli;
mod config;
mod errors;
mod llm;
mod quiz;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Check => handle_check().await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::RelayError::Config(_) => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_check() -> Result<(), errors::RelayError> {
    let config = config::RelayConfig::from_env()?;
    println!("Configuration is valid: upstream {}", config.base_url);
    Ok(())
}
