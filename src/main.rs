//! stacklink CLI entry point

use clap::Parser;
use stacklink::cli::{Cli, Commands};
use stacklink::core::config::Config;
use stacklink::core::error::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Root and table settings may come from a local .env
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("STACKLINK_LOG"))
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Designs(args) => stacklink::cli::designs::run(args, &config).map(|_| ()),
        Commands::Measurements(args) => {
            stacklink::cli::measurements::run(args, &config, None).map(|_| ())
        }
        Commands::Link(args) => stacklink::cli::link::run(args, &config).map(|_| ()),
        Commands::Run => stacklink::cli::run::run(&config),
    }
}
