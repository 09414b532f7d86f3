//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ipatlas=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format: flag, then config file, then pretty
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Geolocation endpoint override: flag/env, then config file
    let geo_endpoint = cli.geo_endpoint.or_else(|| config.geo_endpoint.clone());

    // Create context for commands
    let ctx = commands::Context {
        output_format,
        explain: cli.explain,
        verbose: cli.verbose,
        no_color: cli.no_color,
        geo_endpoint,
        show_map: config.show_map,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Lookup(args) => commands::lookup::execute(ctx, args).await,
        Commands::Shell => commands::shell::execute(ctx).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}
