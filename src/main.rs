//! TradeNexus - static site generator for an energy-analytics marketing site.

mod cli;
mod config;
mod content;
mod embed;
mod generator;
mod logger;
mod render;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site, load_store};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    let store = load_store(&config)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&store, &config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve(store, config),
        Commands::Query { args } => {
            cli::query::run_query(args, &store, config.build.related_limit)
        }
        Commands::Paths => {
            cli::paths::run_paths(&store);
            Ok(())
        }
    }
}
