//! Spritesheets CLI - pack rendered animation frames into spritesheets
//!
//! This binary provides commands for packing, splitting, blending and
//! inspecting animation frames, and for running whole manifests.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli_args;

use cli_args::{Cli, Commands};
// Use modules from the library crate
use spritesheets_cli::commands;

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Pack { sheet } => commands::pack::run(
            &sheet.source,
            &sheet.name,
            &sheet.out,
            &sheet.sheet_options(),
        ),
        Commands::PackEightway {
            sheet,
            frames_per_direction,
            max_height,
        } => commands::pack_eightway::run(
            &sheet.source,
            &sheet.name,
            &sheet.out,
            &sheet.eightway_options(frames_per_direction, max_height),
        ),
        Commands::Bounds {
            source,
            name,
            cutoff,
            json,
        } => commands::bounds::run(&source, &name, cutoff, json),
        Commands::Blend {
            source,
            first,
            second,
            out,
            start,
            crossover,
            length,
        } => commands::blend::run(&source, &first, &second, &out, start, crossover, length),
        Commands::Unused {
            source,
            name,
            used,
            move_to,
        } => commands::unused::run(&source, &name, used, move_to.as_deref()),
        Commands::Batch { manifest, json } => commands::batch::run(&manifest, json),
        Commands::Validate { manifest, json } => commands::validate::run(&manifest, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
