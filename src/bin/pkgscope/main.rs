//! pkgscope CLI - find the nearest package.json and summarize it

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use pkgscope::ops::report::{inspect, not_found_line, Outcome};
use pkgscope::util::config::{config_path, Config};
use pkgscope::util::shell::{ColorChoice, Shell, Status};
use pkgscope::util::style::Role;
use pkgscope::util::DisplaySettings;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("pkgscope=debug")
    } else {
        EnvFilter::new("pkgscope=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = match config_path() {
        Some(path) => Config::load_or_default(&path)?,
        None => Config::default(),
    };

    // CLI flag wins over config
    let color = cli
        .color
        .or(config.display.color)
        .unwrap_or(ColorChoice::Auto);
    let shell = Shell::from_flags(cli.quiet, color);

    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let outcome = inspect(&cwd, |dir| shell.status(Status::Searching, dir.display()))?;

    match &outcome {
        Outcome::Inspected(inspection) => {
            let manifest_path = shell.status_style().paint(
                &inspection.project.manifest_path().display().to_string(),
                Role::Path,
            );
            match (inspection.manifest.name(), inspection.manifest.version()) {
                (Some(name), Some(version)) => shell.status(
                    Status::Found,
                    format!("{} v{} ({})", name, version, manifest_path),
                ),
                (Some(name), None) => {
                    shell.status(Status::Found, format!("{} ({})", name, manifest_path))
                }
                _ => shell.status(Status::Found, manifest_path),
            }

            let display = DisplaySettings::detect(&config.display);
            for line in inspection.render(&display, shell.style()) {
                shell.line(line);
            }
        }
        Outcome::NotFound { start } => {
            tracing::debug!("no manifest above {}", start.display());
            shell.line(not_found_line(shell.style()));
        }
    }
    Ok(outcome.exit_code())
}
