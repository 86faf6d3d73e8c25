//! envoyc entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse arguments** — select the configuration source (`--domain`,
//!    `--yaml-file`, or a `--config` TOML settings file) and overrides.
//! 2. **Wire observability** — configure `tracing-subscriber` with an
//!    `EnvFilter` and an optional JSON layer. All `tracing` events emitted by
//!    the workspace crates flow through it.
//! 3. **Build the client** — through [`client::ClientBuilder`], optionally
//!    starting its engine with `--start`.
//! 4. **Report** — print the resolved configuration as JSON on stdout.

mod args;
mod logging;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::args::Cli;

fn run(cli: &Cli) -> Result<()> {
    let builder = cli.builder()?;
    logging::init(builder.current_log_level(), cli.json)?;

    let client = builder.build().context("failed to build client")?;
    info!(client_id = %client.id(), engine = client.engine().name(), "Client ready");
    if cli.start {
        client.start().context("failed to start client")?;
    }

    println!("{}", report::render(&client, cli.start)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
