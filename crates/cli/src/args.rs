//! Command-line arguments.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use client::{ClientBuilder, ClientSettings, LogLevel};

/// Builds a client from a domain, a YAML document, or a settings file and
/// prints the configuration it resolved to.
#[derive(Debug, Parser)]
#[command(name = "envoyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build a client configuration and optionally start its engine")]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Log level handed to the engine (trace, debug, info, warn, error, critical, off)
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Timeout for new network connections, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub connect_timeout: Option<u32>,

    /// DNS refresh rate, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub dns_refresh: Option<u32>,

    /// Stats flush interval, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub stats_flush: Option<u32>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Start the engine after building the client
    #[arg(long)]
    pub start: bool,
}

/// Exactly one configuration source.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Domain to connect to (e.g. api.foo.com)
    #[arg(long)]
    pub domain: Option<String>,

    /// File holding a complete YAML configuration
    #[arg(long, value_name = "PATH")]
    pub yaml_file: Option<PathBuf>,

    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Assembles a builder from the selected source, then applies any
    /// command-line overrides on top.
    pub fn builder(&self) -> Result<ClientBuilder> {
        let mut builder = if let Some(domain) = &self.source.domain {
            ClientBuilder::with_domain(domain.clone())
        } else if let Some(path) = &self.source.yaml_file {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("failed to read YAML file {}", path.display()))?;
            ClientBuilder::with_yaml(yaml)
        } else if let Some(path) = &self.source.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            let settings = ClientSettings::from_toml_str(&text)
                .with_context(|| format!("invalid settings file {}", path.display()))?;
            ClientBuilder::from_settings(&settings)?
        } else {
            anyhow::bail!("one of --domain, --yaml-file or --config is required");
        };

        if let Some(level) = self.log_level {
            builder = builder.log_level(level);
        }
        if let Some(seconds) = self.connect_timeout {
            builder = builder.connect_timeout_seconds(seconds);
        }
        if let Some(seconds) = self.dns_refresh {
            builder = builder.dns_refresh_seconds(seconds);
        }
        if let Some(seconds) = self.stats_flush {
            builder = builder.stats_flush_seconds(seconds);
        }
        Ok(builder)
    }
}
