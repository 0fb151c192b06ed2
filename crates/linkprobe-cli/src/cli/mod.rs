//! CLI for the linkprobe external link checker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkprobe_core::config;
use std::path::PathBuf;

use commands::{run_check, run_classify, run_normalize};

/// Top-level CLI for linkprobe.
#[derive(Debug, Parser)]
#[command(name = "linkprobe")]
#[command(about = "linkprobe: check whether external links are reachable", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/linkprobe/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check one or more URLs (duplicates are probed once).
    Check {
        /// HTTP/HTTPS URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print one JSON object per URL instead of text.
        #[arg(long)]
        json: bool,
        /// Label recorded in the log for where these URLs came from.
        #[arg(long, value_name = "LABEL")]
        source: Option<String>,
    },

    /// Tell whether a piece of text carries an external (http/https) link.
    Classify {
        /// Text token as extracted from content.
        text: String,
    },

    /// Print the ASCII-compatible (punycode) form of a URL.
    Normalize {
        url: String,
    },
}

impl CliCommand {
    /// Parse arguments and run. `Ok(false)` means at least one link was broken
    /// (or a URL could not be normalized).
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check { urls, json, source } => {
                let cfg = match cli.config.as_deref() {
                    Some(path) => config::load_from(path)?,
                    None => config::load_or_init()?,
                };
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(&cfg, urls, json, source).await
            }
            CliCommand::Classify { text } => Ok(run_classify(&text)),
            CliCommand::Normalize { url } => Ok(run_normalize(&url)),
        }
    }
}

#[cfg(test)]
mod tests;
