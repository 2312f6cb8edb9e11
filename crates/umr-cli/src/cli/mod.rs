//! CLI for the umr mirror resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use umr_core::config;
use umr_core::MirrorSet;

use commands::{run_config_path, run_explain, run_mirrors, run_resolve};

/// Top-level CLI for umr.
#[derive(Debug, Parser)]
#[command(name = "umr")]
#[command(about = "umr: list candidate mirror URLs for update metadata and targets", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/umr/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON mirrors document to use instead of the configured mirrors.
    #[arg(long, global = true, value_name = "FILE")]
    pub mirrors: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print candidate URLs for an artifact, one per line, in mirror order.
    Resolve {
        /// Artifact kind: "meta" or "target".
        kind: String,
        /// Path of the artifact relative to the mirror's metadata or targets directory.
        path: String,
    },

    /// Show every mirror's decision for an artifact, including confined ones.
    Explain {
        /// Artifact kind: "meta" or "target".
        kind: String,
        /// Path of the artifact relative to the mirror's metadata or targets directory.
        path: String,
    },

    /// List configured mirrors in resolution order.
    Mirrors,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::ConfigPath => run_config_path(),
            CliCommand::Resolve { kind, path } => {
                let mirrors = cli.load_mirrors()?;
                run_resolve(&mirrors, kind, path)
            }
            CliCommand::Explain { kind, path } => {
                let mirrors = cli.load_mirrors()?;
                run_explain(&mirrors, kind, path)
            }
            CliCommand::Mirrors => {
                let mirrors = cli.load_mirrors()?;
                run_mirrors(&mirrors)
            }
        }
    }

    /// `--mirrors` wins outright; otherwise the (explicit or default) config file.
    fn load_mirrors(&self) -> Result<MirrorSet> {
        if let Some(path) = &self.mirrors {
            return config::load_mirrors_json(path);
        }
        let (cfg, path) = match &self.config {
            Some(path) => (config::load_from_path(path)?, path.clone()),
            None => (config::load_or_init()?, config::config_path()?),
        };
        tracing::debug!("loaded config: {:?}", cfg);
        cfg.effective_mirrors(path.parent())
    }
}

#[cfg(test)]
mod tests;
