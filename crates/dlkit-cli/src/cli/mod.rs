//! CLI for the dlkit download file utilities.

mod commands;
mod record;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dlkit_core::checksum::Algorithm;
use dlkit_core::config::{self, DlkitConfig};
use dlkit_core::state_store::StateStore;
use std::path::PathBuf;

use commands::{
    run_checksum, run_classify, run_forget, run_format, run_list, run_record, run_show,
    run_verify, RecordRequest,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dlkit")]
#[command(about = "dlkit: checksums, saved task state and file classification for downloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the checksum of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Hash algorithm (MD5, SHA-1, SHA-224, SHA-256, SHA-384, SHA-512). Defaults to the config value.
        #[arg(long, short)]
        algorithm: Option<String>,
        /// Expected digest in hex; exit non-zero on mismatch.
        #[arg(long, value_name = "HEX")]
        expect: Option<String>,
    },

    /// Classify a filename or URL as video, audio, subtitle or unknown.
    Classify {
        /// Filename, path or URL.
        name: String,
        /// Type hint: v (video), a (audio), s (subtitle); anything else infers from the extension.
        #[arg(long, default_value_t = '?')]
        hint: char,
    },

    /// Format a byte count (or with --speed, a bytes/second rate) for display.
    Format {
        /// Byte count, or bytes per second with --speed.
        value: String,
        #[arg(long)]
        speed: bool,
    },

    /// Checksum and classify a completed download and save it as a task record.
    Record {
        /// Path to the downloaded file.
        path: PathBuf,
        /// Record name (defaults to the file name).
        #[arg(long)]
        name: Option<String>,
        /// Source URL, kept for display and classification.
        #[arg(long)]
        url: Option<String>,
        /// Type hint: v, a or s.
        #[arg(long, default_value_t = '?')]
        hint: char,
        /// Hash algorithm. Defaults to the config value.
        #[arg(long, short)]
        algorithm: Option<String>,
    },

    /// Show a saved task record.
    Show {
        /// Record name.
        name: String,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Recompute a recorded file's checksum and compare it with the saved one.
    Verify {
        /// Record name.
        name: String,
    },

    /// Delete a saved task record (the downloaded file is left alone).
    Forget {
        /// Record name.
        name: String,
    },

    /// List saved task records.
    List,
}

/// Algorithm named on the command line, else the configured default.
fn resolve_algorithm(arg: Option<&str>, cfg: &DlkitConfig) -> Result<Algorithm> {
    match arg {
        Some(name) => Ok(name.parse::<Algorithm>()?),
        None => cfg.checksum.algorithm(),
    }
}

fn open_store(cfg: &DlkitConfig) -> Result<StateStore> {
    match &cfg.state_dir {
        Some(dir) => StateStore::open(dir)
            .with_context(|| format!("open state dir {}", dir.display())),
        None => StateStore::open_default(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let buf_size = cfg.checksum.buffer_bytes();

        match cli.command {
            CliCommand::Checksum {
                path,
                algorithm,
                expect,
            } => {
                let alg = resolve_algorithm(algorithm.as_deref(), &cfg)?;
                run_checksum(&path, alg, buf_size, expect.as_deref()).await?;
            }
            CliCommand::Classify { name, hint } => run_classify(&name, hint),
            CliCommand::Format { value, speed } => run_format(&value, speed)?,
            CliCommand::Record {
                path,
                name,
                url,
                hint,
                algorithm,
            } => {
                let store = open_store(&cfg)?;
                let req = RecordRequest {
                    path,
                    name,
                    url,
                    hint,
                    algorithm: resolve_algorithm(algorithm.as_deref(), &cfg)?,
                    buf_size,
                };
                run_record(&store, req).await?;
            }
            CliCommand::Show { name, json } => run_show(&open_store(&cfg)?, &name, json)?,
            CliCommand::Verify { name } => run_verify(&open_store(&cfg)?, &name, buf_size).await?,
            CliCommand::Forget { name } => run_forget(&open_store(&cfg)?, &name)?,
            CliCommand::List => run_list(&open_store(&cfg)?)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
