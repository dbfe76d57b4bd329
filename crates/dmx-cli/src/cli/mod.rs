//! CLI for the DMX download-record helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dmx_core::config;
use std::path::PathBuf;

use commands::{run_basename, run_browser, run_enrich, run_messages};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dmx")]
#[command(about = "DMX: download record enrichment and extension helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the display name derived from a path.
    Basename {
        /// Full path as reported by the browser (POSIX or Windows separators).
        path: String,
    },

    /// Enrich one download record and print every observed change.
    Enrich {
        /// Download identifier.
        id: i64,
        /// Full path of the downloaded file.
        filename: String,
        /// Icon already known for the record; skips the lookup when non-empty.
        #[arg(long, value_name = "REF")]
        icon: Option<String>,
    },

    /// Inspect a browser user-agent string.
    Browser {
        /// User-agent string.
        user_agent: String,
        /// Also check the major version against this threshold.
        #[arg(long, value_name = "N")]
        min_major: Option<u32>,
    },

    /// Print the UI string table built from a messages.json catalog.
    Messages {
        /// Catalog path; defaults to `messages_path` from the config file.
        path: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Basename { path } => run_basename(&path),
            CliCommand::Enrich { id, filename, icon } => {
                run_enrich(&cfg, id, &filename, icon.as_deref()).await?
            }
            CliCommand::Browser {
                user_agent,
                min_major,
            } => run_browser(&user_agent, min_major),
            CliCommand::Messages { path } => run_messages(&cfg, path.as_deref())?,
        }

        Ok(())
    }
}
