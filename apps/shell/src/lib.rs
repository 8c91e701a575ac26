//! # MShop Shell
//!
//! Command line front end for the order product attribute item.
//!
//! * `mshop normalize <file>` imports order product attribute records and prints them in
//!   their canonical exported form.
//! * `mshop copy <file>` builds order product attributes from catalog attribute records.
//!
//! Input files hold a JSON object or an array of objects; `-` reads from `stdin`.
//! The output mirrors the input shape.

mod commands;
mod records;

pub use crate::commands::{CopyOptions, copy, normalize};
pub use crate::records::Records;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mshop::domain::config::ShellConfig;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command line arguments of the `mshop` binary.
#[derive(Debug, Parser)]
#[command(name = "mshop", version, about = "Normalize and build order product attribute records")]
pub struct Cli {
    /// Configuration file. Without it, `./mshop.{toml,json,yaml}` is used when present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import order product attribute records and print them in canonical form.
    Normalize {
        /// JSON file with one record or an array of records (`-` for stdin).
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Build order product attributes from catalog attribute records.
    Copy {
        /// JSON file with one catalog attribute or an array of them (`-` for stdin).
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Id of the ordered product the attributes belong to.
        #[arg(long, value_name = "ID")]
        parent: Option<String>,

        /// Quantity of every built attribute.
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        quantity: Option<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output switches shared by all commands. They extend the `[export]` config section.
#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Accept and emit private fields (ids, site, timestamps).
    #[arg(long)]
    pub private: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Executes the parsed command and writes the result to `out`.
///
/// # Errors
/// Fails if the input cannot be read or parsed, if a record is rejected by the item
/// validation, or if writing the output fails.
pub fn run(cli: &Cli, cfg: &ShellConfig, out: &mut impl Write) -> Result<()> {
    let (file, output) = match &cli.command {
        Command::Normalize { file, output } | Command::Copy { file, output, .. } => {
            (file, output)
        },
    };
    let private = output.private || cfg.export.private;
    let pretty = output.pretty || cfg.export.pretty;

    let records = Records::parse(&read_input(file)?)?;
    let count = records.len();

    let exported = match &cli.command {
        Command::Normalize { .. } => {
            records.try_map(|index, record| normalize(record, index, private))?
        },
        Command::Copy { parent, quantity, .. } => {
            let options = CopyOptions { parent: parent.clone(), quantity: *quantity };
            records.try_map(|index, record| copy(record, index, &options, private))?
        },
    };

    let value = exported.into_value();
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &value)?;
    } else {
        serde_json::to_writer(&mut *out, &value)?;
    }
    writeln!(out)?;

    info!(records = count, private, "Records written");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;
        return Ok(input);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
