// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `canon`: print canonical encodings and digests of typed values, and sort
//! values by an explicit ordering.

mod config_fs;
mod value;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use canon_collect::ExplicitOrdering;
use canon_hash::funnels::SequentialFunnel;
use canon_hash::{ByteSink, HashFunction, Hasher, PrimitiveSink};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::value::{Value, ValueFunnel};

#[derive(Parser, Debug)]
#[command(author, version, about = "Canonical encodings, digests and explicit rankings")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Directory holding hash.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical byte stream of VALUES as hex
    Encode {
        /// Typed values such as i32:7 or str@utf16-le:abc. Kinds: bool, i16,
        /// char, i32, i64, f32, f64, hex, chars, str, str@<charset>
        #[arg(required = true)]
        values: Vec<Value>,
    },
    /// Print the digest of VALUES under the configured hash settings
    Digest {
        /// Override the configured digest length in bytes
        #[arg(long)]
        output_len: Option<usize>,
        /// Typed values, as for `encode`
        #[arg(required = true)]
        values: Vec<Value>,
    },
    /// Sort VALUES by their position in --order
    Rank {
        /// Values in ascending order, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        order: Vec<String>,
        /// Sort descending
        #[arg(long)]
        reverse: bool,
        /// Values to sort; each must appear in --order
        values: Vec<String>,
    },
    /// Print the hash settings in effect as JSON
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Encode { values } => {
            let mut sink = ByteSink::new();
            sink.put_object(values.as_slice(), &SequentialFunnel(ValueFunnel));
            debug!(values = values.len(), bytes = sink.len(), "encoded");
            writeln!(out, "{}", hex::encode(sink.as_bytes()))?;
        }
        Command::Digest { output_len, values } => {
            let mut settings = config_fs::load_hash_config(cli.config_dir.as_deref());
            if let Some(len) = output_len {
                settings.output_len = len;
            }
            let function = settings.build().context("invalid hash settings")?;
            let mut hasher = function.new_hasher();
            hasher.put_object(values.as_slice(), &SequentialFunnel(ValueFunnel));
            let code = hasher.hash();
            debug!(bits = code.bits(), "digest computed");
            writeln!(out, "{code}")?;
        }
        Command::Rank {
            order,
            reverse,
            mut values,
        } => {
            let ordering = ExplicitOrdering::new(order);
            let sorted = if reverse {
                ordering.reverse().sort(&mut values)
            } else {
                ordering.sort(&mut values)
            };
            sorted.context("cannot rank values")?;
            for value in &values {
                writeln!(out, "{value}")?;
            }
        }
        Command::Config => {
            let settings = config_fs::load_hash_config(cli.config_dir.as_deref());
            if let Err(err) = settings.build() {
                warn!(error = %err, "hash settings in effect do not build; digest will fail");
            }
            serde_json::to_writer_pretty(&mut out, &settings)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
