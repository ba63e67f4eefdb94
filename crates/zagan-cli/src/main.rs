//! Zagan DBR encoder/decoder binary.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu (0 = encode, 1 = decode)
//! zagan
//!
//! # Direct subcommands
//! zagan encode notes.txt notes.dbr
//! zagan decode notes.dbr notes.out
//!
//! # With operation tracing
//! zagan --log-level debug encode notes.txt notes.dbr
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use zagan_cli::ops;
use zagan_core::Metrics;

#[derive(Parser, Debug)]
#[command(name = "zagan")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "Dynamic Byte Remapping (DBR) encoder/decoder", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a file into a self-describing DBR artifact
    Encode { input: PathBuf, output: PathBuf },

    /// Decode a DBR artifact back into the original bytes
    Decode { input: PathBuf, output: PathBuf },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let mut metrics = Metrics::new();
    let result = match args.command {
        Some(Command::Encode { input, output }) => ops::encode_file(&input, &output),
        Some(Command::Decode { input, output }) => ops::decode_file(&input, &output),
        None => ops::run_interactive(),
    };

    match result {
        Ok(stats) => {
            metrics.record(&stats);
            debug!(summary = %metrics.summary(), "session metrics");
            ExitCode::SUCCESS
        }
        Err(err) => {
            metrics.record_error();
            error!(category = err.category(), "{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
