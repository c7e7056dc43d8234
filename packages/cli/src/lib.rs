//! # textbus-cli
//!
//! A command-line host for a TextBus buffer kept in a file.
//!
//! ## Usage
//!
//! ```bash
//! # Set and read static records
//! textbus --file panel.txt set float Altitude 100
//! textbus --file panel.txt get float Altitude
//!
//! # Queue and consume temporary records
//! textbus --file panel.txt push string Cmd.Clock reset
//! textbus --file panel.txt take string Cmd.Clock
//!
//! # Inspect the buffer
//! textbus --file panel.txt dump --json
//!
//! # Run the doubling program for three ticks
//! textbus --file panel.txt tick --count 3
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use textbus_core_store::{BusConfig, DataType};
use textbus_file_store::{FileText, FileTextError};
use textbus_typed_store::Bus;

pub mod commands;
pub mod logger;
pub mod tick;

pub use commands::execute;
pub use tick::TickSession;

/// TextBus - read and write typed records in a shared text buffer
#[derive(Parser, Debug)]
#[command(name = "textbus")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding the shared buffer
    #[arg(short, long, default_value = "textbus.txt")]
    pub file: PathBuf,

    /// JSON file with the bus configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Read a static record
    Get { kind: ValueKind, id: String },
    /// Create or overwrite a static record
    Set {
        kind: ValueKind,
        id: String,
        value: String,
    },
    /// Queue a temporary record
    Push {
        kind: ValueKind,
        id: String,
        value: String,
    },
    /// Consume the oldest matching temporary record
    Take { kind: ValueKind, id: String },
    /// List every record in the buffer
    Dump {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the doubling program
    Tick {
        /// Number of ticks to run
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
}

/// Record data type as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    String,
}

impl From<ValueKind> for DataType {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Int => DataType::Int,
            ValueKind::Float => DataType::Float,
            ValueKind::String => DataType::String,
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Bus(#[from] textbus_core_store::Error),

    #[error(transparent)]
    File(#[from] FileTextError),

    #[error("cannot read config {path}: {error}")]
    ConfigRead {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("no {data_type} record '{id}'")]
    NotFound { data_type: DataType, id: String },
}

/// Load the bus configuration, or the default when no file is given.
pub fn load_config(path: Option<&PathBuf>) -> Result<BusConfig, CliError> {
    let Some(path) = path else {
        return Ok(BusConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|error| CliError::ConfigRead {
        path: path.clone(),
        error,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Open the file-backed bus and execute the parsed command.
///
/// Returns the text to print on success.
pub fn run(args: &Args) -> Result<String, CliError> {
    let config = load_config(args.config.as_ref())?;
    let device = FileText::new(&args.file)?;
    let mut bus = Bus::with_config(device, &config)?;

    log::debug!("{:?} on {}", args.command, args.file.display());
    execute(&args.command, &mut bus)
}
