//! CLI argument definitions for Simplynotes.
//!
//! Options go before the command word. Everything after it belongs to the
//! command: `add` keeps its words verbatim (including things that look like
//! flags, or a bare `--`), and words a command does not read are ignored.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version string with build metadata, shown by `sn --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SN_GIT_DESCRIBE"),
    ", ",
    env!("SN_BUILD_DATE"),
    ")"
);

/// Options that take a value, either as the next word or as `--opt=value`.
const VALUE_OPTIONS: &[&str] = &["--db", "--action-log"];

/// Options that take no value.
const FLAG_OPTIONS: &[&str] = &["--json"];

/// Tokens clap answers itself before any command runs.
const INFO_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

/// Simplynotes - jot down notes and tick them off.
///
/// Notes are kept in ~/.simplynotes.json unless SIMPLYNOTES_DBPATH or --db
/// points elsewhere. The file must already exist; create it with
/// `echo '{"notes":[]}' > ~/.simplynotes.json`.
#[derive(Parser, Debug)]
#[command(name = "sn")]
#[command(author, version, long_version = LONG_VERSION, about = "A tiny CLI for jotting down notes and ticking them off", long_about = None)]
#[command(allow_external_subcommands = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Output JSON instead of human-readable lines
    #[arg(long = "json")]
    pub json: bool,

    /// Path to the notes database (overrides SIMPLYNOTES_DBPATH)
    #[arg(long = "db", value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Append a JSONL record of each command to this file
    #[arg(long = "action-log", env = "SIMPLYNOTES_ACTION_LOG", value_name = "PATH")]
    pub action_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print all notes
    List,

    /// Mark a note as done and print the full list
    Done {
        /// Zero-based index of the note (as shown by `sn list`)
        #[arg(allow_hyphen_values = true)]
        index: String,
    },

    /// Append a new note
    Add {
        /// Note text; all remaining words are joined with single spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Anything else is accepted and ignored
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Commands {
    /// Name used for logging.
    pub fn name(&self) -> &str {
        match self {
            Commands::List => "list",
            Commands::Done { .. } => "done",
            Commands::Add { .. } => "add",
            Commands::Unknown(args) => args.first().map(String::as_str).unwrap_or(""),
        }
    }
}

impl Cli {
    /// Parse the process arguments, exiting on `--help`, `--version`, or a
    /// malformed option.
    pub fn parse_args() -> Self {
        let args = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Self::try_parse_args(args).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` (program name first).
    ///
    /// clap only sees the options, the command word, and the arguments that
    /// command reads. `add` and unrecognized commands get the raw remainder.
    pub fn try_parse_args(args: Vec<String>) -> Result<Self, clap::Error> {
        let Some(pos) = command_position(&args) else {
            return Self::try_parse_from(&args);
        };

        // A flag-shaped first word is just another unrecognized command.
        if args[pos].starts_with('-') {
            let mut cli = Self::try_parse_from(&args[..pos])?;
            cli.command = Some(Commands::Unknown(args[pos..].to_vec()));
            return Ok(cli);
        }

        let read = match args[pos].as_str() {
            "done" => pos + 2,
            _ => pos + 1,
        };
        let mut cli = Self::try_parse_from(&args[..read.min(args.len())])?;
        match &mut cli.command {
            Some(Commands::Add { text }) => *text = args[pos + 1..].to_vec(),
            Some(Commands::Unknown(rest)) => *rest = args[pos..].to_vec(),
            _ => {}
        }
        Ok(cli)
    }
}

/// Index of the command word, skipping leading options.
///
/// `None` when there is no command word or clap has to answer an info flag.
fn command_position(args: &[String]) -> Option<usize> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if INFO_FLAGS.contains(&arg) {
            return None;
        } else if FLAG_OPTIONS.contains(&arg) {
            i += 1;
        } else if VALUE_OPTIONS.contains(&arg) {
            i += 2;
        } else if VALUE_OPTIONS
            .iter()
            .any(|opt| arg.strip_prefix(opt).is_some_and(|rest| rest.starts_with('=')))
        {
            i += 1;
        } else {
            return Some(i);
        }
    }
    None
}
