//! Simplynotes CLI - jot down notes and tick them off.

use clap::CommandFactory;
use simplynotes::action_log;
use simplynotes::cli::{Cli, Commands};
use simplynotes::commands::{self, Output};
use simplynotes::config::{self, ConfigOverrides};
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling diagnostic output on stderr.
const LOG_ENV: &str = "SIMPLYNOTES_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse_args();
    let json = cli.json;

    let Some(command) = cli.command else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("Expected a command: list, done <index>, or add <text...>");
        return;
    };

    let (cmd_name, args_json) = serialize_command(&command);
    let start = Instant::now();

    let result = run_command(command, cli.db_path, json);

    if let Some(log_path) = &cli.action_log {
        let duration = start.elapsed().as_millis() as u64;
        let error = result.as_ref().err().map(|e| e.to_string());
        action_log::log_action(
            log_path,
            &cmd_name,
            args_json,
            result.is_ok(),
            error,
            duration,
        );
    }

    if let Err(e) = result {
        if json {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        } else {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_command(
    command: Commands,
    db_path: Option<std::path::PathBuf>,
    json: bool,
) -> Result<(), simplynotes::Error> {
    // Unknown commands do nothing at all, not even resolve or load the database.
    if let Commands::Unknown(args) = &command {
        tracing::debug!(command = ?args.first(), "ignoring unrecognized command");
        return Ok(());
    }

    let config = config::resolve_config(ConfigOverrides { db_path })?;

    match command {
        Commands::List => output(&commands::list(&config)?, json),
        Commands::Done { index } => {
            commands::done(&config, &index, |listing| output(listing, json))?;
        }
        Commands::Add { text } => output(&commands::add(&config, &text)?, json),
        Commands::Unknown(_) => {}
    }

    Ok(())
}

fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        let human = result.to_human();
        if !human.is_empty() {
            println!("{}", human);
        }
    }
}

/// Command name and arguments for the action log.
fn serialize_command(command: &Commands) -> (String, serde_json::Value) {
    let args = match command {
        Commands::List => serde_json::json!({}),
        Commands::Done { index } => serde_json::json!({ "index": index }),
        Commands::Add { text } => serde_json::json!({ "text": text }),
        Commands::Unknown(args) => serde_json::json!({ "args": args }),
    };
    (command.name().to_string(), args)
}
