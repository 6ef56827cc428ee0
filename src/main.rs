//! Purpose: `rostable` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits output on stdout.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: All roster loading goes through `api::Table` (atomic replace).
#![allow(clippy::result_large_err)]
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rostable::api::{Error, ErrorKind, Table, to_exit_code};
use rostable::notice::error_json;

#[derive(Parser)]
#[command(name = "rostable", version, about = "Validate JSON rosters and print them as text tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a roster file and print the rendered table.
    Print {
        /// Path to the roster JSON document.
        file: PathBuf,
    },
    /// Validate a roster file and report the record count as JSON.
    Check {
        /// Path to the roster JSON document.
        file: PathBuf,
    },
    /// Generate shell completion scripts.
    Completion { shell: Shell },
}

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Input)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Input)
                    .with_message(err.to_string().trim_end().to_string())
                    .with_hint("Run `rostable --help` for usage."));
            }
        },
    };

    match cli.command {
        Command::Print { file } => {
            let mut table = Table::new();
            table.load_from_file(&file)?;
            print!("{}", table.render());
            Ok(RunOutcome::ok())
        }
        Command::Check { file } => {
            let mut table = Table::new();
            table.load_from_file(&file)?;
            let summary = json!({ "ok": true, "records": table.records().len() });
            println!("{summary}");
            Ok(RunOutcome::ok())
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "rostable", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
    }
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("error: {err}");
        if let Some(hint) = err.hint() {
            eprintln!("hint: {hint}");
        }
        return;
    }

    let value = error_json(err);
    let text = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"input\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{text}");
}
