use anyhow::Result;
use colored::Colorize;

use portfolio_backend::cli::Command;
use portfolio_backend::{handle_completions, handle_fetch, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Fetch { source, username } => handle_fetch(*source, username.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
