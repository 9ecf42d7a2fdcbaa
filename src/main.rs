use anyhow::Result;

use onde_vai_passar::cli::Command;
use onde_vai_passar::{handle_completions, handle_link, handle_render, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
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
        Command::Render {
            source,
            filters,
            format,
            output,
        } => handle_render(source, filters, *format, output.clone()),
        Command::Link { source, match_id } => handle_link(source, match_id),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
