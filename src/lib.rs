pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod http;
pub mod navigation;
pub mod render;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::{Command, FilterArgs, OutputFormat, SourceArgs};
use crate::config::settings::AppConfig;
use crate::services::{GuideService, RenderRequest};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_render(
    source: &SourceArgs,
    filters: &FilterArgs,
    format: OutputFormat,
    output: Option<std::path::PathBuf>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = GuideService::new(config, source.source.as_deref())?;
        let request = RenderRequest {
            date: filters.date,
            team: filters.team.clone(),
            tournament: filters.tournament.clone(),
            search: filters.search.clone(),
            format,
            output,
        };
        service.run_render(request).await
    })
}

pub fn handle_link(source: &SourceArgs, match_id: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = GuideService::new(config, source.source.as_deref())?;
        service.run_link(match_id).await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
