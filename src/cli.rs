use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "onde-vai-passar", author, version, about = "Onde vai passar futebol hoje: match listings by day or team")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Render the match list for a day, a team or a search
    Render {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the detail page URL of a match
    Link {
        #[command(flatten)]
        source: SourceArgs,
        /// Match id
        #[arg(short, long = "match")]
        match_id: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct SourceArgs {
    /// Base URL or directory with matches.json, teams.json and tournaments.json
    #[arg(short, long)]
    pub source: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct FilterArgs {
    /// Day to show (YYYY-MM-DD or DD-MM-YYYY), defaults to today
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    /// Team id or slug; shows that team's matches on every day
    #[arg(long)]
    pub team: Option<String>,
    /// Tournament reference
    #[arg(long)]
    pub tournament: Option<String>,
    /// Free-text search over teams, tournament and channels
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Text,
}

/// Accept ISO dates and the `dd-mm-yyyy` form used in detail links
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%Y"))
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD or DD-MM-YYYY", raw))
}
