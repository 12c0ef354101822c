//! ff-lineup CLI
//!
//! Roster JSON + league slot template → ordered lineup (table or JSON)

mod inputs;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ff_core::{
    build_roster_players, AssignerConfig, LabelPolicy, Lineup, LineupAssigner, RosterPlayer,
    TeamSummary,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ff-lineup")]
#[command(about = "Assign fantasy roster players to league lineup slots", long_about = None)]
struct Cli {
    /// Log filter (e.g. "info", "ff_core=debug")
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true, default_value = "false")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign a roster file to a slot template
    Assign {
        /// Players JSON file (array of roster players)
        #[arg(long)]
        players: PathBuf,

        /// Comma-separated slot template, e.g. "QB,RB,RB,WR,FLEX,BN"
        #[arg(long)]
        template: Option<String>,

        /// League JSON file providing `roster_positions`
        #[arg(long)]
        league: Option<PathBuf>,

        /// Assigner config (.json / .yaml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Reject unknown slot labels
        #[arg(long, default_value = "false")]
        strict: bool,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Build players from a platform roster + player directory, then assign
    Import {
        /// Platform roster JSON (player_ids, starters, record)
        #[arg(long)]
        roster: PathBuf,

        /// Player directory JSON keyed by player id
        #[arg(long)]
        directory: PathBuf,

        /// League JSON file providing `roster_positions`
        #[arg(long)]
        league: PathBuf,

        /// Assigner config (.json / .yaml)
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Run a JSON API request file and print the response
    Request {
        /// Request JSON file
        #[arg(long = "in")]
        r#in: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    lineup: &'a Lineup,
    summary: &'a TeamSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level, cli.log_json);

    match cli.command {
        Commands::Assign {
            players,
            template,
            league,
            config,
            strict,
            format,
        } => {
            let mut config = inputs::load_config(config.as_deref())?;
            if strict {
                config.label_policy = LabelPolicy::Strict;
            }
            let roster = inputs::load_players(&players)?;
            let template = inputs::resolve_template(template.as_deref(), league.as_deref())?;

            info!(players = roster.len(), slots = template.len(), "assigning lineup");
            let lineup = run_assign(&config, &roster, &template)?;
            print_lineup("Lineup", &lineup, format)?;
        }

        Commands::Import {
            roster,
            directory,
            league,
            config,
            format,
        } => {
            let config = inputs::load_config(config.as_deref())?;
            let platform_roster = inputs::load_roster(&roster)?;
            let directory = inputs::load_directory(&directory)?;
            let league = inputs::load_league(&league)?;

            let players = build_roster_players(&platform_roster, &directory);
            info!(
                league = %league.league_id,
                roster_id = platform_roster.roster_id,
                players = players.len(),
                "imported platform roster"
            );
            let lineup = run_assign(&config, &players, league.slot_template())?;

            let title = format!(
                "{} | roster {} ({})",
                if league.name.is_empty() { &league.league_id } else { &league.name },
                platform_roster.roster_id,
                platform_roster.record()
            );
            print_lineup(&title, &lineup, format)?;
        }

        Commands::Request { r#in } => {
            let request = std::fs::read_to_string(&r#in)
                .with_context(|| format!("Failed to read request file: {}", r#in.display()))?;
            let response = ff_core::assign_lineup_json(&request).context("Lineup request failed")?;
            println!("{}", response);
        }
    }

    Ok(())
}

fn run_assign(config: &AssignerConfig, players: &[RosterPlayer], template: &[String]) -> Result<Lineup> {
    let assigner = LineupAssigner::new(config).context("Invalid assigner config")?;
    assigner
        .assign(players, template)
        .context("Lineup assignment failed")
}

fn print_lineup(title: &str, lineup: &Lineup, format: OutputFormat) -> Result<()> {
    let summary = TeamSummary::from_lineup(lineup);
    match format {
        OutputFormat::Table => print!("{}", render::render_table(title, lineup, &summary)),
        OutputFormat::Json => {
            let output = JsonOutput {
                lineup,
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
