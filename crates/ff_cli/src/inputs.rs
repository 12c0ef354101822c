//! File loading for CLI inputs.

use anyhow::{bail, Context, Result};
use ff_core::{AssignerConfig, LeagueSettings, PlatformRoster, PlayerRecord, RosterPlayer};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

pub fn load_players(path: &Path) -> Result<Vec<RosterPlayer>> {
    read_json(path)
}

pub fn load_league(path: &Path) -> Result<LeagueSettings> {
    read_json(path)
}

pub fn load_roster(path: &Path) -> Result<PlatformRoster> {
    read_json(path)
}

pub fn load_directory(path: &Path) -> Result<HashMap<String, PlayerRecord>> {
    read_json(path)
}

/// `--config` wins over `FF_LINEUP_CONFIG`; neither means defaults
pub fn load_config(path: Option<&Path>) -> Result<AssignerConfig> {
    match path {
        Some(path) => AssignerConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(AssignerConfig::from_env()
            .context("Failed to load config from environment")?
            .unwrap_or_default()),
    }
}

/// Slot template from `--template QB,RB,...` or the league file.
pub fn resolve_template(template: Option<&str>, league: Option<&Path>) -> Result<Vec<String>> {
    match (template, league) {
        (Some(_), Some(_)) => bail!("--template and --league are mutually exclusive"),
        (Some(list), None) => Ok(parse_template_list(list)),
        (None, Some(path)) => Ok(load_league(path)?.roster_positions),
        (None, None) => Ok(Vec::new()),
    }
}

pub fn parse_template_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
