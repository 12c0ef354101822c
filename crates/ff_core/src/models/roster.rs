//! Platform roster import
//!
//! The fantasy platform stores a roster as a flat list of player ids plus a
//! separate `starters` id list (with `"0"` placeholders for open slots).
//! Player details live in a directory keyed by the same ids. This module
//! joins the two into the `RosterPlayer` list the assigner consumes.

use super::{PlayerId, Position, RosterPlayer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

const UNKNOWN_PLAYER_NAME: &str = "Unknown Player";
const UNKNOWN_POSITION: &str = "UNKNOWN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformRoster {
    #[serde(default)]
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub player_ids: Vec<String>,
    #[serde(default)]
    pub starters: Vec<String>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub fpts: f64,
}

impl PlatformRoster {
    /// Win-loss-tie record, e.g. `"7-3-0"`
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

/// Player directory entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, alias = "name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub projected_points: Option<f64>,
    #[serde(default)]
    pub actual_points: Option<f64>,
}

/// Build the assigner input for one roster.
///
/// Players keep the order of `roster.player_ids`. Ids that are blank or
/// missing from `directory` are skipped.
pub fn build_roster_players(
    roster: &PlatformRoster,
    directory: &HashMap<String, PlayerRecord>,
) -> Vec<RosterPlayer> {
    let starter_ids: HashSet<&str> = roster.starters.iter().map(String::as_str).collect();

    roster
        .player_ids
        .iter()
        .filter_map(|raw_id| {
            let Ok(id) = PlayerId::new(raw_id.as_str()) else {
                warn!(roster_id = roster.roster_id, "skipping blank player id");
                return None;
            };
            let Some(record) = directory.get(raw_id) else {
                warn!(roster_id = roster.roster_id, player_id = %raw_id, "player missing from directory");
                return None;
            };
            Some(to_roster_player(id, record, starter_ids.contains(raw_id.as_str())))
        })
        .collect()
}

fn to_roster_player(id: PlayerId, record: &PlayerRecord, is_starter: bool) -> RosterPlayer {
    let position = record
        .position
        .as_deref()
        .and_then(|p| p.parse::<Position>().ok())
        .unwrap_or_else(|| Position::Custom(UNKNOWN_POSITION.to_string()));

    let injury_status = record
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("active"))
        .map(str::to_string);

    let mut player = RosterPlayer::new(
        id,
        record.full_name.clone().unwrap_or_else(|| UNKNOWN_PLAYER_NAME.to_string()),
        position,
        is_starter,
    );
    player.team = record.team.clone();
    player.projected_points = record.projected_points;
    player.actual_points = record.actual_points;
    player.injury_status = injury_status;
    player
}
