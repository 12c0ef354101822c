use super::types::{AssignmentMode, Lineup, LineupSection};
use crate::models::RosterPlayer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamHealth {
    Good,
    Monitor,
    Concerning,
}

impl TeamHealth {
    pub fn from_injured_starters(count: usize) -> Self {
        match count {
            0 => TeamHealth::Good,
            1 => TeamHealth::Monitor,
            _ => TeamHealth::Concerning,
        }
    }
}

/// Dashboard header figures for one lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub total_players: usize,
    pub starters: usize,
    pub bench_players: usize,
    pub empty_slots: usize,
    pub overflow_players: usize,
    pub injured_starters: usize,
    pub projected_points: Option<f64>,
    pub actual_points: Option<f64>,
    pub team_health: TeamHealth,
}

impl TeamSummary {
    pub fn from_lineup(lineup: &Lineup) -> Self {
        let starters: Vec<&RosterPlayer> = match lineup.mode {
            AssignmentMode::Template => lineup
                .entries
                .iter()
                .filter(|e| matches!(e.section, LineupSection::Starter | LineupSection::Overflow))
                .filter_map(|e| e.player.as_ref())
                .collect(),
            AssignmentMode::Passthrough => lineup.players().filter(|p| p.is_starter).collect(),
        };

        let injured_starters = starters.iter().filter(|p| p.is_injured()).count();

        Self {
            total_players: lineup.players().count(),
            starters: starters.len(),
            bench_players: match lineup.mode {
                AssignmentMode::Template => lineup.bench().count(),
                AssignmentMode::Passthrough => lineup.players().filter(|p| !p.is_starter).count(),
            },
            empty_slots: lineup.empty_slots().count(),
            overflow_players: lineup.overflow().count(),
            injured_starters,
            projected_points: sum_present(starters.iter().map(|p| p.projected_points)),
            actual_points: sum_present(starters.iter().map(|p| p.actual_points)),
            team_health: TeamHealth::from_injured_starters(injured_starters),
        }
    }
}

/// Sum of the non-zero figures, `None` when no starter has one
fn sum_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    values
        .flatten()
        .filter(|v| *v != 0.0)
        .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}
