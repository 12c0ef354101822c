use crate::models::{PlayerId, RosterPlayer};
use serde::{Deserialize, Serialize};

/// How a lineup was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    /// Normal mode: players mapped onto the league slot template
    Template,
    /// Empty template: every player listed under its own position
    Passthrough,
}

/// Which part of the lineup an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineupSection {
    /// One entry per non-bench template label, in template order
    Starter,
    /// Starter-flagged players no template slot could absorb
    Overflow,
    /// Non-starters, in roster order
    Bench,
    /// Degraded output for an empty template
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub slot: String,
    pub section: LineupSection,
    /// `None` marks an unfilled slot
    pub player: Option<RosterPlayer>,
}

impl LineupEntry {
    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }

    pub fn player_id(&self) -> Option<&PlayerId> {
        self.player.as_ref().map(|p| &p.id)
    }
}

/// Ordered slot assignment for one roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub mode: AssignmentMode,
    pub entries: Vec<LineupEntry>,
}

impl Lineup {
    fn section(&self, section: LineupSection) -> impl Iterator<Item = &LineupEntry> {
        self.entries.iter().filter(move |e| e.section == section)
    }

    pub fn starters(&self) -> impl Iterator<Item = &LineupEntry> {
        self.section(LineupSection::Starter)
    }

    pub fn overflow(&self) -> impl Iterator<Item = &LineupEntry> {
        self.section(LineupSection::Overflow)
    }

    pub fn bench(&self) -> impl Iterator<Item = &LineupEntry> {
        self.section(LineupSection::Bench)
    }

    /// Template slots that no eligible player could fill
    pub fn empty_slots(&self) -> impl Iterator<Item = &LineupEntry> {
        self.entries.iter().filter(|e| e.is_empty())
    }

    /// Every assigned player, in output order
    pub fn players(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.entries.iter().filter_map(|e| e.player.as_ref())
    }
}
