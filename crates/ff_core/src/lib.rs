//! # ff_core - Fantasy Lineup Slot Assignment
//!
//! Maps a fantasy-football roster onto a league's ordered lineup-slot
//! template (QB, RB, RB, WR, WR, TE, FLEX, K, DST, bench ...) for display.
//!
//! ## Features
//! - Deterministic first-match assignment (same roster = same lineup)
//! - FLEX / SUPER_FLEX and configurable flex slots
//! - Overflow and bench handling that never drops a player
//! - Platform roster import and a JSON API for the dashboard layer

pub mod api;
pub mod config;
pub mod error;
pub mod lineup;
pub mod models;

// Re-export main API functions
pub use api::{assign_lineup_json, LineupRequest, LineupResponse};
pub use config::{AssignerConfig, LabelPolicy};
pub use error::{LineupError, Result};

// Re-export lineup types
pub use lineup::{
    assign, AssignmentMode, Lineup, LineupAssigner, LineupEntry, LineupSection, SlotKind,
    SlotRules, TeamHealth, TeamSummary,
};

// Re-export models
pub use models::{
    build_roster_players, LeagueSettings, PlatformRoster, PlayerId, PlayerRecord, Position,
    RosterPlayer,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
