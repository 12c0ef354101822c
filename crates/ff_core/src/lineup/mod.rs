//! Lineup construction: slot assignment and summary figures.

pub mod assigner;
pub mod eligibility;
pub mod summary;
pub mod types;


pub use assigner::{assign, assign_with_rules, LineupAssigner};
pub use eligibility::{SlotKind, SlotRules, BENCH_LABEL, FLEX_LABEL, SUPER_FLEX_LABEL};
pub use summary::{TeamHealth, TeamSummary};
pub use types::{AssignmentMode, Lineup, LineupEntry, LineupSection};
