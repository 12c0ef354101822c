//! Slot label interpretation: which positions may fill which slot.

use crate::config::AssignerConfig;
use crate::models::Position;
use std::collections::{BTreeMap, BTreeSet};

pub const BENCH_LABEL: &str = "BN";
pub const FLEX_LABEL: &str = "FLEX";
pub const SUPER_FLEX_LABEL: &str = "SUPER_FLEX";
const SUPER_FLEX_ALIAS: &str = "SUPERFLEX";
const BUILTIN_FLEX_LABELS: [&str; 3] = [FLEX_LABEL, SUPER_FLEX_LABEL, SUPER_FLEX_ALIAS];

/// What a single template label asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    /// Exactly one position (standard or custom passthrough)
    Fixed(Position),
    /// Any of several positions
    Flex(Vec<Position>),
    /// Not a starting slot; bench is assembled separately
    Bench,
}

impl SlotKind {
    pub fn accepts(&self, position: &Position) -> bool {
        match self {
            SlotKind::Fixed(required) => required == position,
            SlotKind::Flex(eligible) => eligible.contains(position),
            SlotKind::Bench => false,
        }
    }

    pub fn is_bench(&self) -> bool {
        matches!(self, SlotKind::Bench)
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Label table used by the assigner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRules {
    flex: BTreeMap<String, Vec<Position>>,
    bench: BTreeSet<String>,
}

impl Default for SlotRules {
    fn default() -> Self {
        let flex_set = vec![Position::RB, Position::WR, Position::TE];
        let super_flex_set = vec![Position::QB, Position::RB, Position::WR, Position::TE];

        let mut flex = BTreeMap::new();
        flex.insert(FLEX_LABEL.to_string(), flex_set);
        flex.insert(SUPER_FLEX_LABEL.to_string(), super_flex_set.clone());
        flex.insert(SUPER_FLEX_ALIAS.to_string(), super_flex_set);

        Self {
            flex,
            bench: BTreeSet::from([BENCH_LABEL.to_string()]),
        }
    }
}

impl SlotRules {
    pub fn from_config(config: &AssignerConfig) -> Self {
        let mut rules = Self::default();
        rules.bench = config.bench_labels.iter().map(|l| normalize(l)).collect();
        rules.bench.insert(BENCH_LABEL.to_string());
        for (label, eligible) in &config.flex_slots {
            rules.flex.insert(normalize(label), eligible.clone());
        }
        rules
    }

    pub fn classify(&self, label: &str) -> SlotKind {
        let key = normalize(label);
        if self.bench.contains(&key) {
            return SlotKind::Bench;
        }
        if let Some(eligible) = self.flex.get(&key) {
            return SlotKind::Flex(eligible.clone());
        }
        match key.parse::<Position>() {
            Ok(position) => SlotKind::Fixed(position),
            // blank label: nothing can fill it
            Err(_) => SlotKind::Fixed(Position::Custom(key)),
        }
    }

    /// True for bench labels, flex labels and the six standard positions.
    pub fn is_recognized(&self, label: &str) -> bool {
        match self.classify(label) {
            SlotKind::Fixed(position) => position.is_standard(),
            SlotKind::Flex(_) | SlotKind::Bench => true,
        }
    }

    pub fn is_builtin_flex(label: &str) -> bool {
        BUILTIN_FLEX_LABELS.contains(&normalize(label).as_str())
    }
}
