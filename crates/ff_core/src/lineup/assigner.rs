//! Roster slot assignment
//!
//! Maps a flat roster onto a league's ordered slot template:
//!
//! 1. Split players into starters and bench, keeping roster order.
//! 2. Walk the template. Each non-bench label takes the first remaining
//!    starter whose position it accepts, or stays empty.
//! 3. Starters left over (template under-provisions a position) follow the
//!    template slots under their own position label.
//! 4. Bench players close the lineup under `BN`.
//!
//! Candidate order is always roster order. Nothing is re-ranked by
//! projection, so the same input always yields the same lineup.

use super::eligibility::{SlotRules, BENCH_LABEL};
use super::types::{AssignmentMode, Lineup, LineupEntry, LineupSection};
use crate::config::{AssignerConfig, LabelPolicy};
use crate::error::{LineupError, Result};
use crate::models::RosterPlayer;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Assign with the built-in label table and lenient label handling.
pub fn assign(players: &[RosterPlayer], template: &[String]) -> Lineup {
    assign_with_rules(players, template, &SlotRules::default())
}

pub fn assign_with_rules(players: &[RosterPlayer], template: &[String], rules: &SlotRules) -> Lineup {
    if template.is_empty() {
        return passthrough(players);
    }

    let (starters, bench): (Vec<&RosterPlayer>, Vec<&RosterPlayer>) =
        players.iter().partition(|p| p.is_starter);

    let mut pool = starters;
    let mut entries = Vec::with_capacity(players.len() + template.len());

    for label in template {
        let kind = rules.classify(label);
        if kind.is_bench() {
            continue;
        }

        let picked = pool
            .iter()
            .position(|p| kind.accepts(&p.position))
            .map(|idx| pool.remove(idx));

        match picked {
            Some(player) => trace!(slot = %label, player_id = %player.id, "slot filled"),
            None => debug!(slot = %label, "no eligible starter left, slot stays empty"),
        }

        entries.push(LineupEntry {
            slot: label.clone(),
            section: LineupSection::Starter,
            player: picked.cloned(),
        });
    }

    if !pool.is_empty() {
        debug!(count = pool.len(), "starters not absorbed by the slot template");
    }
    entries.extend(pool.into_iter().map(|player| LineupEntry {
        slot: player.position.to_string(),
        section: LineupSection::Overflow,
        player: Some(player.clone()),
    }));

    entries.extend(bench.into_iter().map(|player| LineupEntry {
        slot: BENCH_LABEL.to_string(),
        section: LineupSection::Bench,
        player: Some(player.clone()),
    }));

    Lineup {
        mode: AssignmentMode::Template,
        entries,
    }
}

/// Degraded output for leagues without a known template.
fn passthrough(players: &[RosterPlayer]) -> Lineup {
    debug!(players = players.len(), "empty slot template, listing players by position");
    Lineup {
        mode: AssignmentMode::Passthrough,
        entries: players
            .iter()
            .map(|player| LineupEntry {
                slot: player.position.to_string(),
                section: LineupSection::Passthrough,
                player: Some(player.clone()),
            })
            .collect(),
    }
}

/// Configured assigner with boundary validation.
#[derive(Debug, Clone, Default)]
pub struct LineupAssigner {
    rules: SlotRules,
    policy: LabelPolicy,
}

impl LineupAssigner {
    pub fn new(config: &AssignerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: SlotRules::from_config(config),
            policy: config.label_policy,
        })
    }

    pub fn with_policy(mut self, policy: LabelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn assign(&self, players: &[RosterPlayer], template: &[String]) -> Result<Lineup> {
        let mut seen = HashSet::with_capacity(players.len());
        if let Some(dup) = players.iter().find(|p| !seen.insert(&p.id)) {
            return Err(LineupError::DuplicatePlayerId {
                id: dup.id.to_string(),
            });
        }

        if self.policy == LabelPolicy::Strict {
            if let Some((index, label)) = template
                .iter()
                .enumerate()
                .find(|(_, label)| !self.rules.is_recognized(label))
            {
                return Err(LineupError::InvalidTemplateLabel {
                    index,
                    label: label.clone(),
                });
            }
        }

        Ok(assign_with_rules(players, template, &self.rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    fn player(id: u32, pos: &str, starter: bool) -> RosterPlayer {
        RosterPlayer::new(
            PlayerId::new(id.to_string()).unwrap(),
            format!("Player {id}"),
            pos.parse().unwrap(),
            starter,
        )
    }

    fn template(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn slots(lineup: &Lineup) -> Vec<(String, Option<String>)> {
        lineup
            .entries
            .iter()
            .map(|e| (e.slot.clone(), e.player_id().map(|id| id.to_string())))
            .collect()
    }

    fn pair(slot: &str, id: Option<&str>) -> (String, Option<String>) {
        (slot.to_string(), id.map(str::to_string))
    }

    #[test]
    fn test_flex_left_empty_when_no_eligible_starter() {
        let players = vec![
            player(1, "QB", true),
            player(2, "RB", true),
            player(3, "RB", true),
            player(4, "WR", true),
            player(5, "TE", false),
        ];
        let lineup = assign(&players, &template(&["QB", "RB", "RB", "WR", "FLEX", "BN"]));

        assert_eq!(lineup.mode, AssignmentMode::Template);
        assert_eq!(
            slots(&lineup),
            vec![
                pair("QB", Some("1")),
                pair("RB", Some("2")),
                pair("RB", Some("3")),
                pair("WR", Some("4")),
                pair("FLEX", None),
                pair("BN", Some("5")),
            ]
        );
        assert_eq!(lineup.empty_slots().count(), 1);
    }

    #[test]
    fn test_second_wr_fills_flex() {
        let players = vec![player(1, "RB", true), player(2, "WR", true), player(3, "WR", true)];
        let lineup = assign(&players, &template(&["RB", "WR", "FLEX"]));

        assert_eq!(
            slots(&lineup),
            vec![pair("RB", Some("1")), pair("WR", Some("2")), pair("FLEX", Some("3"))]
        );
    }

    #[test]
    fn test_empty_template_passthrough() {
        let players = vec![player(1, "QB", true), player(2, "RB", false)];
        let lineup = assign(&players, &[]);

        assert_eq!(lineup.mode, AssignmentMode::Passthrough);
        assert_eq!(slots(&lineup), vec![pair("QB", Some("1")), pair("RB", Some("2"))]);
        assert!(lineup.entries.iter().all(|e| e.section == LineupSection::Passthrough));
    }

    #[test]
    fn test_unabsorbed_starters_become_overflow_before_bench() {
        let players = vec![
            player(1, "WR", false),
            player(2, "QB", true),
            player(3, "QB", true),
            player(4, "K", true),
        ];
        let lineup = assign(&players, &template(&["QB", "BN"]));

        assert_eq!(
            slots(&lineup),
            vec![
                pair("QB", Some("2")),
                pair("QB", Some("3")),
                pair("K", Some("4")),
                pair("BN", Some("1")),
            ]
        );
        assert_eq!(lineup.overflow().count(), 2);
        assert_eq!(lineup.starters().count(), 1);
    }

    #[test]
    fn test_super_flex_prefers_roster_order() {
        let players = vec![
            player(10, "WR", true),
            player(11, "QB", true),
            player(12, "QB", true),
        ];
        let lineup = assign(&players, &template(&["QB", "SUPER_FLEX", "WR"]));

        assert_eq!(
            slots(&lineup),
            vec![pair("QB", Some("11")), pair("SUPER_FLEX", Some("10")), pair("WR", None), pair("QB", Some("12"))]
        );
    }

    #[test]
    fn test_bench_keeps_roster_order_and_bn_position_is_irrelevant() {
        let players = vec![
            player(1, "TE", false),
            player(2, "QB", true),
            player(3, "K", false),
            player(4, "RB", false),
        ];
        let lineup = assign(&players, &template(&["BN", "QB", "BN", "RB"]));

        assert_eq!(
            slots(&lineup),
            vec![
                pair("QB", Some("2")),
                pair("RB", None),
                pair("BN", Some("1")),
                pair("BN", Some("3")),
                pair("BN", Some("4")),
            ]
        );
    }

    #[test]
    fn test_template_without_bench_label_still_lists_bench() {
        let players = vec![player(1, "QB", true), player(2, "DST", false)];
        let lineup = assign(&players, &template(&["QB", "DEF"]));
        assert_eq!(
            slots(&lineup),
            vec![pair("QB", Some("1")), pair("DEF", None), pair("BN", Some("2"))]
        );
    }

    #[test]
    fn test_unknown_label_is_lenient_passthrough() {
        let players = vec![player(1, "IDP", true), player(2, "WR", true)];
        let lineup = assign(&players, &template(&["IDP", "REC_FLEX"]));
        assert_eq!(
            slots(&lineup),
            vec![pair("IDP", Some("1")), pair("REC_FLEX", None), pair("WR", Some("2"))]
        );
    }

    #[test]
    fn test_slot_label_kept_as_supplied() {
        let players = vec![player(1, "RB", true)];
        let lineup = assign(&players, &template(&["flex"]));
        assert_eq!(slots(&lineup), vec![pair("flex", Some("1"))]);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let players = vec![
            player(1, "QB", true),
            player(2, "WR", true),
            player(3, "TE", true),
            player(4, "RB", false),
        ];
        let tpl = template(&["QB", "FLEX", "WR", "BN"]);
        assert_eq!(assign(&players, &tpl), assign(&players, &tpl));
    }

    #[test]
    fn test_passthrough_fields_preserved() {
        let mut star = player(7, "WR", true).with_projection(17.25);
        star.extra.insert("news".to_string(), serde_json::json!(["Limited practice"]));
        let lineup = assign(&[star.clone()], &template(&["WR"]));
        assert_eq!(lineup.entries[0].player.as_ref(), Some(&star));
    }

    #[test]
    fn test_strict_policy_rejects_unknown_label() {
        let assigner = LineupAssigner::default().with_policy(LabelPolicy::Strict);
        let players = vec![player(1, "QB", true)];

        let err = assigner
            .assign(&players, &template(&["QB", "BN", "OP"]))
            .unwrap_err();
        assert!(matches!(
            err,
            LineupError::InvalidTemplateLabel { index: 2, ref label } if label == "OP"
        ));
        assert!(assigner.assign(&players, &template(&["QB", "SUPERFLEX", "bn"])).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let assigner = LineupAssigner::default();
        let players = vec![player(1, "QB", true), player(1, "RB", false)];
        let err = assigner.assign(&players, &template(&["QB"])).unwrap_err();
        assert!(matches!(err, LineupError::DuplicatePlayerId { ref id } if id == "1"));
    }

    #[test]
    fn test_configured_flex_and_bench_labels() {
        let config = AssignerConfig::from_yaml(
            "bench_labels: [BN, IR]\nflex_slots:\n  REC_FLEX: [WR, TE]\n",
        )
        .unwrap();
        let assigner = LineupAssigner::new(&config).unwrap();
        let players = vec![player(1, "RB", true), player(2, "TE", true), player(3, "QB", false)];

        let lineup = assigner
            .assign(&players, &template(&["REC_FLEX", "IR", "RB"]))
            .unwrap();
        assert_eq!(
            slots(&lineup),
            vec![pair("REC_FLEX", Some("2")), pair("RB", Some("1")), pair("BN", Some("3"))]
        );
    }

    #[test]
    fn test_custom_bench_labels_keep_bn_as_bench() {
        let config = AssignerConfig::from_yaml("bench_labels: [IR]\n").unwrap();
        let assigner = LineupAssigner::new(&config).unwrap();
        let players = vec![player(1, "QB", true), player(2, "RB", false), player(3, "WR", false)];

        let lineup = assigner
            .assign(&players, &template(&["QB", "BN", "IR"]))
            .unwrap();
        assert_eq!(
            slots(&lineup),
            vec![pair("QB", Some("1")), pair("BN", Some("2")), pair("BN", Some("3"))]
        );
        assert_eq!(lineup.starters().count(), 1);
        assert_eq!(lineup.empty_slots().count(), 0);
    }

    #[test]
    fn test_standard_league_snapshot() {
        let players = vec![
            player(1, "QB", true),
            player(2, "RB", true),
            player(3, "RB", true),
            player(4, "WR", true),
            player(5, "WR", true),
            player(6, "TE", true),
            player(7, "WR", true),
            player(8, "K", true),
            player(9, "DST", true),
            player(10, "RB", false),
            player(11, "QB", false),
        ];
        let tpl = template(&[
            "QB", "RB", "RB", "WR", "WR", "TE", "FLEX", "K", "DEF", "BN", "BN", "BN",
        ]);
        let rendered: Vec<String> = assign(&players, &tpl)
            .entries
            .iter()
            .map(|e| match e.player_id() {
                Some(id) => format!("{} -> {}", e.slot, id),
                None => format!("{} -> [EMPTY]", e.slot),
            })
            .collect();

        insta::assert_json_snapshot!(rendered, @r###"
        [
          "QB -> 1",
          "RB -> 2",
          "RB -> 3",
          "WR -> 4",
          "WR -> 5",
          "TE -> 6",
          "FLEX -> 7",
          "K -> 8",
          "DEF -> 9",
          "BN -> 10",
          "BN -> 11"
        ]
        "###);
    }
}
