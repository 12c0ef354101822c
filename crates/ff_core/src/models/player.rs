use super::Position;
use crate::error::LineupError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Roster-unique player identifier.
///
/// Platforms hand these out as numeric strings; hand-written rosters often
/// use plain numbers. Both are accepted, and an empty id is rejected when
/// the roster is deserialized rather than deep inside the assigner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct PlayerId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlayerId {
    Text(String),
    Number(u64),
}

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self, LineupError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LineupError::EmptyPlayerId);
        }
        Ok(PlayerId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = match RawPlayerId::deserialize(deserializer)? {
            RawPlayerId::Text(text) => text,
            RawPlayerId::Number(n) => n.to_string(),
        };
        PlayerId::new(id).map_err(de::Error::custom)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

/// A rostered player as supplied by the data-fetching layer.
///
/// Only `id`, `position` and `is_starter` matter to slot assignment. The
/// remaining fields, including anything captured in `extra`, are carried
/// through to the lineup untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    #[serde(alias = "starter", alias = "isStarter")]
    pub is_starter: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_status: Option<String>,

    /// News, rankings and any other upstream fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RosterPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position, is_starter: bool) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            is_starter,
            team: None,
            projected_points: None,
            actual_points: None,
            injury_status: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_projection(mut self, points: f64) -> Self {
        self.projected_points = Some(points);
        self
    }

    pub fn with_injury(mut self, status: impl Into<String>) -> Self {
        self.injury_status = Some(status.into());
        self
    }

    pub fn is_injured(&self) -> bool {
        self.injury_status.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_id_accepts_numbers_and_strings() {
        let numeric: PlayerId = serde_json::from_value(json!(4034)).unwrap();
        let text: PlayerId = serde_json::from_value(json!("4034")).unwrap();
        assert_eq!(numeric, text);
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!("4034"));
    }

    #[test]
    fn test_empty_player_id_rejected() {
        assert!(matches!(PlayerId::new("  "), Err(LineupError::EmptyPlayerId)));
        assert!(serde_json::from_value::<PlayerId>(json!("")).is_err());
    }

    #[test]
    fn test_roster_player_keeps_unknown_fields() {
        let value = json!({
            "id": "6794",
            "name": "Justin Jefferson",
            "position": "WR",
            "starter": true,
            "team": "MIN",
            "projected_points": 19.4,
            "news": [{"title": "Full practice", "severity": "low"}],
            "consensus_rank": 3
        });

        let player: RosterPlayer = serde_json::from_value(value.clone()).unwrap();
        assert!(player.is_starter);
        assert_eq!(player.position, Position::WR);
        assert_eq!(player.team.as_deref(), Some("MIN"));
        assert_eq!(player.extra["consensus_rank"], json!(3));

        let round_trip = serde_json::to_value(&player).unwrap();
        assert_eq!(round_trip["news"], value["news"]);
        assert_eq!(round_trip["is_starter"], json!(true));
    }

    #[test]
    fn test_is_injured_ignores_blank_status() {
        let id = PlayerId::new("1").unwrap();
        let player = RosterPlayer::new(id, "A", Position::RB, true);
        assert!(!player.is_injured());
        assert!(player.clone().with_injury("Questionable").is_injured());
        assert!(!player.with_injury(" ").is_injured());
    }
}
