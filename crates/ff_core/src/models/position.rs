use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary roster position of a fantasy player.
///
/// The six standard positions are named variants. Anything else a league
/// or platform uses (IDP tags, franchise-specific defense tags) is kept as
/// an upper-cased `Custom` tag so it can still be matched against a slot
/// with the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
    Custom(String),
}

impl Position {
    pub fn label(&self) -> &str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
            Position::Custom(tag) => tag,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Position::Custom(_))
    }

    /// Skill positions that can fill a FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::RB | Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase();
        match tag.as_str() {
            "" => Err(LineupError::InvalidPosition(s.to_string())),
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DST" | "DEF" | "D/ST" => Ok(Position::DST),
            _ => Ok(Position::Custom(tag)),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = LineupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Custom(tag) => tag,
            other => other.label().to_string(),
        }
    }
}
