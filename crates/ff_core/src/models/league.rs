use serde::{Deserialize, Serialize};

/// League configuration relevant to lineup display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub league_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Ordered lineup-slot template, e.g. `["QB", "RB", "RB", "WR", "FLEX", "BN"]`
    #[serde(default, alias = "slot_template")]
    pub roster_positions: Vec<String>,
}

impl LeagueSettings {
    pub fn slot_template(&self) -> &[String] {
        &self.roster_positions
    }
}
