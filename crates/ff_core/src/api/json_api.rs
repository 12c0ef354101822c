use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config_env::assigner_from_env;
use crate::config::LabelPolicy;
use crate::error::{LineupError, Result};
use crate::lineup::{Lineup, LineupAssigner, TeamSummary};
use crate::models::RosterPlayer;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    pub players: Vec<RosterPlayer>,
    #[serde(default, alias = "slot_template")]
    pub roster_positions: Vec<String>,
    /// Overrides the configured label policy for this request
    #[serde(default)]
    pub label_policy: Option<LabelPolicy>,
}

#[derive(Debug, Serialize)]
pub struct LineupResponse {
    pub schema_version: u8,
    pub lineup: Lineup,
    pub summary: TeamSummary,
    pub generated_at: DateTime<Utc>,
}

/// Assign a lineup from a JSON request, returning the JSON response.
///
/// The assigner honors `FF_LINEUP_CONFIG` when it is set.
pub fn assign_lineup_json(request_json: &str) -> Result<String> {
    let assigner = assigner_from_env()?;
    assign_lineup_json_with(&assigner, request_json)
}

pub fn assign_lineup_json_with(assigner: &LineupAssigner, request_json: &str) -> Result<String> {
    let response = assign_lineup_request(assigner, serde_json::from_str(request_json)?)?;
    Ok(serde_json::to_string(&response)?)
}

pub fn assign_lineup_request(assigner: &LineupAssigner, request: LineupRequest) -> Result<LineupResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(LineupError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let lineup = match request.label_policy {
        Some(policy) => assigner
            .clone()
            .with_policy(policy)
            .assign(&request.players, &request.roster_positions)?,
        None => assigner.assign(&request.players, &request.roster_positions)?,
    };
    let summary = TeamSummary::from_lineup(&lineup);

    Ok(LineupResponse {
        schema_version: SCHEMA_VERSION,
        lineup,
        summary,
        generated_at: Utc::now(),
    })
}
