use crate::config::AssignerConfig;
use crate::error::Result;
use crate::lineup::LineupAssigner;

/// Assigner built from `FF_LINEUP_CONFIG` when set, defaults otherwise.
pub(crate) fn assigner_from_env() -> Result<LineupAssigner> {
    match AssignerConfig::from_env()? {
        Some(config) => LineupAssigner::new(&config),
        None => Ok(LineupAssigner::default()),
    }
}
