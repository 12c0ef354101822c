//! # Assigner configuration
//!
//! Per-deployment tuning of how slot labels are interpreted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = AssignerConfig::load("config/lineup.yaml")?;
//! let assigner = LineupAssigner::new(&config)?;
//! ```
//!
//! ## Example (YAML)
//!
//! ```yaml
//! label_policy: strict
//! bench_labels: [BN, IR]
//! flex_slots:
//!   REC_FLEX: [WR, TE]
//!   WRRB_FLEX: [WR, RB]
//! ```

use crate::error::{LineupError, Result};
use crate::lineup::{SlotRules, BENCH_LABEL};
use crate::models::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "FF_LINEUP_CONFIG";

/// How the assigner treats template labels it does not recognize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Unknown labels become fixed custom positions
    #[default]
    Lenient,
    /// Unknown labels fail with `InvalidTemplateLabel`
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignerConfig {
    #[serde(default)]
    pub label_policy: LabelPolicy,

    /// Labels that mark bench entries in a slot template (default: `["BN"]`).
    /// `BN` is always a bench label.
    #[serde(default = "default_bench_labels")]
    pub bench_labels: Vec<String>,

    /// Additional flexible slots, label -> eligible positions.
    /// `FLEX` and `SUPER_FLEX` have fixed sets and cannot be redefined.
    #[serde(default)]
    pub flex_slots: BTreeMap<String, Vec<Position>>,
}

fn default_bench_labels() -> Vec<String> {
    vec!["BN".to_string()]
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            label_policy: LabelPolicy::Lenient,
            bench_labels: default_bench_labels(),
            flex_slots: BTreeMap::new(),
        }
    }
}

impl AssignerConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LineupError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let config = match extension.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => {
                return Err(LineupError::ConfigFormat {
                    path: path.display().to_string(),
                })
            }
        };

        log::info!("Loaded assigner config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: AssignerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AssignerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `FF_LINEUP_CONFIG`, if set
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_path_var(env::var(CONFIG_PATH_ENV).ok())
    }

    fn from_path_var(value: Option<String>) -> Result<Option<Self>> {
        let Some(path) = value else {
            return Ok(None);
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }
        log::debug!("{CONFIG_PATH_ENV}='{path}'");
        Self::load(path).map(Some)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bench_labels.is_empty() {
            return Err(LineupError::ConfigValidation(
                "bench_labels must contain at least one label".to_string(),
            ));
        }
        if self.bench_labels.iter().any(|label| label.trim().is_empty()) {
            return Err(LineupError::ConfigValidation(
                "bench_labels must not contain blank labels".to_string(),
            ));
        }

        for (label, eligible) in &self.flex_slots {
            if label.trim().is_empty() {
                return Err(LineupError::ConfigValidation(
                    "flex_slots must not contain a blank label".to_string(),
                ));
            }
            if SlotRules::is_builtin_flex(label) {
                return Err(LineupError::ConfigValidation(format!(
                    "flex slot {label} is built in and cannot be redefined"
                )));
            }
            if eligible.is_empty() {
                return Err(LineupError::ConfigValidation(format!(
                    "flex slot {label} must list at least one eligible position"
                )));
            }
            if self
                .bench_labels
                .iter()
                .map(String::as_str)
                .chain([BENCH_LABEL])
                .any(|bn| bn.trim().eq_ignore_ascii_case(label.trim()))
            {
                return Err(LineupError::ConfigValidation(format!(
                    "{label} cannot be both a bench label and a flex slot"
                )));
            }
        }

        Ok(())
    }
}
