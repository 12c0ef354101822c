use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Invalid player position: {0}")]
    InvalidPosition(String),

    #[error("Player identifier must not be empty")]
    EmptyPlayerId,

    #[error("Duplicate player id in roster: {id}")]
    DuplicatePlayerId { id: String },

    #[error("Invalid template label {label:?} at index {index}")]
    InvalidTemplateLabel { index: usize, label: String },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported config format: {path}")]
    ConfigFormat { path: String },

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LineupError {
    /// Errors caused by the caller's roster or template rather than by configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LineupError::InvalidPosition(_)
                | LineupError::EmptyPlayerId
                | LineupError::DuplicatePlayerId { .. }
                | LineupError::InvalidTemplateLabel { .. }
                | LineupError::UnsupportedSchema { .. }
                | LineupError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
