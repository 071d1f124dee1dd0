use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ADR {0:04} not found")]
    NotFound(u32),

    #[error("{side} ADR {number:04} not found")]
    LinkEndpointNotFound { side: &'static str, number: u32 },

    #[error("no ADRs found")]
    NoAdrs,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No .stamp.yaml found (run 'stamp init' first)")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl StampError {
    /// True when a requested ADR number does not exist in the store.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StampError::NotFound(_) | StampError::LinkEndpointNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StampError>;
