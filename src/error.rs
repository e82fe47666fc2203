use thiserror::Error;

use crate::state_machine::{State, Symbol};

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("No valid transition for state '{state}' and symbol '{symbol}'")]
    InvalidTransition { state: State, symbol: Symbol },

    #[error("Head left the tape in state '{state}' at position {position}")]
    HeadOutOfBounds { state: State, position: isize },

    #[error("Cell {position} is past the end of a tape of {len} cells")]
    CellOutOfRange { position: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
