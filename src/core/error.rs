use thiserror::Error;

use crate::core::types::{Direction, Item};

#[derive(Error, Debug)]
pub enum TankError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Illegal move: tank {tank} cannot move item {item:?} to {direction} ({reason})")]
    IllegalMove {
        tank: usize,
        direction: Direction,
        item: Option<Item>,
        reason: String,
    },

    #[error("Stale command list: built for move {catalog}, board is at move {board}")]
    StaleCatalog { catalog: u64, board: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input closed before a command was chosen")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TankError>;

/// Recoverable problems with a player's typed command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Your command is not a digit !")]
    NotAnInteger(String),

    #[error("Wrong value ! Possible values are: {}.", join_ids(.valid))]
    OutOfRange { value: String, valid: Vec<usize> },
}

fn join_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_lists_valid_ids() {
        let err = SelectionError::OutOfRange {
            value: "9".to_string(),
            valid: vec![0, 1, 2],
        };
        assert_eq!(err.to_string(), "Wrong value ! Possible values are: 0, 1, 2.");
    }

    #[test]
    fn test_out_of_range_with_no_moves() {
        let err = SelectionError::OutOfRange {
            value: "0".to_string(),
            valid: Vec::new(),
        };
        assert_eq!(err.to_string(), "Wrong value ! Possible values are: .");
    }
}
