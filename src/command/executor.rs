//! Command execution - applies a resolved move to the board

use crate::actions::catalog::{LegalMove, MoveCatalog};
use crate::board::{Board, MoveRecord};
use crate::core::error::TankError;

/// Applies chosen moves through the board's move primitive
pub struct CommandExecutor;

impl CommandExecutor {
    /// Apply `chosen`, which must come from `catalog` built for this turn.
    ///
    /// Never panics: a refused move is reported in the result and the board
    /// is left as it was.
    pub fn execute(
        board: &mut Board,
        catalog: &MoveCatalog,
        chosen: &LegalMove,
    ) -> ExecutionResult {
        if !catalog.is_current(board) {
            let err = TankError::StaleCatalog {
                catalog: catalog.generation(),
                board: board.generation(),
            };
            tracing::warn!("{}", err);
            return ExecutionResult::failed(err);
        }

        if catalog.get(chosen.id) != Some(chosen) {
            let err = TankError::InvalidOperation(format!(
                "move {:?} is not part of this turn's command list",
                chosen
            ));
            tracing::warn!("{}", err);
            return ExecutionResult::failed(err);
        }

        match board.move_to(chosen.tank_index, chosen.direction) {
            Ok(record) => ExecutionResult {
                applied: Some(record),
                error: None,
            },
            Err(err) => {
                // The catalog listed it, so catalog and tank rules disagree
                tracing::error!(command = %chosen, "listed move was refused: {}", err);
                ExecutionResult::failed(err)
            }
        }
    }
}

/// Result of executing a command
#[derive(Debug)]
pub struct ExecutionResult {
    pub applied: Option<MoveRecord>,
    pub error: Option<TankError>,
}

impl ExecutionResult {
    fn failed(err: TankError) -> Self {
        Self {
            applied: None,
            error: Some(err),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.applied.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::types::Direction;

    #[test]
    fn test_execute_listed_move() {
        let mut board = Board::new(&GameConfig::default()).unwrap();
        let catalog = MoveCatalog::build(&board);
        let chosen = *catalog.get(0).unwrap();

        let result = CommandExecutor::execute(&mut board, &catalog, &chosen);

        assert!(result.is_applied());
        assert!(result.error.is_none());
        assert_eq!(board.snapshot(), vec![vec![4, 3, 2], vec![1], vec![]]);
    }

    #[test]
    fn test_stale_catalog_is_refused() {
        let mut board = Board::new(&GameConfig::default()).unwrap();
        let stale = MoveCatalog::build(&board);
        let chosen = *stale.get(0).unwrap();
        CommandExecutor::execute(&mut board, &stale, &chosen);
        let before = board.clone();

        let result = CommandExecutor::execute(&mut board, &stale, &chosen);

        assert!(!result.is_applied());
        assert!(matches!(result.error, Some(TankError::StaleCatalog { catalog: 0, board: 1 })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_foreign_move_is_refused() {
        let mut board = Board::new(&GameConfig::default()).unwrap();
        let catalog = MoveCatalog::build(&board);
        let forged = LegalMove {
            id: 0,
            tank_index: 0,
            direction: Direction::Left,
        };

        let result = CommandExecutor::execute(&mut board, &catalog, &forged);

        assert!(!result.is_applied());
        assert!(matches!(result.error, Some(TankError::InvalidOperation(_))));
        assert_eq!(board.generation(), 0);
        assert_eq!(board.snapshot(), vec![vec![4, 3, 2, 1], vec![], vec![]]);
    }
}
