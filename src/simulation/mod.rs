//! Turn loop, terminal condition and the shortest-solution search

pub mod game;
pub mod solver;

pub use game::{Game, TurnOutcome};
pub use solver::{shortest_solution, solve_from, MoveStep};

use crate::actions::catalog::MoveCatalog;
use crate::board::{Board, Tank};

/// Where a game stands after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    /// The last tank is full
    Won { moves: u64 },
    /// No legal move exists. Unreachable from a valid starting board.
    Stalled { moves: u64 },
}

/// Check the terminal condition: the last tank in board order is full
pub fn check_win_condition(board: &Board) -> GameOutcome {
    let moves = board.generation();
    if board.last().is_some_and(Tank::is_full) {
        return GameOutcome::Won { moves };
    }
    if MoveCatalog::build(board).is_empty() {
        return GameOutcome::Stalled { moves };
    }
    GameOutcome::InProgress
}
