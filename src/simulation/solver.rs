//! Breadth-first search for a shortest winning move sequence
//!
//! Moves are only between neighbors, so with three tanks this is the
//! adjacent-peg Tower of Hanoi and needs `3^n - 1` moves for `n` items.

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::actions::catalog::MoveCatalog;
use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{Direction, Item};
use crate::simulation::{check_win_condition, GameOutcome};

/// Upper bound on explored board states before giving up
pub const MAX_SEARCH_STATES: usize = 2_000_000;

/// A move independent of any turn's menu numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveStep {
    pub tank_index: usize,
    pub direction: Direction,
}

impl MoveStep {
    pub fn new(tank_index: usize, direction: Direction) -> Self {
        Self {
            tank_index,
            direction,
        }
    }
}

type Layout = Vec<Vec<Item>>;

/// Shortest solution from the starting board of `config`
pub fn shortest_solution(config: &GameConfig) -> Result<Option<Vec<MoveStep>>> {
    let start = Board::new(config)?;
    Ok(solve_from(&start))
}

/// Shortest sequence of moves that fills the last tank, starting at `start`.
///
/// Returns `None` if no winning state is reachable within
/// [`MAX_SEARCH_STATES`].
pub fn solve_from(start: &Board) -> Option<Vec<MoveStep>> {
    if matches!(check_win_condition(start), GameOutcome::Won { .. }) {
        return Some(Vec::new());
    }

    let mut parents: AHashMap<Layout, Option<(Layout, MoveStep)>> = AHashMap::new();
    parents.insert(start.snapshot(), None);

    let mut queue = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(board) = queue.pop_front() {
        let from = board.snapshot();

        for legal in MoveCatalog::build(&board).iter() {
            let mut next = board.clone();
            if next.move_to(legal.tank_index, legal.direction).is_err() {
                continue;
            }

            let layout = next.snapshot();
            if parents.contains_key(&layout) {
                continue;
            }

            let step = MoveStep::new(legal.tank_index, legal.direction);
            parents.insert(layout.clone(), Some((from.clone(), step)));

            if next.last().is_some_and(|t| t.is_full()) {
                tracing::debug!(states = parents.len(), "solution found");
                return Some(unwind(&parents, layout));
            }

            if parents.len() >= MAX_SEARCH_STATES {
                tracing::warn!(states = parents.len(), "search limit reached");
                return None;
            }
            queue.push_back(next);
        }
    }

    None
}

fn unwind(parents: &AHashMap<Layout, Option<(Layout, MoveStep)>>, goal: Layout) -> Vec<MoveStep> {
    let mut steps = Vec::new();
    let mut cursor = goal;
    while let Some(Some((previous, step))) = parents.get(&cursor) {
        steps.push(*step);
        cursor = previous.clone();
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_two_tanks() {
        let steps = shortest_solution(&GameConfig::new(1, 2)).unwrap().unwrap();
        assert_eq!(steps, vec![MoveStep::new(0, Direction::Right)]);
    }

    #[test]
    fn test_adjacent_hanoi_lengths() {
        for items in 1..=4u32 {
            let config = GameConfig::new(items as usize, 3);
            let steps = shortest_solution(&config).unwrap().unwrap();
            assert_eq!(steps.len(), 3usize.pow(items) - 1, "{} items", items);
        }
    }

    #[test]
    fn test_two_tanks_with_many_items_is_unsolvable() {
        // The second item can never get under the first on two tanks
        let steps = shortest_solution(&GameConfig::new(2, 2)).unwrap();
        assert!(steps.is_none());
    }

    #[test]
    fn test_already_won() {
        let config = GameConfig::default();
        let board = Board::from_layout(&config, &[vec![], vec![], vec![4, 3, 2, 1]]).unwrap();
        assert_eq!(solve_from(&board), Some(Vec::new()));
    }
}
