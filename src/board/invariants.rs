//! Board invariants - sanity checks that detect bugs.
//!
//! Moves only go through `Board::move_to`, which checks `can_add`, so these
//! should never trigger on a board reached by play. If they do, the move
//! gate has been bypassed.

use std::fmt;

use crate::board::Board;
use crate::core::types::{Direction, Item};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut push = |message: String| violations.push(InvariantViolation { message });

    let max_items = board.config().max_items;
    let mut seen: Vec<Item> = Vec::with_capacity(max_items);

    for (index, tank) in board.tanks().iter().enumerate() {
        if tank.len() > tank.capacity() {
            push(format!(
                "{} holds {} items, capacity is {}",
                tank,
                tank.len(),
                tank.capacity()
            ));
        }

        if tank.items().windows(2).any(|pair| pair[0] <= pair[1]) {
            push(format!("{} is not strictly descending", tank));
        }

        if tank.number() != index + 1 {
            push(format!("tank at index {} is numbered {}", index, tank.number()));
        }

        let expected_left = index.checked_sub(1);
        let expected_right = (index + 1 < board.len()).then_some(index + 1);
        if tank.neighbor(Direction::Left) != expected_left
            || tank.neighbor(Direction::Right) != expected_right
        {
            push(format!(
                "{} is linked to {:?}/{:?}, expected {:?}/{:?}",
                tank,
                tank.neighbor(Direction::Left),
                tank.neighbor(Direction::Right),
                expected_left,
                expected_right
            ));
        }

        seen.extend_from_slice(tank.items());
    }

    seen.sort_unstable();
    let expected: Vec<Item> = (1..=max_items as Item).collect();
    if seen != expected {
        push(format!(
            "items on the board are {:?}, expected {:?}",
            seen, expected
        ));
    }

    violations
}
