//! Legal move enumeration
//!
//! The catalog is rebuilt every turn. Identifiers are positions in the list
//! and only mean something for the board generation that produced them.

use std::fmt;

use crate::board::Board;
use crate::core::types::Direction;

/// One currently-legal move with its menu identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub id: usize,
    pub tank_index: usize,
    pub direction: Direction,
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: tank {} move item to {}",
            self.id,
            self.tank_index + 1,
            self.direction
        )
    }
}

/// Ordered list of the legal moves for one board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<LegalMove>,
    generation: u64,
}

impl MoveCatalog {
    /// Enumerate legal moves tank by tank, left before right.
    pub fn build(board: &Board) -> Self {
        let mut moves = Vec::new();

        for (tank_index, tank) in board.tanks().iter().enumerate() {
            for direction in Direction::ALL {
                let neighbor = tank.neighbor(direction).and_then(|n| board.tank(n));

                tracing::debug!(
                    tank = %tank,
                    direction = %direction,
                    neighbor = ?neighbor.map(ToString::to_string),
                    "considering move"
                );

                let legal = match (tank.top(), neighbor) {
                    (Some(item), Some(inner)) => inner.can_add(item),
                    _ => false,
                };

                if legal {
                    let candidate = LegalMove {
                        id: moves.len(),
                        tank_index,
                        direction,
                    };
                    tracing::debug!("{}", candidate);
                    moves.push(candidate);
                }
            }
        }

        Self {
            moves,
            generation: board.generation(),
        }
    }

    pub fn moves(&self) -> &[LegalMove] {
        &self.moves
    }

    pub fn get(&self, id: usize) -> Option<&LegalMove> {
        self.moves.get(id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Identifiers a player may type this turn
    pub fn ids(&self) -> Vec<usize> {
        (0..self.moves.len()).collect()
    }

    /// Board generation this catalog was built from
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this catalog still describes `board`
    pub fn is_current(&self, board: &Board) -> bool {
        self.generation == board.generation()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegalMove> {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn pairs(catalog: &MoveCatalog) -> Vec<(usize, Direction)> {
        catalog.iter().map(|m| (m.tank_index, m.direction)).collect()
    }

    #[test]
    fn test_initial_catalog_has_single_move() {
        let board = Board::new(&GameConfig::default()).unwrap();
        let catalog = MoveCatalog::build(&board);
        assert_eq!(pairs(&catalog), vec![(0, Direction::Right)]);
        assert_eq!(catalog.get(0).unwrap().id, 0);
        assert_eq!(catalog.ids(), vec![0]);
    }

    #[test]
    fn test_catalog_order_is_tank_then_left_right() {
        let config = GameConfig::default();
        let board = Board::from_layout(&config, &[vec![4, 3], vec![2], vec![1]]).unwrap();
        let catalog = MoveCatalog::build(&board);
        assert_eq!(
            pairs(&catalog),
            vec![(1, Direction::Left), (2, Direction::Left)]
        );
        let ids: Vec<usize> = catalog.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_catalog_after_first_move() {
        let mut board = Board::new(&GameConfig::default()).unwrap();
        board.move_to(0, Direction::Right).unwrap();
        let catalog = MoveCatalog::build(&board);

        // Tank 1's top (2) cannot go onto 1, and tank 3 is not adjacent
        assert!(!catalog.iter().any(|m| m.tank_index == 0));
        assert_eq!(
            pairs(&catalog),
            vec![(1, Direction::Left), (1, Direction::Right)]
        );
    }

    #[test]
    fn test_menu_line_format() {
        let m = LegalMove {
            id: 3,
            tank_index: 1,
            direction: Direction::Left,
        };
        assert_eq!(m.to_string(), "3: tank 2 move item to left");
    }

    #[test]
    fn test_catalog_tracks_generation() {
        let mut board = Board::new(&GameConfig::default()).unwrap();
        let catalog = MoveCatalog::build(&board);
        assert!(catalog.is_current(&board));
        board.move_to(0, Direction::Right).unwrap();
        assert!(!catalog.is_current(&board));
        assert_eq!(MoveCatalog::build(&board).generation(), 1);
    }
}
