//! Core type definitions used throughout the codebase

use std::fmt;

/// Value stored in a tank. Larger items must sit below smaller ones.
pub type Item = u32;

/// Which neighbor a move targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by the move catalog
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_order_and_names() {
        assert_eq!(Direction::ALL, [Direction::Left, Direction::Right]);
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
