//! A single bounded, order-enforcing stack of items

use std::fmt;

use crate::core::error::{Result, TankError};
use crate::core::types::{Direction, Item};

/// Ordered stack of items, bottom first.
///
/// Contents can only be written through [`Tank::seed`] / [`Tank::append`]
/// while the board is being set up. Once the board seals the tank, the only
/// way to change it is [`crate::board::Board::move_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tank {
    number: usize,
    capacity: usize,
    items: Vec<Item>,
    left: Option<usize>,
    right: Option<usize>,
    sealed: bool,
}

impl Tank {
    /// Create an empty, unlinked tank. `number` is the 1-based identity.
    pub fn new(number: usize, capacity: usize) -> Self {
        Self {
            number,
            capacity,
            items: Vec::with_capacity(capacity),
            left: None,
            right: None,
            sealed: false,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items from bottom to top
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `level` counted from the bottom
    pub fn get(&self, level: usize) -> Option<Item> {
        self.items.get(level).copied()
    }

    pub fn top(&self) -> Option<Item> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Board index of the neighbor in `direction`, if linked
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Whether `item` may be placed on top of this tank.
    ///
    /// An empty tank accepts anything; otherwise the item must be strictly
    /// smaller than the current top and the tank must have room.
    pub fn can_add(&self, item: Item) -> bool {
        match self.top() {
            None => true,
            Some(top) => item < top && !self.is_full(),
        }
    }

    /// Bulk-load items during setup, in the order given.
    ///
    /// Items offered after the tank is full are skipped.
    pub fn seed<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Item>,
    {
        self.ensure_unsealed("seed")?;
        for item in items {
            if !self.is_full() {
                self.items.push(item);
            }
        }
        Ok(())
    }

    /// Generic append. Only allowed before the board seals the tank.
    pub fn append(&mut self, item: Item) -> Result<()> {
        self.ensure_unsealed("append")?;
        self.seed(std::iter::once(item))
    }

    fn ensure_unsealed(&self, operation: &str) -> Result<()> {
        if self.sealed {
            return Err(TankError::InvalidOperation(format!(
                "cannot {} on tank {} once the game has started; use a move",
                operation, self.number
            )));
        }
        Ok(())
    }

    pub(crate) fn link(&mut self, direction: Direction, index: usize) -> Result<()> {
        self.ensure_unsealed("link")?;
        let slot = match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        if slot.is_some() {
            return Err(TankError::InvalidOperation(format!(
                "tank {} already has a {} neighbor",
                self.number, direction
            )));
        }
        *slot = Some(index);
        Ok(())
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }

    pub(crate) fn take_top(&mut self) -> Option<Item> {
        self.items.pop()
    }

    pub(crate) fn put_top(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tank-{}-{:?}", self.number, self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tank_accepts_anything() {
        let tank = Tank::new(1, 4);
        assert!(tank.is_empty());
        assert!(!tank.is_full());
        assert!(tank.can_add(1));
        assert!(tank.can_add(100));
    }

    #[test]
    fn test_can_add_requires_smaller_item() {
        let mut tank = Tank::new(1, 4);
        tank.seed([3]).unwrap();
        assert!(tank.can_add(2));
        assert!(!tank.can_add(3));
        assert!(!tank.can_add(4));
    }

    #[test]
    fn test_can_add_refuses_when_full() {
        let mut tank = Tank::new(1, 2);
        tank.seed([5, 4]).unwrap();
        assert!(tank.is_full());
        assert!(!tank.can_add(1));
    }

    #[test]
    fn test_seed_skips_overflow() {
        let mut tank = Tank::new(1, 3);
        tank.seed([9, 8, 7, 6, 5]).unwrap();
        assert_eq!(tank.items(), &[9, 8, 7]);
        assert_eq!(tank.top(), Some(7));
        assert_eq!(tank.get(0), Some(9));
        assert_eq!(tank.get(3), None);
    }

    #[test]
    fn test_sealed_tank_rejects_direct_writes() {
        let mut tank = Tank::new(2, 4);
        tank.append(4).unwrap();
        tank.seal();

        let err = tank.append(1).unwrap_err();
        assert!(matches!(err, TankError::InvalidOperation(_)));
        assert!(matches!(tank.seed([1]), Err(TankError::InvalidOperation(_))));
        assert!(matches!(
            tank.link(Direction::Left, 0),
            Err(TankError::InvalidOperation(_))
        ));
        assert_eq!(tank.items(), &[4]);
    }

    #[test]
    fn test_link_only_once_per_side() {
        let mut tank = Tank::new(2, 4);
        tank.link(Direction::Left, 0).unwrap();
        tank.link(Direction::Right, 2).unwrap();
        assert_eq!(tank.neighbor(Direction::Left), Some(0));
        assert_eq!(tank.neighbor(Direction::Right), Some(2));
        assert!(tank.link(Direction::Right, 3).is_err());
    }

    #[test]
    fn test_display() {
        let mut tank = Tank::new(1, 4);
        tank.seed([4, 3, 2, 1]).unwrap();
        assert_eq!(tank.to_string(), "Tank-1-[4, 3, 2, 1]");
        assert_eq!(Tank::new(3, 4).to_string(), "Tank-3-[]");
    }
}
