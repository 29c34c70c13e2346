//! The line of tanks and the single validated move primitive
//!
//! Tanks refer to their neighbors by board index; the board owns every tank.

pub mod invariants;
pub mod tank;

pub use invariants::{check_invariants, InvariantViolation};
pub use tank::Tank;

use crate::core::config::GameConfig;
use crate::core::error::{Result, TankError};
use crate::core::types::{Direction, Item};

/// A move that was applied to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    tanks: Vec<Tank>,
    generation: u64,
}

impl Board {
    /// Build the starting board: every item on the first tank, largest at
    /// the bottom.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let mut tanks = Self::linked_tanks(config)?;
        let items = (1..=config.max_items as Item).rev();
        tanks[0].seed(items)?;
        Ok(Self::sealed(*config, tanks))
    }

    /// Build a board with explicit contents, one bottom-to-top list per tank.
    ///
    /// The layout must hold exactly the items `1..=max_items`, each tank
    /// strictly descending and within capacity.
    pub fn from_layout(config: &GameConfig, layout: &[Vec<Item>]) -> Result<Self> {
        if layout.len() != config.max_tanks {
            return Err(TankError::InvalidConfig(format!(
                "layout has {} tanks, expected {}",
                layout.len(),
                config.max_tanks
            )));
        }
        if let Some(column) = layout.iter().find(|c| c.len() > config.max_items) {
            return Err(TankError::InvalidConfig(format!(
                "layout column {:?} exceeds capacity {}",
                column, config.max_items
            )));
        }

        let mut tanks = Self::linked_tanks(config)?;
        for (tank, column) in tanks.iter_mut().zip(layout) {
            tank.seed(column.iter().copied())?;
        }

        let board = Self::sealed(*config, tanks);
        if let Some(violation) = check_invariants(&board).into_iter().next() {
            return Err(TankError::InvalidConfig(violation.to_string()));
        }
        Ok(board)
    }

    fn linked_tanks(config: &GameConfig) -> Result<Vec<Tank>> {
        config.validate()?;

        let mut tanks: Vec<Tank> = (1..=config.max_tanks)
            .map(|number| Tank::new(number, config.max_items))
            .collect();

        for index in 1..tanks.len() {
            tanks[index - 1].link(Direction::Right, index)?;
            tanks[index].link(Direction::Left, index - 1)?;
        }

        Ok(tanks)
    }

    fn sealed(config: GameConfig, mut tanks: Vec<Tank>) -> Self {
        for tank in &mut tanks {
            tank.seal();
        }
        Self {
            config,
            tanks,
            generation: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn tank(&self, index: usize) -> Option<&Tank> {
        self.tanks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }

    pub fn last(&self) -> Option<&Tank> {
        self.tanks.last()
    }

    /// Number of moves applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Owned copy of the contents, bottom-to-top per tank
    pub fn snapshot(&self) -> Vec<Vec<Item>> {
        self.tanks.iter().map(|t| t.items().to_vec()).collect()
    }

    /// Mutable access to a tank, for the setup-only write paths.
    ///
    /// Tanks are sealed once the board exists, so any write through this
    /// handle fails with `InvalidOperation`.
    pub fn tank_mut(&mut self, index: usize) -> Option<&mut Tank> {
        self.tanks.get_mut(index)
    }

    /// Whether moving the top of `index` toward `direction` would succeed
    pub fn is_legal(&self, index: usize, direction: Direction) -> bool {
        self.check_move(index, direction).is_ok()
    }

    fn check_move(&self, index: usize, direction: Direction) -> Result<(usize, Item)> {
        let illegal = |item: Option<Item>, reason: String| TankError::IllegalMove {
            tank: index + 1,
            direction,
            item,
            reason,
        };

        let source = self
            .tanks
            .get(index)
            .ok_or_else(|| illegal(None, format!("no tank at index {}", index)))?;
        let item = source
            .top()
            .ok_or_else(|| illegal(None, "tank is empty".into()))?;
        let target_index = source
            .neighbor(direction)
            .ok_or_else(|| illegal(Some(item), format!("no tank to the {}", direction)))?;
        let target = &self.tanks[target_index];

        if !target.can_add(item) {
            return Err(illegal(Some(item), format!("{} cannot take it", target)));
        }

        Ok((target_index, item))
    }

    /// Move the top item of tank `index` into its neighbor in `direction`.
    ///
    /// This is the only mutation available once the game has started. On
    /// failure both tanks are left unchanged.
    pub fn move_to(&mut self, index: usize, direction: Direction) -> Result<MoveRecord> {
        let (target_index, item) = match self.check_move(index, direction) {
            Ok(found) => found,
            Err(err) => {
                let neighbor = self
                    .tanks
                    .get(index)
                    .and_then(|t| t.neighbor(direction))
                    .map(|n| self.tanks[n].to_string())
                    .unwrap_or_else(|| "None".to_string());
                let top = self
                    .tanks
                    .get(index)
                    .and_then(Tank::top)
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "None".to_string());
                tracing::warn!("Wrong direction: {} - {} - {}", direction, neighbor, top);
                return Err(err);
            }
        };

        let moved = self.tanks[index].take_top();
        debug_assert_eq!(moved, Some(item));
        self.tanks[target_index].put_top(item);
        self.generation += 1;

        let record = MoveRecord {
            from: index,
            to: target_index,
            direction,
            item,
        };
        tracing::info!(
            item,
            from = index + 1,
            to = target_index + 1,
            generation = self.generation,
            "moved item"
        );
        Ok(record)
    }
}
