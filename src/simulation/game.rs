//! The turn loop: catalog, render, prompt, execute, check

use std::io::{BufRead, Write};

use crate::actions::catalog::MoveCatalog;
use crate::board::{Board, MoveRecord};
use crate::command::executor::CommandExecutor;
use crate::core::config::GameConfig;
use crate::core::error::{Result, TankError};
use crate::render::{self, colors::Palette};
use crate::simulation::solver::MoveStep;
use crate::simulation::{check_win_condition, GameOutcome};
use crate::ui::prompt::wait_for_selection;

/// What one interactive turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved(MoveRecord),
    /// The chosen move was refused; the board is unchanged
    Refused(String),
    Won { moves: u64 },
    Stalled { moves: u64 },
}

/// One game in progress. Owns the board and hands it to each stage per turn.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    palette: Palette,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            board: Board::new(config)?,
            palette: Palette::default(),
        })
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        check_win_condition(&self.board)
    }

    /// Play one turn against `input`, drawing to `output`.
    pub fn play_turn<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<TurnOutcome>
    where
        R: BufRead,
        W: Write,
    {
        let catalog = MoveCatalog::build(&self.board);
        if catalog.is_empty() {
            tracing::error!(board = ?self.board.snapshot(), "no legal moves left");
            return Ok(TurnOutcome::Stalled {
                moves: self.board.generation(),
            });
        }

        render::draw_turn(output, &self.board, &catalog, self.palette)?;
        let selection = wait_for_selection(input, output, &catalog, self.palette)?;

        let result = CommandExecutor::execute(&mut self.board, &catalog, &selection.chosen);
        Ok(match (result.applied, result.error) {
            (Some(record), _) => match self.outcome() {
                GameOutcome::Won { moves } => TurnOutcome::Won { moves },
                _ => TurnOutcome::Moved(record),
            },
            (None, err) => TurnOutcome::Refused(err.map(|e| e.to_string()).unwrap_or_default()),
        })
    }

    /// Play turns until the last tank is full.
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<GameOutcome>
    where
        R: BufRead,
        W: Write,
    {
        if let GameOutcome::Won { moves } = self.outcome() {
            render::draw_win(output, &self.board, moves, self.palette)?;
            return Ok(GameOutcome::Won { moves });
        }

        loop {
            match self.play_turn(input, output)? {
                TurnOutcome::Won { moves } => {
                    tracing::info!(moves, "game won");
                    render::draw_win(output, &self.board, moves, self.palette)?;
                    return Ok(GameOutcome::Won { moves });
                }
                TurnOutcome::Stalled { moves } => return Ok(GameOutcome::Stalled { moves }),
                TurnOutcome::Moved(_) | TurnOutcome::Refused(_) => {}
            }
        }
    }

    /// Apply `steps` without prompting, stopping as soon as the game is won.
    ///
    /// Each step must be listed by that turn's catalog, otherwise the
    /// sequence stops with `IllegalMove`.
    pub fn play_sequence(&mut self, steps: &[MoveStep]) -> Result<GameOutcome> {
        for step in steps {
            let catalog = MoveCatalog::build(&self.board);
            let chosen = catalog
                .iter()
                .find(|m| m.tank_index == step.tank_index && m.direction == step.direction)
                .copied()
                .ok_or_else(|| TankError::IllegalMove {
                    tank: step.tank_index + 1,
                    direction: step.direction,
                    item: self.board.tank(step.tank_index).and_then(|t| t.top()),
                    reason: "not in this turn's command list".into(),
                })?;

            let result = CommandExecutor::execute(&mut self.board, &catalog, &chosen);
            if let Some(err) = result.error {
                return Err(err);
            }

            if let outcome @ GameOutcome::Won { .. } = self.outcome() {
                return Ok(outcome);
            }
        }
        Ok(self.outcome())
    }

    /// Show the final board and win banner after a headless run
    pub fn draw_result<W: Write>(&self, output: &mut W) -> Result<()> {
        if let GameOutcome::Won { moves } = self.outcome() {
            render::draw_win(output, &self.board, moves, self.palette)?;
        }
        Ok(())
    }
}
