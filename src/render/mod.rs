//! Text rendering of the board and the command menu
//!
//! This module is READ-ONLY - it never modifies game state.

pub mod colors;

use std::io::{self, Write};

use crate::actions::catalog::{LegalMove, MoveCatalog};
use crate::board::Board;
use colors::{Palette, ACCENT, ITEM, WIN};

/// Prompt shown after the menu and after every rejected command
pub const PROMPT: &str = "Type your command:";

/// Draw tanks as columns, top row first. Empty slots are dots.
pub fn draw_tanks<W: Write>(out: &mut W, board: &Board, palette: Palette) -> io::Result<()> {
    let height = board.config().max_items;
    for level in (0..height).rev() {
        for tank in board.tanks() {
            match tank.get(level) {
                Some(item) => write!(out, "{}", palette.paint(item, ITEM))?,
                None => write!(out, ".")?,
            }
            write!(out, "  ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One menu line: `{id}: tank {n} move item to {direction}`
pub fn command_line(legal: &LegalMove, palette: Palette) -> String {
    format!(
        "{}: {} move item to {}",
        palette.paint(legal.id, ACCENT),
        palette.paint(format!("tank {}", legal.tank_index + 1), ITEM),
        palette.paint(legal.direction, ITEM)
    )
}

pub fn draw_commands<W: Write>(
    out: &mut W,
    catalog: &MoveCatalog,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out, "{}", palette.paint("COMMANDS", ACCENT))?;
    writeln!(out, "{}", palette.paint("--------", ACCENT))?;
    for legal in catalog.iter() {
        writeln!(out, "{}", command_line(legal, palette))?;
    }
    Ok(())
}

/// Full turn screen: board, menu, prompt. Does not end with a newline.
pub fn draw_turn<W: Write>(
    out: &mut W,
    board: &Board,
    catalog: &MoveCatalog,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out)?;
    draw_tanks(out, board, palette)?;
    writeln!(out)?;
    draw_commands(out, catalog, palette)?;
    write!(out, "\n{} ", palette.paint(PROMPT, ACCENT))?;
    out.flush()
}

pub fn draw_win<W: Write>(
    out: &mut W,
    board: &Board,
    moves: u64,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out)?;
    draw_tanks(out, board, palette)?;
    writeln!(out)?;
    writeln!(out, "{}", palette.paint("You won !", WIN))?;
    writeln!(out, "Solved in {} moves.", moves)?;
    out.flush()
}
