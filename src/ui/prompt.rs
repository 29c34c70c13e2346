//! Ask-until-valid prompt over any line source

use std::io::{BufRead, Write};

use crate::actions::catalog::{LegalMove, MoveCatalog};
use crate::command::resolver::resolve;
use crate::core::error::{Result, SelectionError, TankError};
use crate::render::colors::{Palette, ACCENT};
use crate::render::PROMPT;

/// A validated choice and the input that was rejected on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub chosen: LegalMove,
    pub rejected: Vec<SelectionError>,
}

/// Read lines from `input` until one names a move in `catalog`.
///
/// Every rejected line is answered on `output` with the reason and the
/// prompt again. Running out of input is `InputClosed`.
pub fn wait_for_selection<R, W>(
    input: &mut R,
    output: &mut W,
    catalog: &MoveCatalog,
    palette: Palette,
) -> Result<Selection>
where
    R: BufRead,
    W: Write,
{
    let mut rejected = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(TankError::InputClosed);
        }

        match resolve(&line, catalog) {
            Ok(chosen) => return Ok(Selection { chosen, rejected }),
            Err(err) => {
                tracing::warn!(input = line.trim(), "rejected command: {}", err);
                write!(output, "\n{} {} ", err, palette.paint(PROMPT, ACCENT))?;
                output.flush()?;
                rejected.push(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::config::GameConfig;
    use std::io::Cursor;

    fn initial_catalog() -> MoveCatalog {
        MoveCatalog::build(&Board::new(&GameConfig::default()).unwrap())
    }

    #[test]
    fn test_first_line_valid() {
        let catalog = initial_catalog();
        let mut input = Cursor::new("0\n");
        let mut output = Vec::new();

        let selection =
            wait_for_selection(&mut input, &mut output, &catalog, Palette::plain()).unwrap();

        assert_eq!(selection.chosen.id, 0);
        assert!(selection.rejected.is_empty());
        assert!(output.is_empty());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let catalog = initial_catalog();
        let mut input = Cursor::new("x\n5\n0\n");
        let mut output = Vec::new();

        let selection =
            wait_for_selection(&mut input, &mut output, &catalog, Palette::plain()).unwrap();

        assert_eq!(selection.rejected.len(), 2);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "\nYour command is not a digit ! Type your command: \
             \nWrong value ! Possible values are: 0. Type your command: "
        );
    }

    #[test]
    fn test_closed_input() {
        let catalog = initial_catalog();
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();

        let err =
            wait_for_selection(&mut input, &mut output, &catalog, Palette::plain()).unwrap_err();
        assert!(matches!(err, TankError::InputClosed));
    }
}
