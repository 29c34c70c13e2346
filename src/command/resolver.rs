//! Selection resolution - converts a typed token to a legal move

use std::num::IntErrorKind;

use crate::actions::catalog::{LegalMove, MoveCatalog};
use crate::core::error::SelectionError;

/// Resolve a raw token against the current turn's catalog.
///
/// Surrounding whitespace is ignored. Anything that is not an integer is
/// `NotAnInteger`; an integer that does not index the catalog (negative
/// and integers too large to represent included) is `OutOfRange`.
pub fn resolve(token: &str, catalog: &MoveCatalog) -> Result<LegalMove, SelectionError> {
    let trimmed = token.trim();
    let out_of_range = || SelectionError::OutOfRange {
        value: trimmed.to_string(),
        valid: catalog.ids(),
    };

    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => return Err(out_of_range()),
            _ => return Err(SelectionError::NotAnInteger(trimmed.to_string())),
        },
    };

    usize::try_from(value)
        .ok()
        .and_then(|id| catalog.get(id))
        .copied()
        .ok_or_else(out_of_range)
}
