//! Command pipeline
//!
//! Typed token -> resolver -> LegalMove -> CommandExecutor -> Board::move_to

pub mod executor;
pub mod resolver;

pub use executor::{CommandExecutor, ExecutionResult};
pub use resolver::resolve;
