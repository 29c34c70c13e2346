pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{Result, SelectionError, TankError};
pub use types::{Direction, Item};
