pub mod catalog;

pub use catalog::{LegalMove, MoveCatalog};
