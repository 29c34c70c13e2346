//! Tanks - a stacking puzzle played between adjacent tanks

pub mod actions;
pub mod board;
pub mod command;
pub mod core;
pub mod render;
pub mod simulation;
pub mod ui;
