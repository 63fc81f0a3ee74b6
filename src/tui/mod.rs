//! TUI module for the name prompt.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Screen, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Style configuration passed into rendering
//! - `run`: Effects (terminal, key reader, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
