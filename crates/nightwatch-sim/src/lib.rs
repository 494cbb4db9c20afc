//! Simulation engine for Night Watch.
//!
//! Owns the session and day/night/result state machines, the economy, and
//! the hecs world of decorative night enemies. Runs one tick per call and
//! produces GameStateSnapshots for the shell.

pub mod combat;
pub mod economy;
pub mod engine;
pub mod event_table;
pub mod systems;

pub use engine::GameEngine;
pub use nightwatch_core as core;

#[cfg(test)]
mod tests;
