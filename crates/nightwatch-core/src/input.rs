//! Per-tick input snapshots and edge derivation.
//!
//! The shell samples the keyboard once per tick into a full `ButtonState`.
//! The engine compares it against the previous tick's snapshot and acts only
//! on rising edges, so holding a button never repeat-triggers an action.

use serde::{Deserialize, Serialize};

/// Boolean pressed-state of every logical button, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    /// Advance menus; confirm the morning report.
    pub confirm: bool,
    /// Day phase: buy an attack upgrade.
    pub attack_up: bool,
    /// Day phase: buy a defense upgrade.
    pub defense_up: bool,
    /// Day phase: buy a heal.
    pub heal: bool,
    /// Day phase: restore the day-start backup.
    pub undo: bool,
    /// Day phase: skip straight to night.
    pub skip: bool,
    /// Exit the program. Handled by the shell; the engine ignores it.
    pub quit: bool,
}

/// Buttons that transitioned from released to pressed this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub confirm: bool,
    pub attack_up: bool,
    pub defense_up: bool,
    pub heal: bool,
    pub undo: bool,
    pub skip: bool,
    pub quit: bool,
}

impl ButtonState {
    /// Derive rising edges against the previous tick's snapshot.
    pub fn edges_from(&self, prev: &ButtonState) -> InputEdges {
        InputEdges {
            confirm: self.confirm && !prev.confirm,
            attack_up: self.attack_up && !prev.attack_up,
            defense_up: self.defense_up && !prev.defense_up,
            heal: self.heal && !prev.heal,
            undo: self.undo && !prev.undo,
            skip: self.skip && !prev.skip,
            quit: self.quit && !prev.quit,
        }
    }
}
