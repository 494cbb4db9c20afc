//! Game state snapshot — the complete visible state handed to the renderer
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{CyclePhase, EnemyKind, SessionState};
use crate::events::NightEvent;
use crate::types::{Position, SimTime};

/// Complete read-only view of the game, built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub session: SessionState,
    pub phase: CyclePhase,
    /// Day counter, starting at 1.
    pub day: u32,
    pub economy: EconomyView,
    /// Current upgrade costs, for the day menu.
    pub costs: UpgradeCosts,
    /// Ticks remaining in the day phase countdown.
    pub day_ticks_left: u32,
    /// Ticks remaining in the night phase countdown.
    pub night_ticks_left: u32,
    /// Hp lost over the previous night; nonzero only during the result phase.
    pub hp_lost_last_night: i32,
    /// Tonight's event, set on result entry and cleared at day start.
    pub event: Option<NightEvent>,
    /// Display text for `event`.
    pub event_message: Option<String>,
    /// Decorative wave positions; populated only during the night phase.
    pub enemies: Vec<EnemyView>,
}

/// Economy fields for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub points: i32,
    /// Points banked by the last result, paid out when the next day starts.
    pub last_earned_points: i32,
}

/// Point costs of the three day-phase purchases.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UpgradeCosts {
    pub attack: i32,
    pub defense: i32,
    pub heal: i32,
}

/// A visible enemy on the night field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub kind: EnemyKind,
}
