//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Title screen, waiting for confirm.
    #[default]
    Title,
    /// How-to-play screen shown before a run starts.
    Explanation,
    /// A run is active; the day/night/result cycle is live.
    Play,
    /// The base fell. Confirm returns to the title.
    GameOver,
}

/// Phase of the day/night/result cycle. Meaningful only while the session
/// is in `Play`; re-initialized to `Day` whenever `Play` is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclePhase {
    /// Planning phase: spend points on upgrades, or undo the day's spending.
    #[default]
    Day,
    /// Survival phase: no input, the horde drifts across the field.
    Night,
    /// Morning report: damage and earnings resolved, waiting for confirm.
    Result,
}

/// Kind of a decorative night enemy. Later kinds unlock on later days and
/// drift faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slowest, present from day 1.
    Red,
    /// Unlocks on day 6.
    Blue,
    /// Fastest, unlocks on day 11.
    Gray,
    /// Unlocks on day 16.
    Yellow,
}
