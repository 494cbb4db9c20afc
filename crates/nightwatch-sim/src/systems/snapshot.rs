//! Snapshot system: assembles the complete GameStateSnapshot for the shell.
//!
//! Read-only — it never modifies the world or the engine state.

use hecs::World;

use nightwatch_core::constants::{HEAL_COST, MAX_HP};
use nightwatch_core::enums::{CyclePhase, EnemyKind, SessionState};
use nightwatch_core::events::NightEvent;
use nightwatch_core::state::{EconomyView, EnemyView, GameStateSnapshot, UpgradeCosts};
use nightwatch_core::types::{Position, SimTime};

use crate::economy::EconomyState;

/// Build a complete snapshot from the current engine state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: SessionState,
    phase: CyclePhase,
    day: u32,
    economy: &EconomyState,
    day_ticks_left: u32,
    night_ticks_left: u32,
    hp_lost_last_night: i32,
    event: Option<NightEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        session,
        phase,
        day,
        economy: EconomyView {
            hp: economy.hp,
            max_hp: MAX_HP,
            attack: economy.attack,
            defense: economy.defense,
            points: economy.points,
            last_earned_points: economy.last_earned_points,
        },
        costs: UpgradeCosts {
            attack: economy.attack_cost(),
            defense: economy.defense_cost(),
            heal: HEAL_COST,
        },
        day_ticks_left,
        night_ticks_left,
        hp_lost_last_night,
        event,
        event_message: event.map(|e| e.message().to_string()),
        enemies: build_enemies(world, phase),
    }
}

/// Build the enemy view list. The wave is only shown during the night.
fn build_enemies(world: &World, phase: CyclePhase) -> Vec<EnemyView> {
    if phase != CyclePhase::Night {
        return Vec::new();
    }
    world
        .query::<(&Position, &EnemyKind)>()
        .iter()
        .map(|(_, (pos, kind))| EnemyView {
            position: *pos,
            kind: *kind,
        })
        .collect()
}
