//! Night combat resolution.
//!
//! Pure functions from the day count and current stats to damage. The
//! decorative wave entities take no part in this — the attacker count is
//! derived from the day count alone.

use nightwatch_core::constants::{DAMAGE_PER_ENEMY, ENEMIES_PER_DAY};

/// Number of attackers on a given night.
pub fn enemy_count(day: u32) -> i32 {
    day as i32 * ENEMIES_PER_DAY
}

/// Mitigation multiplier. Decays in steps as the siege drags on.
pub fn defense_rate(day: u32) -> f64 {
    match day {
        0..=5 => 1.0,
        6..=10 => 0.8,
        11..=15 => 0.666,
        _ => 0.5,
    }
}

/// Damage dealt over one night, before the hp clamp. Non-positive means
/// the defense held.
pub fn night_damage(day: u32, attack: i32, defense: i32) -> i32 {
    let effective_defense = (f64::from(attack + defense) * defense_rate(day)) as i32;
    enemy_count(day) * DAMAGE_PER_ENEMY - effective_defense
}

/// Points earned for surviving the night, before event modifiers.
pub fn points_earned(day: u32) -> i32 {
    enemy_count(day) / 2
}
