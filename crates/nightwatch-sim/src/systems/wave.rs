//! The decorative enemy wave: rebuilt each day, drifting rightward during
//! the night.
//!
//! Display flavor only. Night damage is resolved from the day count and
//! stats in `combat`; nothing here feeds back into the economy.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightwatch_core::constants::{
    BLUE_SPEED_FACTOR, ENEMY_SIZE, FIELD_HEIGHT, FIELD_WIDTH, RED_SPEED_FACTOR, WAVE_BLUE_COUNT,
    WAVE_BLUE_DAY, WAVE_GRAY_COUNT, WAVE_GRAY_DAY, WAVE_RED_COUNT, WAVE_YELLOW_COUNT,
    WAVE_YELLOW_DAY, YELLOW_SPEED_FACTOR,
};
use nightwatch_core::enums::EnemyKind;
use nightwatch_core::types::{Drift, Position};

/// Base drift of the fastest kind: crosses half the field over one night,
/// so an entity starting around the left quarter ends near the right
/// quarter by dawn.
pub fn gray_speed(night_ticks: u32) -> f32 {
    (FIELD_WIDTH * 0.5) / night_ticks as f32
}

/// Per-kind drift as a fraction of the gray base. Gray is the fastest.
fn kind_speed(kind: EnemyKind, gray: f32) -> f32 {
    match kind {
        EnemyKind::Red => gray * RED_SPEED_FACTOR,
        EnemyKind::Blue => gray * BLUE_SPEED_FACTOR,
        EnemyKind::Gray => gray,
        EnemyKind::Yellow => gray * YELLOW_SPEED_FACTOR,
    }
}

/// Kinds and counts unlocked by a given day, in spawn order.
fn roster(day: u32) -> Vec<(EnemyKind, usize)> {
    let mut roster = vec![(EnemyKind::Red, WAVE_RED_COUNT)];
    if day >= WAVE_BLUE_DAY {
        roster.push((EnemyKind::Blue, WAVE_BLUE_COUNT));
    }
    if day >= WAVE_GRAY_DAY {
        roster.push((EnemyKind::Gray, WAVE_GRAY_COUNT));
    }
    if day >= WAVE_YELLOW_DAY {
        roster.push((EnemyKind::Yellow, WAVE_YELLOW_COUNT));
    }
    roster
}

/// Tear down yesterday's wave and spawn today's.
pub fn rebuild(world: &mut World, rng: &mut ChaCha8Rng, day: u32, night_ticks: u32) {
    world.clear();
    let gray = gray_speed(night_ticks);
    for (kind, count) in roster(day) {
        for _ in 0..count {
            spawn_enemy(world, rng, kind, kind_speed(kind, gray));
        }
    }
}

/// Spawn one enemy at a uniform position in the left half of the field.
fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    px_per_tick: f32,
) -> hecs::Entity {
    let x = rng.gen_range(0..FIELD_WIDTH as i32 / 2) as f32;
    let y = rng.gen_range(0..(FIELD_HEIGHT - ENEMY_SIZE) as i32) as f32;
    world.spawn((Position::new(x, y), Drift { px_per_tick }, kind))
}

/// Advance every enemy one night tick. Past the right edge (plus one
/// sprite of margin) an entity wraps to just off the left edge.
pub fn advance(world: &mut World) {
    for (_entity, (pos, drift)) in world.query_mut::<(&mut Position, &Drift)>() {
        pos.x += drift.px_per_tick;
        if pos.x > FIELD_WIDTH + ENEMY_SIZE {
            pos.x = -ENEMY_SIZE;
        }
    }
}
