//! The nightly random-event table.
//!
//! One outcome per result-phase entry. Draw order is fixed and matters for
//! stream fidelity: a d10000 awakening check first, then a d100 bucket,
//! then a variant pick inside the good/bad buckets only.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightwatch_core::constants::{
    AWAKENING_THRESHOLD, BAD_EVENT_THRESHOLD, GOOD_EVENT_THRESHOLD, MAX_HP,
};
use nightwatch_core::events::NightEvent;

use crate::economy::EconomyState;

/// Roll tonight's event and apply its effect to the economy.
pub fn roll(rng: &mut ChaCha8Rng, day: u32, economy: &mut EconomyState) -> NightEvent {
    let event = draw_event(rng);
    apply(event, day, economy);
    event
}

/// Run the draw sequence without applying anything.
fn draw_event(rng: &mut ChaCha8Rng) -> NightEvent {
    if rng.gen_range(0..10_000) < AWAKENING_THRESHOLD {
        return NightEvent::Awakening;
    }
    let bucket = rng.gen_range(0..100);
    bucket_event(bucket, rng)
}

/// Resolve a d100 bucket roll. The variant pick is drawn only for the
/// good/bad buckets, never for the quiet remainder.
fn bucket_event(bucket: i32, rng: &mut ChaCha8Rng) -> NightEvent {
    if bucket < GOOD_EVENT_THRESHOLD {
        good_event(rng.gen_range(0..4))
    } else if bucket < BAD_EVENT_THRESHOLD {
        bad_event(rng.gen_range(0..3))
    } else {
        NightEvent::Quiet
    }
}

/// Good-bucket variant for a pick in [0, 4).
fn good_event(pick: i32) -> NightEvent {
    match pick {
        0 => NightEvent::WeaponFound,
        1 => NightEvent::ArmorFound,
        2 => NightEvent::GoodSpirits,
        _ => NightEvent::SisterHealed,
    }
}

/// Bad-bucket variant for a pick in [0, 3).
fn bad_event(pick: i32) -> NightEvent {
    match pick {
        0 => NightEvent::WeaponBroke,
        1 => NightEvent::ArmorBroke,
        _ => NightEvent::BadSpirits,
    }
}

/// Apply an event's stat effect. Scales with the day count.
fn apply(event: NightEvent, day: u32, economy: &mut EconomyState) {
    let day = day as i32;
    match event {
        NightEvent::Awakening => {
            economy.attack += day * 10;
            economy.defense += day * 10;
            economy.last_earned_points *= 3;
        }
        NightEvent::WeaponFound => economy.attack += day * 5,
        NightEvent::ArmorFound => economy.defense += day * 5,
        NightEvent::GoodSpirits => economy.last_earned_points *= 2,
        NightEvent::SisterHealed => economy.hp = MAX_HP,
        NightEvent::WeaponBroke => economy.attack = (economy.attack - day).max(0),
        NightEvent::ArmorBroke => economy.defense = (economy.defense - day).max(0),
        NightEvent::BadSpirits => economy.last_earned_points /= 2,
        NightEvent::Quiet => {}
    }
}
