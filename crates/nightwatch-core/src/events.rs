//! Morning-report events rolled at the end of each night.

use serde::{Deserialize, Serialize};

/// Outcome of the nightly event table. Rolled exactly once per result-phase
/// entry; cleared when the next day begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NightEvent {
    /// Rare jackpot (0.02%): attack and defense surge with the day count,
    /// earned points tripled.
    Awakening,
    /// Good: attack rises with the day count.
    WeaponFound,
    /// Good: defense rises with the day count.
    ArmorFound,
    /// Good: earned points doubled.
    GoodSpirits,
    /// Good: hp fully restored.
    SisterHealed,
    /// Bad: attack drops by the day count (floored at 0).
    WeaponBroke,
    /// Bad: defense drops by the day count (floored at 0).
    ArmorBroke,
    /// Bad: earned points halved (integer division).
    BadSpirits,
    /// Nothing happened.
    Quiet,
}

impl NightEvent {
    /// Report line shown in the morning UI.
    pub fn message(self) -> &'static str {
        match self {
            NightEvent::Awakening => "AWAKENING! Power floods through you! (points x3)",
            NightEvent::WeaponFound => "Found a fine weapon!",
            NightEvent::ArmorFound => "Found sturdy armor!",
            NightEvent::GoodSpirits => "Spirits are high today! (points x2)",
            NightEvent::SisterHealed => "The sister tended your wounds! (hp restored)",
            NightEvent::WeaponBroke => "Your weapon broke...",
            NightEvent::ArmorBroke => "Your armor broke...",
            NightEvent::BadSpirits => "Spirits are low today... (points halved)",
            NightEvent::Quiet => "Nothing much happened tonight.",
        }
    }
}
