//! The economy: the point/stat tuple the day phase spends and the night
//! consumes, plus the day-start undo backup.

use serde::{Deserialize, Serialize};

use nightwatch_core::constants::{
    ATTACK_UP, DEFENSE_UP, HEAL_AMOUNT, HEAL_COST, MAX_HP, STARTING_ATTACK, STARTING_DEFENSE,
    STARTING_HP, STARTING_POINTS, UPGRADE_COST_STEP,
};

/// The mutable economy tuple. `hp` is clamped to [0, MAX_HP]; `attack` and
/// `defense` never drop below 0; `points` can only shrink through
/// cost-gated spends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyState {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub points: i32,
    /// Points banked by the last result, paid out when the next day starts.
    /// Signed: event modifiers multiply and divide it.
    pub last_earned_points: i32,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            hp: STARTING_HP,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            points: STARTING_POINTS,
            last_earned_points: 0,
        }
    }
}

impl EconomyState {
    /// Current cost of one attack upgrade. Grows as the stat grows.
    pub fn attack_cost(&self) -> i32 {
        self.attack / UPGRADE_COST_STEP + 1
    }

    /// Current cost of one defense upgrade.
    pub fn defense_cost(&self) -> i32 {
        self.defense / UPGRADE_COST_STEP + 1
    }

    /// Buy one attack upgrade. No-op if points are short.
    pub fn buy_attack(&mut self) {
        let cost = self.attack_cost();
        if self.points >= cost {
            self.attack += ATTACK_UP;
            self.points -= cost;
        }
    }

    /// Buy one defense upgrade. No-op if points are short.
    pub fn buy_defense(&mut self) {
        let cost = self.defense_cost();
        if self.points >= cost {
            self.defense += DEFENSE_UP;
            self.points -= cost;
        }
    }

    /// Buy one heal. Hp caps at MAX_HP; the point is spent regardless.
    pub fn buy_heal(&mut self) {
        if self.points >= HEAL_COST {
            self.hp = (self.hp + HEAL_AMOUNT).min(MAX_HP);
            self.points -= HEAL_COST;
        }
    }

    /// Apply night damage. Non-positive damage is absorbed entirely; hp
    /// never drops below 0.
    pub fn take_damage(&mut self, damage: i32) {
        if damage > 0 {
            self.hp = (self.hp - damage).max(0);
        }
    }

    /// The sole game-over condition.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// The four-field backup captured on day entry. Restoring is a flat
/// overwrite, repeatable any number of times within the same day;
/// `last_earned_points` is not part of the backup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoSnapshot {
    points: i32,
    attack: i32,
    defense: i32,
    hp: i32,
}

impl UndoSnapshot {
    pub fn capture(economy: &EconomyState) -> Self {
        Self {
            points: economy.points,
            attack: economy.attack,
            defense: economy.defense,
            hp: economy.hp,
        }
    }

    pub fn restore(&self, economy: &mut EconomyState) {
        economy.points = self.points;
        economy.attack = self.attack;
        economy.defense = self.defense;
        economy.hp = self.hp;
    }
}
