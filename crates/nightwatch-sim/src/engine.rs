//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs world of decorative enemies, the session and
//! cycle state machines, the economy, and the seeded RNG. It consumes one
//! `ButtonState` per tick and produces a `GameStateSnapshot`. Completely
//! headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightwatch_core::constants::{DAY_TICKS, NIGHT_TICKS};
use nightwatch_core::enums::{CyclePhase, SessionState};
use nightwatch_core::events::NightEvent;
use nightwatch_core::input::{ButtonState, InputEdges};
use nightwatch_core::state::GameStateSnapshot;
use nightwatch_core::types::SimTime;

use crate::combat;
use crate::economy::{EconomyState, UndoSnapshot};
use crate::event_table;
use crate::systems;

/// Phase pacing in ticks. Exposed as configuration so a different tick rate
/// can preserve real-time pacing; the gray base drift derives from
/// `night_ticks`, so the wave still crosses the field in one night.
#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    pub day_ticks: u32,
    pub night_ticks: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            day_ticks: DAY_TICKS,
            night_ticks: NIGHT_TICKS,
        }
    }
}

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input trace = same game.
    pub seed: u64,
    pub timing: TimingConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            timing: TimingConfig::default(),
        }
    }
}

/// The simulation engine. One owned state tree, mutated in place by `tick`.
pub struct GameEngine {
    world: World,
    rng: ChaCha8Rng,
    timing: TimingConfig,
    time: SimTime,
    session: SessionState,
    phase: CyclePhase,
    day: u32,
    day_ticks_left: u32,
    night_ticks_left: u32,
    economy: EconomyState,
    undo: UndoSnapshot,
    hp_at_night_start: i32,
    event: Option<NightEvent>,
    prev_buttons: ButtonState,
}

impl GameEngine {
    /// Create a new engine with the given config, sitting at the title
    /// screen.
    pub fn new(config: SimConfig) -> Self {
        let economy = EconomyState::default();
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            timing: config.timing,
            time: SimTime::default(),
            session: SessionState::default(),
            phase: CyclePhase::default(),
            day: 1,
            day_ticks_left: config.timing.day_ticks,
            night_ticks_left: config.timing.night_ticks,
            undo: UndoSnapshot::capture(&economy),
            hp_at_night_start: economy.hp,
            economy,
            event: None,
            prev_buttons: ButtonState::default(),
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Exactly one session state is dispatched per tick; a transition
    /// consumes its edge, and the new state's handler runs no earlier than
    /// the next tick.
    pub fn tick(&mut self, buttons: ButtonState) -> GameStateSnapshot {
        let edges = buttons.edges_from(&self.prev_buttons);
        self.prev_buttons = buttons;

        match self.session {
            SessionState::Title => {
                if edges.confirm {
                    self.session = SessionState::Explanation;
                }
            }
            SessionState::Explanation => {
                if edges.confirm {
                    self.enter_play();
                }
            }
            SessionState::Play => {
                self.update_play(&edges);
                self.time.advance();
                if self.economy.is_defeated() {
                    self.session = SessionState::GameOver;
                }
            }
            SessionState::GameOver => {
                if edges.confirm {
                    self.reset_session();
                }
            }
        }

        self.snapshot()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the enemy world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Play-state update: one cycle phase dispatched per tick.
    fn update_play(&mut self, edges: &InputEdges) {
        match self.phase {
            CyclePhase::Day => {
                self.day_ticks_left -= 1;
                if edges.attack_up {
                    self.economy.buy_attack();
                }
                if edges.defense_up {
                    self.economy.buy_defense();
                }
                if edges.heal {
                    self.economy.buy_heal();
                }
                if edges.undo {
                    self.undo.restore(&mut self.economy);
                }
                if edges.skip || self.day_ticks_left == 0 {
                    self.begin_night();
                }
            }
            CyclePhase::Night => {
                self.night_ticks_left -= 1;
                systems::wave::advance(&mut self.world);
                if self.night_ticks_left == 0 {
                    self.begin_result();
                }
            }
            CyclePhase::Result => {
                if edges.confirm {
                    self.day += 1;
                    self.economy.points += self.economy.last_earned_points;
                    self.begin_day();
                }
            }
        }
    }

    /// Entry into Play from the explanation screen: fresh economy, day 1.
    fn enter_play(&mut self) {
        self.session = SessionState::Play;
        self.economy = EconomyState::default();
        self.day = 1;
        self.begin_day();
    }

    /// Day-entry transition action: reset the countdown, clear the event,
    /// capture the undo backup, rebuild the wave for today.
    fn begin_day(&mut self) {
        self.phase = CyclePhase::Day;
        self.day_ticks_left = self.timing.day_ticks;
        self.event = None;
        self.undo = UndoSnapshot::capture(&self.economy);
        systems::wave::rebuild(&mut self.world, &mut self.rng, self.day, self.timing.night_ticks);
    }

    /// Night-entry transition action: reset the countdown and remember the
    /// hp going in, for the morning report.
    fn begin_night(&mut self) {
        self.phase = CyclePhase::Night;
        self.night_ticks_left = self.timing.night_ticks;
        self.hp_at_night_start = self.economy.hp;
    }

    /// Result-entry transition action: resolve the night exactly once.
    /// Damage first, then banked points, then the event table.
    fn begin_result(&mut self) {
        self.phase = CyclePhase::Result;
        let damage = combat::night_damage(self.day, self.economy.attack, self.economy.defense);
        self.economy.take_damage(damage);
        self.economy.last_earned_points = combat::points_earned(self.day);
        self.event = Some(event_table::roll(&mut self.rng, self.day, &mut self.economy));
    }

    /// Full session reset after game over. The RNG keeps its stream.
    fn reset_session(&mut self) {
        self.session = SessionState::Title;
        self.phase = CyclePhase::Day;
        self.day = 1;
        self.day_ticks_left = self.timing.day_ticks;
        self.night_ticks_left = self.timing.night_ticks;
        self.economy = EconomyState::default();
        self.undo = UndoSnapshot::capture(&self.economy);
        self.hp_at_night_start = self.economy.hp;
        self.event = None;
        self.world.clear();
        self.time = SimTime::default();
    }

    fn snapshot(&self) -> GameStateSnapshot {
        let hp_lost_last_night = if self.phase == CyclePhase::Result {
            (self.hp_at_night_start - self.economy.hp).max(0)
        } else {
            0
        };
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.session,
            self.phase,
            self.day,
            &self.economy,
            self.day_ticks_left,
            self.night_ticks_left,
            hp_lost_last_night,
            self.event,
        )
    }

    /// Jump the day counter (for tests exercising late-siege thresholds).
    #[cfg(test)]
    pub(crate) fn set_day(&mut self, day: u32) {
        self.day = day;
    }
}
