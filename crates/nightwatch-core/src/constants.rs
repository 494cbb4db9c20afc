//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

// --- Phase pacing ---

/// Day phase length in ticks (~10 seconds at 60 Hz).
pub const DAY_TICKS: u32 = 600;

/// Night phase length in ticks (~5 seconds at 60 Hz).
pub const NIGHT_TICKS: u32 = 300;

// --- Field (logical pixels) ---

/// Width of the decorative field the night wave drifts across.
pub const FIELD_WIDTH: f32 = 1280.0;

/// Height of the decorative field.
pub const FIELD_HEIGHT: f32 = 720.0;

/// Enemy sprite size. Also the off-screen wrap margin.
pub const ENEMY_SIZE: f32 = 64.0;

// --- Starting economy ---

/// Base hp at the start of a run.
pub const STARTING_HP: i32 = 100;

/// Hp ceiling; heals clamp here.
pub const MAX_HP: i32 = 200;

/// Attack at the start of a run.
pub const STARTING_ATTACK: i32 = 10;

/// Defense at the start of a run.
pub const STARTING_DEFENSE: i32 = 5;

/// Points at the start of a run.
pub const STARTING_POINTS: i32 = 5;

// --- Day upgrades ---

/// Attack gained per attack upgrade.
pub const ATTACK_UP: i32 = 2;

/// Defense gained per defense upgrade.
pub const DEFENSE_UP: i32 = 2;

/// Hp gained per heal.
pub const HEAL_AMOUNT: i32 = 10;

/// Flat point cost of one heal.
pub const HEAL_COST: i32 = 1;

/// Upgrade cost scaling: cost = stat / UPGRADE_COST_STEP + 1.
pub const UPGRADE_COST_STEP: i32 = 100;

// --- Night combat ---

/// Attackers per day count: night N brings N * this many.
pub const ENEMIES_PER_DAY: i32 = 5;

/// Raw damage per attacker, before mitigation.
pub const DAMAGE_PER_ENEMY: i32 = 3;

// --- Wave (decorative) ---

/// Red enemies spawned every day.
pub const WAVE_RED_COUNT: usize = 3;

/// Day on which blue enemies join the wave.
pub const WAVE_BLUE_DAY: u32 = 6;

/// Blue enemies per wave once unlocked.
pub const WAVE_BLUE_COUNT: usize = 2;

/// Day on which gray enemies join the wave.
pub const WAVE_GRAY_DAY: u32 = 11;

/// Gray enemies per wave once unlocked.
pub const WAVE_GRAY_COUNT: usize = 2;

/// Day on which yellow enemies join the wave.
pub const WAVE_YELLOW_DAY: u32 = 16;

/// Yellow enemies per wave once unlocked.
pub const WAVE_YELLOW_COUNT: usize = 1;

/// Red drift as a fraction of the gray base speed.
pub const RED_SPEED_FACTOR: f32 = 0.40;

/// Blue drift as a fraction of the gray base speed.
pub const BLUE_SPEED_FACTOR: f32 = 0.70;

/// Yellow drift as a fraction of the gray base speed.
pub const YELLOW_SPEED_FACTOR: f32 = 0.90;

// --- Event table ---

/// Awakening fires on a d10000 roll strictly below this (0.02%).
pub const AWAKENING_THRESHOLD: i32 = 2;

/// Good events occupy d100 rolls strictly below this (30%).
pub const GOOD_EVENT_THRESHOLD: i32 = 30;

/// Bad events occupy d100 rolls from the good threshold up to here (20%).
pub const BAD_EVENT_THRESHOLD: i32 = 50;
