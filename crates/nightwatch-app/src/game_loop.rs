//! Fixed-rate game loop — runs the engine at 60 Hz and draws each snapshot.
//!
//! Each tick drains pending key events into one `ButtonState`, advances the
//! engine exactly once, and renders the returned snapshot. Scheduling uses
//! an absolute deadline so drift does not accumulate.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use nightwatch_core::constants::TICK_RATE;
use nightwatch_core::input::ButtonState;
use nightwatch_sim::engine::{GameEngine, SimConfig};

use crate::error::AppError;
use crate::input;
use crate::ui;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Set up the terminal, run the loop, and restore the terminal even if the
/// loop errors out.
pub fn run(seed: u64) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, seed);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, seed: u64) -> Result<(), AppError> {
    let mut engine = GameEngine::new(SimConfig {
        seed,
        ..Default::default()
    });

    let mut snapshot = engine.tick(ButtonState::default());
    let mut next_tick_time = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &snapshot))?;

        // Drain key events until the tick deadline; whatever arrived is
        // this tick's button snapshot.
        let mut buttons = ButtonState::default();
        next_tick_time += TICK_DURATION;
        loop {
            let now = Instant::now();
            if now >= next_tick_time {
                break;
            }
            if event::poll(next_tick_time - now)? {
                if let Event::Key(key) = event::read()? {
                    input::apply_key(&mut buttons, &key);
                }
            }
        }
        if Instant::now() - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = Instant::now();
        }

        if buttons.quit {
            return Ok(());
        }

        snapshot = engine.tick(buttons);
    }
}
