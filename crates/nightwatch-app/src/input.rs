//! Keyboard sampling: crossterm key events folded into a per-tick
//! ButtonState.
//!
//! Terminals report presses, not level state, so a button counts as held
//! for exactly the tick whose event drain saw it. The engine's edge
//! detection then yields one edge per press; terminal auto-repeat produces
//! repeated presses while a key is held down, matching typed input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use nightwatch_core::input::ButtonState;

/// Fold one key event into the tick's button snapshot.
pub fn apply_key(buttons: &mut ButtonState, key: &KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Enter => {
            // One key serves as confirm on menus and skip during the day.
            buttons.confirm = true;
            buttons.skip = true;
        }
        KeyCode::Char('1') => buttons.attack_up = true,
        KeyCode::Char('2') => buttons.defense_up = true,
        KeyCode::Char('3') => buttons.heal = true,
        KeyCode::Char('r' | 'R') => buttons.undo = true,
        KeyCode::Esc | KeyCode::Char('q') => buttons.quit = true,
        _ => {}
    }
}
