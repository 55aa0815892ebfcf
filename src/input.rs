//! Input module - button-to-color mapping, plus keyboard stand-ins for the
//! simulator

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{ButtonId, Color};

/// The color a button plays. The mapping is closed: every button has one.
pub fn button_color(button: ButtonId) -> Color {
    match button {
        ButtonId::Red => Color::Red,
        ButtonId::Blue => Color::Blue,
        ButtonId::Yellow => Color::Yellow,
        ButtonId::White => Color::White,
    }
}

/// Resolve a button's reported name to its color.
///
/// Names outside the closed button set resolve to `None` and the event is
/// dropped; with four known buttons this cannot happen in practice.
pub fn resolve(name: &str) -> Option<Color> {
    ButtonId::from_name(name).map(button_color)
}

/// Map a key press to the button it stands in for
pub fn handle_key_event(key: KeyEvent) -> Option<ButtonId> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('1') => Some(ButtonId::Red),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char('2') => Some(ButtonId::Blue),
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('3') => Some(ButtonId::Yellow),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('4') => Some(ButtonId::White),
        _ => None,
    }
}

/// Check if key should quit the simulator
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
