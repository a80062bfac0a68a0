//! Input events and the key mapping that produces them.
//!
//! Terminal keys are translated to a closed set of selection events; the
//! reducer in [`crate::state`] is the only consumer. Keys outside the map
//! are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::Aspect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    SectionNext,
    SectionPrev,
    SectionSelect(usize),
    AspectNext,
    AspectPrev,
    AspectSelect(Aspect),
    Quit,
}

/// Map a key press to an input event, if it drives the dashboard.
///
/// Up/Down (or j/k, or a digit) pick the sidebar section; Left/Right
/// (or h/l, or Tab) move through interpretation aspects; o/r/d/n jump
/// straight to an aspect; q, Esc and Ctrl-C quit.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(InputEvent::SectionNext),
        KeyCode::Up | KeyCode::Char('k') => Some(InputEvent::SectionPrev),
        KeyCode::Char(c @ '1'..='9') => Some(InputEvent::SectionSelect(c as usize - '1' as usize)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(InputEvent::AspectNext),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(InputEvent::AspectPrev),
        KeyCode::Char('o') => Some(InputEvent::AspectSelect(Aspect::Overall)),
        KeyCode::Char('r') => Some(InputEvent::AspectSelect(Aspect::Regional)),
        KeyCode::Char('d') => Some(InputEvent::AspectSelect(Aspect::Disagreement)),
        KeyCode::Char('n') => Some(InputEvent::AspectSelect(Aspect::Neutral)),
        _ => None,
    }
}
