//! Event handling for the ratatui TUI
//!
//! Maps keyboard events to browser actions. Handled keys are consumed
//! here; nothing falls through to the terminal.

use super::state::{AppState, FocusPane, Mode};
use crate::view::PageDirection;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the browser
    Quit,
    /// Promote the result at this index to the feature view
    Feature(usize),
    /// Activate a pagination control
    Page(PageDirection),
    /// Activate the searchable fact at this index
    Search(usize),
    /// Open the featured record in the system browser
    OpenLink,
    /// Copy the featured record's image URL to the clipboard
    CopyImageUrl,
    /// No action taken
    Ignored,
}

/// Sizes of the lists the cursor can move over
#[derive(Debug, Clone, Copy, Default)]
pub struct Extent {
    pub results: usize,
    pub triggers: usize,
}

/// Handle a key in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent, extent: Extent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            EventResult::Quit
        }

        (KeyCode::Up | KeyCode::Char('k'), _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            state.cursor_down(extent.results, extent.triggers);
            EventResult::Continue
        }
        (KeyCode::Home | KeyCode::Char('g'), _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End | KeyCode::Char('G'), _) => {
            state.jump_to_end(extent.results);
            EventResult::Continue
        }
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            EventResult::Continue
        }

        (KeyCode::Left | KeyCode::Char('h' | 'p') | KeyCode::PageUp, _) => {
            EventResult::Page(PageDirection::Previous)
        }
        (KeyCode::Right | KeyCode::Char('l' | 'n') | KeyCode::PageDown, _) => {
            EventResult::Page(PageDirection::Next)
        }

        (KeyCode::Enter | KeyCode::Char(' '), _) => match state.focus {
            FocusPane::Results if extent.results > 0 => EventResult::Feature(state.result_cursor),
            FocusPane::Feature if extent.triggers > 0 => EventResult::Search(state.trigger_cursor),
            _ => EventResult::Ignored,
        },

        (KeyCode::Char('o'), _) => EventResult::OpenLink,
        (KeyCode::Char('y'), _) => EventResult::CopyImageUrl,

        (KeyCode::F(1) | KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Any key closes the help overlay
fn handle_help_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return EventResult::Quit;
    }
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Route a key event according to the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent, extent: Extent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    match state.mode {
        Mode::Normal => handle_normal_mode(state, key, extent),
        Mode::Help => handle_help_mode(state, key),
    }
}

/// Poll for one event and handle it
///
/// # Errors
///
/// Returns an error if reading terminal events fails.
pub fn poll_and_handle(
    state: &mut AppState,
    extent: Extent,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key, extent),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
