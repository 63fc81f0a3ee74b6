//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Every (screen, action) pair has a defined result, so there is no
//! error path here.

use super::state::{Action, Screen, Transition};

/// Pure state transition function.
///
/// Consumes the current screen and produces the next transition.
/// Cancel always quits; what Confirm and text do depends on the screen.
pub fn update(screen: Screen, action: &Action) -> Transition {
    match screen {
        Screen::Prompt { name } => update_prompt(name, action),
        Screen::Greeting { .. } => update_greeting(screen, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Prompt: text appends, Confirm freezes the name, Cancel quits.
fn update_prompt(mut name: String, action: &Action) -> Transition {
    match action {
        Action::Confirm => Transition::Screen(Screen::Greeting { name }),
        Action::Text(text) => {
            name.push_str(text);
            Transition::Screen(Screen::Prompt { name })
        }
        Action::Cancel => Transition::Quit(Screen::Prompt { name }),
    }
}

/// Greeting: Confirm and Cancel both leave, text is ignored.
fn update_greeting(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::Confirm | Action::Cancel => Transition::Quit(screen),
        Action::Text(_) => Transition::Screen(screen),
    }
}

// ============================================================================
// TESTS
// ============================================================================
