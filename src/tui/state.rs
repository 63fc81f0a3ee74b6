//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire interaction state space. The `confirmed`
//! flag is encoded in the Screen variant itself, so a name that has been
//! confirmed cannot be appended to: there is no `&mut String` to reach.
//!
//! The transition function (`update`) and the rendering layer (`view`)
//! both program against these types.

use crossterm::event::KeyEvent;

// ============================================================================
// KEY TOKENS
// ============================================================================

/// Token produced by the confirm key.
pub const TOKEN_CONFIRM: &str = "enter";

/// Tokens that cancel the interaction from any screen.
pub const TOKENS_CANCEL: [&str; 2] = ["ctrl+c", "esc"];

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The key reader thread is the only producer.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The reader could not read from the terminal anymore.
    InputLost(String),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Default, PartialEq)]
pub struct App {
    /// Current screen, carrying the name typed so far.
    pub screen: Screen,

    /// Set once a transition requests termination.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The two states of the interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Collecting the name, one key at a time.
    Prompt { name: String },

    /// Name confirmed. Frozen until the process exits.
    Greeting { name: String },
}

/// The interaction starts on an empty prompt.
impl Default for Screen {
    fn default() -> Self {
        Screen::Prompt {
            name: String::new(),
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Confirm the name, or leave once it is confirmed.
    Confirm,
    /// Leave immediately.
    Cancel,
    /// Any other key, carrying its token text.
    Text(String),
}

impl Action {
    /// Classify a key token.
    ///
    /// Every token maps to some action: anything that is neither the
    /// confirm key nor a cancel key becomes text, named keys included.
    pub fn from_token(token: &str) -> Self {
        if token == TOKEN_CONFIRM {
            Action::Confirm
        } else if TOKENS_CANCEL.contains(&token) {
            Action::Cancel
        } else {
            Action::Text(token.to_string())
        }
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Pure code describes WHAT should happen; the loop in `run` decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep going and render this screen.
    Screen(Screen),
    /// Stop the loop. Carries the final screen, which is not re-rendered.
    Quit(Screen),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on an empty prompt.
    pub fn new() -> Self {
        App::default()
    }
}

impl Screen {
    /// The name typed so far, confirmed or not.
    pub fn name(&self) -> &str {
        match self {
            Screen::Prompt { name } | Screen::Greeting { name } => name,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Screen::Greeting { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
