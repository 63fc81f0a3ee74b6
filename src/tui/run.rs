//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: a key reader thread feeds a single mpsc channel.
//! The event loop consumes from the channel, dispatching to the pure
//! update function, and redraws after every transition that keeps going.
//! The loop itself is generic over the ratatui backend so it can be
//! driven by a `TestBackend` and a hand-filled channel.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Terminal, TerminalOptions, Viewport};
use tracing::{debug, info, warn};

use super::state::{Action, App, AppEvent, Transition};
use super::theme::Theme;
use super::update::update;
use super::view::render;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure of the terminal side of the interaction.
///
/// The pure layers cannot fail; every variant comes from terminal I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Raw mode or the terminal itself could not be set up.
    Startup(String),

    /// Drawing a frame or restoring the terminal failed.
    Output(String),

    /// The key reader could not read from the terminal.
    InputLost(String),

    /// The key channel closed before the user asked to leave.
    InputClosed,
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Startup(reason) => {
                write!(f, "Could not start terminal interface: {}", reason)
            }
            RunError::Output(reason) => write!(f, "Terminal output failed: {}", reason),
            RunError::InputLost(reason) => write!(f, "Terminal input failed: {}", reason),
            RunError::InputClosed => write!(f, "Terminal input closed unexpectedly"),
        }
    }
}

impl std::error::Error for RunError {}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// String identity of a key press.
///
/// Printable characters are themselves ("A", " "). Named keys are
/// lowercase names ("enter", "esc", "up", "f5"). Chords are prefixed
/// with "ctrl+" and/or "alt+"; shift is already folded into the character.
pub fn key_token(key: KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_ascii_lowercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        other => format!("{:?}", other).to_lowercase(),
    };

    let mut token = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        token.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        token.push_str("alt+");
    }
    token.push_str(&name);
    token
}

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for release and repeat notifications; every press maps
/// to some action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    Some(Action::from_token(&key_token(key)))
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal: raw mode plus a one-line inline viewport.
///
/// Inline rather than the alternate screen, so the last frame stays
/// visible after exit.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(1),
        },
    )?;
    Ok(terminal)
}

/// Restore the terminal to normal mode and leave the cursor below the frame.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    println!();
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(e) => {
                    warn!(error = %e, "terminal read failed");
                    let _ = tx.send(AppEvent::InputLost(e.to_string()));
                    break;
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interaction on the real terminal.
///
/// Sets up the terminal, spawns the key reader, and runs the event loop
/// until the user leaves. Returns the final state.
pub fn run(theme: &Theme) -> Result<App, RunError> {
    install_panic_hook();
    let mut terminal = setup_terminal().map_err(|e| {
        // Raw mode may already be on if only the viewport failed
        let _ = disable_raw_mode();
        RunError::Startup(e.to_string())
    })?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    let result = event_loop(&mut terminal, &rx, theme);
    let restored = restore_terminal(&mut terminal);

    let app = result?;
    restored.map_err(|e| RunError::Output(e.to_string()))?;
    Ok(app)
}

/// Drive the interaction from a channel of events onto any backend.
///
/// Draws the initial frame, then one frame per event that does not end
/// the interaction. A termination request stops the loop without drawing,
/// leaving the previous frame on screen.
pub fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    rx: &mpsc::Receiver<AppEvent>,
    theme: &Theme,
) -> Result<App, RunError> {
    let mut app = App::new();
    draw(terminal, &app, theme)?;

    while !app.should_quit {
        // Block on next event; all senders dropped means input is gone
        let event = rx.recv().map_err(|_| RunError::InputClosed)?;

        let key = match event {
            AppEvent::Key(key) => key,
            AppEvent::InputLost(reason) => return Err(RunError::InputLost(reason)),
        };

        let Some(action) = map_key(key) else {
            continue;
        };
        debug!(?action, "handling key");

        let screen = std::mem::take(&mut app.screen);
        match update(screen, &action) {
            Transition::Screen(next) => {
                app.screen = next;
                draw(terminal, &app, theme)?;
            }
            Transition::Quit(last) => {
                app.screen = last;
                app.should_quit = true;
            }
        }
    }

    info!(confirmed = app.screen.is_confirmed(), "interaction finished");
    Ok(app)
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App, theme: &Theme) -> Result<(), RunError> {
    terminal
        .draw(|frame| render(app, theme, frame))
        .map(|_| ())
        .map_err(|e| RunError::Output(e.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
