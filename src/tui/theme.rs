//! TUI color semantics.
//!
//! Styles are plain data built once at startup and handed to the
//! rendering layer, so render output can be checked with or without color.
//!
//! Color semantics:
//! - Pink (256-color 205): the prompt label
//! - Light pink (256-color 212), bold: the greeting

use ratatui::style::{Color, Modifier, Style};

/// Accent for the prompt label.
pub const PROMPT_ACCENT: Color = Color::Indexed(205);

/// Accent for the greeting.
pub const GREETING_ACCENT: Color = Color::Indexed(212);

/// Styles used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// "Enter your name: " label. The typed name itself is unstyled.
    pub prompt: Style,
    /// "Hello, {name}!" line.
    pub greeting: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            prompt: Style::new().fg(PROMPT_ACCENT),
            greeting: Style::new().fg(GREETING_ACCENT).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// No colors, no modifiers.
    pub fn plain() -> Self {
        Theme {
            prompt: Style::new(),
            greeting: Style::new(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_expected_colors() {
        let theme = Theme::default();
        assert_eq!(theme.prompt.fg, Some(Color::Indexed(205)));
        assert_eq!(theme.greeting.fg, Some(Color::Indexed(212)));
    }

    #[test]
    fn greeting_is_bold_and_prompt_is_not() {
        let theme = Theme::default();
        assert!(theme.greeting.add_modifier.contains(Modifier::BOLD));
        assert!(!theme.prompt.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn plain_theme_is_unstyled() {
        let theme = Theme::plain();
        assert_eq!(theme.prompt, Style::default());
        assert_eq!(theme.greeting, Style::default());
    }
}
