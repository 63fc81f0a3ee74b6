//! Pure rendering: map App state to a ratatui line.
//!
//! `frame_line` builds the whole display frame from a screen and a theme.
//! `render` is the only function that touches a Frame, and it only writes
//! to the frame buffer.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{App, Screen};
use super::theme::Theme;

/// Label shown before the name while it is being typed.
pub const PROMPT_LABEL: &str = "Enter your name: ";

/// Greeting shown once the name is confirmed.
pub fn greeting_text(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Build the display frame for a screen.
pub fn frame_line<'a>(screen: &'a Screen, theme: &Theme) -> Line<'a> {
    match screen {
        Screen::Prompt { name } => Line::from(vec![
            Span::styled(PROMPT_LABEL, theme.prompt),
            Span::raw(name.as_str()),
        ]),
        Screen::Greeting { name } => {
            Line::from(Span::styled(greeting_text(name), theme.greeting))
        }
    }
}

/// Render the current screen to the terminal frame.
pub fn render(app: &App, theme: &Theme, frame: &mut Frame) {
    let area = frame.area();
    let paragraph = Paragraph::new(frame_line(&app.screen, theme));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::{Color, Modifier};

    fn plain_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 1);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn prompt_frame_is_label_then_name() {
        let screen = Screen::Prompt { name: "Ada".into() };
        let line = frame_line(&screen, &Theme::default());
        assert_eq!(plain_text(&line), "Enter your name: Ada");
    }

    #[test]
    fn empty_prompt_shows_only_label() {
        let screen = Screen::default();
        let line = frame_line(&screen, &Theme::plain());
        assert_eq!(plain_text(&line), "Enter your name: ");
    }

    #[test]
    fn greeting_frame_interpolates_name() {
        let screen = Screen::Greeting { name: "Ada".into() };
        let line = frame_line(&screen, &Theme::default());
        assert_eq!(plain_text(&line), "Hello, Ada!");
    }

    #[test]
    fn prompt_label_is_accented_and_name_is_raw() {
        let screen = Screen::Prompt { name: "Ada".into() };
        let line = frame_line(&screen, &Theme::default());
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].style.fg, Some(Color::Indexed(205)));
        assert_eq!(line.spans[1].style.fg, None);
    }

    #[test]
    fn greeting_is_bold_accent() {
        let screen = Screen::Greeting { name: "Ada".into() };
        let line = frame_line(&screen, &Theme::default());
        let style = line.spans[0].style;
        assert_eq!(style.fg, Some(Color::Indexed(212)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn styling_does_not_change_text() {
        let screen = Screen::Greeting { name: "Grace".into() };
        assert_eq!(
            plain_text(&frame_line(&screen, &Theme::default())),
            plain_text(&frame_line(&screen, &Theme::plain())),
        );
    }

    #[test]
    fn prompt_renders_into_buffer() {
        let mut terminal = make_terminal();
        let app = App {
            screen: Screen::Prompt { name: "Ada".into() },
            should_quit: false,
        };
        terminal
            .draw(|frame| render(&app, &Theme::default(), frame))
            .expect("render should not panic");
        assert!(buffer_text(&terminal).starts_with("Enter your name: Ada"));
    }

    #[test]
    fn greeting_renders_into_buffer() {
        let mut terminal = make_terminal();
        let app = App {
            screen: Screen::Greeting { name: "Ada".into() },
            should_quit: false,
        };
        terminal
            .draw(|frame| render(&app, &Theme::default(), frame))
            .expect("render should not panic");
        assert!(buffer_text(&terminal).starts_with("Hello, Ada!"));
    }
}
