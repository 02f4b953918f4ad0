//! Shared test utilities for scrolled
//!
//! Common fixtures and helpers used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// `count` lines of the form `line 1`, `line 2`, ...
    pub fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Helper to create App with default config for tests
    pub fn test_app(text: &str) -> App {
        App::new(text, &Config::default())
    }

    /// App that has been laid out once in a `width` x `height` terminal
    pub fn rendered_app(text: &str, width: u16, height: u16) -> App {
        let mut app = test_app(text);
        render_to_string(&mut app, width, height);
        app
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
