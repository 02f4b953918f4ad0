use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('d') => self.pane.page_down(),
                KeyCode::Char('u') => self.pane.page_up(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc if self.notification.current().is_some() => self.notification.dismiss(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Char('j') | KeyCode::Down => self.pane.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.pane.scroll_up(1),
            KeyCode::Char('J') => self.pane.scroll_down(self.scroll_lines),
            KeyCode::Char('K') => self.pane.scroll_up(self.scroll_lines),
            KeyCode::PageDown => self.pane.page_down(),
            KeyCode::PageUp => self.pane.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.pane.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.pane.jump_to_bottom(),

            KeyCode::Char('h') | KeyCode::Left => self.pane.pan_left(self.scroll_columns),
            KeyCode::Char('l') | KeyCode::Right => self.pane.pan_right(self.scroll_columns),
            KeyCode::Char('0') => self.pane.jump_to_left(),
            KeyCode::Char('$') => self.pane.jump_to_right(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
