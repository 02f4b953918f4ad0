//! Mouse scroll handling
//!
//! Wheel events move the content pane. Shift turns the vertical wheel into a
//! horizontal pan for terminals that do not report horizontal wheels.

use ratatui::crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

use super::app_state::App;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Direction for a mouse event, or None if it is not a wheel event
    pub fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
        let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
        match mouse.kind {
            MouseEventKind::ScrollUp if shift => Some(Self::Left),
            MouseEventKind::ScrollDown if shift => Some(Self::Right),
            MouseEventKind::ScrollUp => Some(Self::Up),
            MouseEventKind::ScrollDown => Some(Self::Down),
            MouseEventKind::ScrollLeft => Some(Self::Left),
            MouseEventKind::ScrollRight => Some(Self::Right),
            _ => None,
        }
    }
}

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let Some(direction) = ScrollDirection::from_mouse(&mouse) {
            handle_scroll(self, direction);
        }
    }
}

pub fn handle_scroll(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.pane.scroll_up(app.scroll_lines),
        ScrollDirection::Down => app.pane.scroll_down(app.scroll_lines),
        ScrollDirection::Left => app.pane.pan_left(app.scroll_columns),
        ScrollDirection::Right => app.pane.pan_right(app.scroll_columns),
    }
    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_scroll_tests.rs"]
mod mouse_scroll_tests;
