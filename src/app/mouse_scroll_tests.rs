//! Tests for mouse scroll handling

use super::*;
use crate::test_utils::test_helpers::{numbered_lines, rendered_app};

fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
    MouseEvent {
        kind,
        column: 5,
        row: 5,
        modifiers,
    }
}

fn wide_app() -> App {
    let mut text = "y".repeat(120);
    text.push('\n');
    text.push_str(&numbered_lines(60));
    rendered_app(&text, 40, 12)
}

#[test]
fn test_direction_from_wheel() {
    let none = KeyModifiers::empty();
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::ScrollUp, none)),
        Some(ScrollDirection::Up)
    );
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::ScrollDown, none)),
        Some(ScrollDirection::Down)
    );
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::ScrollLeft, none)),
        Some(ScrollDirection::Left)
    );
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::ScrollRight, none)),
        Some(ScrollDirection::Right)
    );
}

#[test]
fn test_shift_wheel_pans_horizontally() {
    let shift = KeyModifiers::SHIFT;
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::ScrollUp, shift)),
        Some(ScrollDirection::Left)
    );
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::ScrollDown, shift)),
        Some(ScrollDirection::Right)
    );
}

#[test]
fn test_non_wheel_events_ignored() {
    assert_eq!(
        ScrollDirection::from_mouse(&mouse(MouseEventKind::Moved, KeyModifiers::empty())),
        None
    );
}

#[test]
fn test_wheel_scrolls_configured_lines() {
    let mut app = wide_app();

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, KeyModifiers::empty()));
    assert_eq!(app.pane.offset, 3);
    assert!(app.status().unwrap().middle_of_y);

    app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, KeyModifiers::empty()));
    assert_eq!(app.pane.offset, 0);
    assert!(app.status().unwrap().top);
}

#[test]
fn test_wheel_pans_configured_columns() {
    let mut app = wide_app();

    handle_scroll(&mut app, ScrollDirection::Right);
    assert_eq!(app.pane.h_offset, 4);

    handle_scroll(&mut app, ScrollDirection::Left);
    assert_eq!(app.pane.h_offset, 0);
    assert!(app.status().unwrap().left);
}

#[test]
fn test_wheel_marks_dirty() {
    let mut app = wide_app();
    app.clear_dirty();

    handle_scroll(&mut app, ScrollDirection::Down);
    assert!(app.should_render());
}
