//! Tests for App rendering

use super::*;
use crate::config::Config;
use crate::input::{FileLoader, LoadingState};
use crate::test_utils::test_helpers::{numbered_lines, render_to_string, test_app};
use std::sync::mpsc::channel;

#[test]
fn test_renders_title_and_first_lines() {
    let mut app = test_app(&numbered_lines(100));
    let output = render_to_string(&mut app, 60, 12);

    assert!(output.contains("scrolled"));
    assert!(output.contains("line 1 "));
    assert!(output.contains("line 9 "));
    assert!(!output.contains("line 10 "));
}

#[test]
fn test_render_lays_out_the_pane() {
    let mut app = test_app(&numbered_lines(100));
    render_to_string(&mut app, 60, 12);

    // 12 rows - 1 status bar - 2 borders
    assert_eq!(app.pane.viewport_height, 9);
    assert_eq!(app.pane.viewport_width, 58);
    assert_eq!(app.pane.max_offset, 91);
}

#[test]
fn test_renders_scrolled_content() {
    let mut app = test_app(&numbered_lines(100));
    render_to_string(&mut app, 60, 12);
    app.pane.scroll_down(50);

    let output = render_to_string(&mut app, 60, 12);
    assert!(output.contains("line 51 "));
    assert!(!output.contains("line 50 "));
}

#[test]
fn test_renders_horizontally_scrolled_content() {
    let mut app = test_app("abcdefghijklmnopqrstuvwxyz0123456789");
    render_to_string(&mut app, 20, 6);
    app.pane.pan_right(10);

    let output = render_to_string(&mut app, 20, 6);
    assert!(output.contains("klmn"));
    assert!(!output.contains("abcd"));
}

#[test]
fn test_status_bar_shows_slot_and_flags() {
    let mut app = test_app(&numbered_lines(100));
    let output = render_to_string(&mut app, 80, 12);
    let last_row = output.lines().last().unwrap();

    assert!(last_row.contains("pane"));
    assert!(last_row.contains("middleOfY"));
    assert!(last_row.contains("middleOfX"));
}

#[test]
fn test_status_reflects_layout_of_the_same_frame() {
    let mut app = test_app("only one line");
    render_to_string(&mut app, 60, 12);

    let status = app.status().unwrap();
    assert!(status.top && status.bottom);
}

#[test]
fn test_bottom_reported_only_when_last_line_is_visible() {
    let mut app = test_app(&numbered_lines(70_000));
    render_to_string(&mut app, 40, 12);

    app.pane.jump_to_bottom();
    let output = render_to_string(&mut app, 40, 12);
    assert_eq!(app.pane.offset, 69_991);
    assert!(output.contains("line 70000"));
    assert!(app.status().unwrap().bottom);

    app.pane.scroll_up(1);
    let output = render_to_string(&mut app, 40, 12);
    assert!(!output.contains("line 70000"));
    assert!(!app.status().unwrap().bottom);
}

#[test]
fn test_status_bar_can_be_hidden() {
    let mut config = Config::default();
    config.display.status_bar = false;
    let mut app = App::new(&numbered_lines(100), &config);

    let output = render_to_string(&mut app, 80, 12);

    assert!(!output.contains("middleOfY"));
    // Without the status bar the pane gets the full height
    assert_eq!(app.pane.viewport_height, 10);
}

#[test]
fn test_scrollbar_drawn_only_when_enabled() {
    let mut app = test_app(&numbered_lines(100));
    let with_bar = render_to_string(&mut app, 60, 12);
    assert!(with_bar.contains('█'));

    let mut config = Config::default();
    config.display.scrollbar = false;
    let mut app = App::new(&numbered_lines(100), &config);
    let without_bar = render_to_string(&mut app, 60, 12);
    assert!(!without_bar.contains('█'));
}

#[test]
fn test_loading_placeholder() {
    let (_tx, rx) = channel();
    let loader = FileLoader {
        state: LoadingState::Loading,
        rx: Some(rx),
    };
    let mut app = App::new_with_loader(loader, &Config::default());

    let output = render_to_string(&mut app, 60, 12);
    assert!(output.contains("Loading..."));
}

#[test]
fn test_notification_drawn_over_pane() {
    let mut app = test_app(&numbered_lines(5));
    app.notification.show_warning("Invalid config");

    let output = render_to_string(&mut app, 60, 12);
    assert!(output.contains("Invalid config"));
}
