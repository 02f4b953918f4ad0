//! Scrollbar rendering for the content pane
//!
//! Both bars sit on the pane's border and are skipped when the content fits.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

fn scrollbar_state(total: usize, viewport: usize, offset: usize) -> ScrollbarState {
    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // Passing max_scroll + 1 lets the thumb reach the end at max scroll.
    let max_scroll = total.saturating_sub(viewport);
    ScrollbarState::new(max_scroll + 1)
        .position(offset.min(max_scroll))
        .viewport_content_length(viewport)
}

/// Render a vertical scrollbar on the right border of the given area
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full area including borders
/// * `total_lines` - Total number of lines in the content
/// * `viewport_height` - Number of visible lines
/// * `offset` - Current scroll position (0 = top)
/// * `color` - Color for the thumb and track
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_lines: usize,
    viewport_height: usize,
    offset: usize,
    color: Color,
) {
    if total_lines <= viewport_height || viewport_height == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    let mut state = scrollbar_state(total_lines, viewport_height, offset);
    frame.render_stateful_widget(scrollbar, area, &mut state);
}

/// Render a horizontal scrollbar on the bottom border of the given area
pub fn render_horizontal_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_columns: usize,
    viewport_width: usize,
    offset: usize,
    color: Color,
) {
    if total_columns <= viewport_width || viewport_width == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    let mut state = scrollbar_state(total_columns, viewport_width, offset);
    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
