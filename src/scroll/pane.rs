//! Terminal scroll pane
//!
//! A viewport over line-based text that behaves like a scrollable element:
//! it exposes the six geometry readouts and raises scroll events.

use std::fmt;

use super::geometry::{ScrollGeometry, ScrollListener, ScrollMetrics, ScrollTarget};

/// Scrollable terminal viewport over line-based content
///
/// Raises a scroll event to every listener whenever an operation changes its
/// geometry. Operations that leave the geometry as it was (scrolling up while
/// already at the top, re-applying the same bounds) raise nothing.
pub struct ScrollPane {
    pub offset: u32,
    pub max_offset: u32,
    pub viewport_height: u16,
    pub h_offset: u16,
    pub max_h_offset: u16,
    pub viewport_width: u16,
    listeners: Vec<ScrollListener>,
}

impl ScrollPane {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            h_offset: 0,
            max_h_offset: 0,
            viewport_width: 0,
            listeners: Vec::new(),
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        let before = self.metrics();
        self.viewport_height = viewport_height;

        self.max_offset = content_lines.saturating_sub(viewport_height as u32);

        self.offset = self.offset.min(self.max_offset);
        self.dispatch_if_changed(before);
    }

    pub fn update_h_bounds(&mut self, max_line_width: u16, viewport_width: u16) {
        let before = self.metrics();
        self.viewport_width = viewport_width;
        self.max_h_offset = max_line_width.saturating_sub(viewport_width);
        self.h_offset = self.h_offset.min(self.max_h_offset);
        self.dispatch_if_changed(before);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.set_offset(self.offset.saturating_add(lines as u32));
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.set_offset(self.offset.saturating_sub(lines as u32));
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.set_offset(0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.set_offset(self.max_offset);
    }

    pub fn pan_right(&mut self, cols: u16) {
        self.set_h_offset(self.h_offset.saturating_add(cols));
    }

    pub fn pan_left(&mut self, cols: u16) {
        self.set_h_offset(self.h_offset.saturating_sub(cols));
    }

    pub fn jump_to_left(&mut self) {
        self.set_h_offset(0);
    }

    pub fn jump_to_right(&mut self) {
        self.set_h_offset(self.max_h_offset);
    }

    pub fn reset(&mut self) {
        let before = self.metrics();
        self.offset = 0;
        self.h_offset = 0;
        self.dispatch_if_changed(before);
    }

    /// Current geometry, as an element would report it
    ///
    /// Extents never fall below the viewport: content shorter than the pane
    /// reports the pane's own size.
    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.offset as f64,
            scroll_height: self.max_offset as f64 + self.viewport_height as f64,
            offset_height: self.viewport_height as f64,
            scroll_left: self.h_offset as f64,
            scroll_width: self.max_h_offset as f64 + self.viewport_width as f64,
            offset_width: self.viewport_width as f64,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_offset(&mut self, offset: u32) {
        let before = self.metrics();
        self.offset = offset.min(self.max_offset);
        self.dispatch_if_changed(before);
    }

    fn set_h_offset(&mut self, h_offset: u16) {
        let before = self.metrics();
        self.h_offset = h_offset.min(self.max_h_offset);
        self.dispatch_if_changed(before);
    }

    fn dispatch_if_changed(&mut self, before: ScrollMetrics) {
        let after = self.metrics();
        if after == before {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "Pane scrolled to ({}, {}) of ({}, {})",
            self.offset,
            self.h_offset,
            self.max_offset,
            self.max_h_offset
        );

        let geometry: &dyn ScrollGeometry = &after;
        for listener in &mut self.listeners {
            listener(geometry);
        }
    }
}

impl Default for ScrollPane {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScrollPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollPane")
            .field("offset", &self.offset)
            .field("max_offset", &self.max_offset)
            .field("viewport_height", &self.viewport_height)
            .field("h_offset", &self.h_offset)
            .field("max_h_offset", &self.max_h_offset)
            .field("viewport_width", &self.viewport_width)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollGeometry for ScrollPane {
    fn scroll_top(&self) -> f64 {
        self.offset as f64
    }

    fn scroll_height(&self) -> f64 {
        self.metrics().scroll_height
    }

    fn offset_height(&self) -> f64 {
        self.viewport_height as f64
    }

    fn scroll_left(&self) -> f64 {
        self.h_offset as f64
    }

    fn scroll_width(&self) -> f64 {
        self.metrics().scroll_width
    }

    fn offset_width(&self) -> f64 {
        self.viewport_width as f64
    }
}

impl ScrollTarget for ScrollPane {
    fn add_scroll_listener(&mut self, listener: ScrollListener) {
        self.listeners.push(listener);
    }
}

#[cfg(test)]
#[path = "pane_tests.rs"]
mod pane_tests;
