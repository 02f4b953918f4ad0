use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;
use crate::theme::border_hints::build_hints;
use crate::widgets::scrollbar::{render_horizontal_scrollbar, render_vertical_scrollbar};
use crate::widgets::status_bar::render_status_bar;

const HINTS: &[(&str, &str)] = &[("j/k", "scroll"), ("h/l", "pan"), ("g/G", "ends"), ("q", "quit")];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let (pane_area, status_area) = if self.show_status_bar {
            let layout =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
            (layout[0], Some(layout[1]))
        } else {
            (frame.area(), None)
        };

        // Lays out the pane, which may raise a scroll event and rewrite the status
        self.render_pane(frame, pane_area);

        if let Some(status_area) = status_area {
            render_status_bar(frame, status_area, &self.slot, self.status());
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_pane(&mut self, frame: &mut Frame, area: Rect) {
        let loading = self.is_loading();
        let border_color = if loading {
            theme::pane::BORDER_LOADING
        } else {
            theme::pane::BORDER
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border_color))
            .title(Line::from(Span::styled(" scrolled ", theme::pane::TITLE)))
            .title(build_hints(HINTS, theme::pane::HINT).right_aligned())
            .style(Style::new().bg(theme::pane::BACKGROUND));

        let inner = block.inner(area);
        self.pane.update_bounds(self.line_count(), inner.height);
        self.pane
            .update_h_bounds(self.max_line_width, inner.width);

        if loading {
            let paragraph =
                Paragraph::new(Line::from(Span::styled("Loading...", theme::pane::LOADING)))
                    .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let first = self.pane.offset as usize;
        let last = (first + inner.height as usize).min(self.lines.len());
        let visible: Vec<Line> = self.lines[first.min(last)..last]
            .iter()
            .map(|line| Line::raw(line.as_str()))
            .collect();

        let paragraph = Paragraph::new(visible)
            .block(block)
            .style(Style::new().fg(theme::pane::TEXT))
            .scroll((0, self.pane.h_offset));
        frame.render_widget(paragraph, area);

        if self.show_scrollbar {
            render_vertical_scrollbar(
                frame,
                area,
                self.lines.len(),
                inner.height as usize,
                first,
                theme::scrollbar::DEFAULT,
            );
            render_horizontal_scrollbar(
                frame,
                area,
                self.max_line_width as usize,
                inner.width as usize,
                self.pane.h_offset as usize,
                theme::scrollbar::DEFAULT,
            );
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
