//! One-line status bar showing the six scroll flags of a scope slot

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::scroll::ScrollStatus;
use crate::theme;

/// Build the status line: slot name, then each flag, lit when set
///
/// A slot that has not been written yet shows every flag unlit.
pub fn status_line(slot: &str, status: Option<ScrollStatus>) -> Line<'static> {
    let status = status.unwrap_or_default();
    let mut spans = vec![
        Span::styled(format!(" {} ", slot), theme::status_bar::SLOT),
        Span::raw(" "),
    ];

    for (i, (key, on)) in status.flags().into_iter().enumerate() {
        if i == 3 {
            spans.push(Span::styled(
                " │ ",
                Style::new().fg(theme::status_bar::SEPARATOR),
            ));
        } else if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if on {
            theme::status_bar::FLAG_ON
        } else {
            theme::status_bar::FLAG_OFF
        };
        spans.push(Span::styled(format!(" {} ", key), style));
    }

    Line::from(spans)
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, slot: &str, status: Option<ScrollStatus>) {
    frame.render_widget(Paragraph::new(status_line(slot, status)), area);
}
