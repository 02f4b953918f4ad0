//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after rendering the main UI so the notification appears on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = &notif.style;

    let frame_area = frame.area();
    let margin = 2;

    let content_width = u16::try_from(Line::raw(message.as_str()).width()).unwrap_or(u16::MAX);
    let notification_width = content_width
        .saturating_add(4) // 2 padding + 2 borders
        .min(frame_area.width.saturating_sub(margin * 2));
    let notification_height = 3; // 1 line content + 2 borders

    let notification_area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width.saturating_add(margin)),
        y: margin,
        width: notification_width,
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    // Don't render if area is too small
    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    frame.render_widget(Clear, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
