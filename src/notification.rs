//! Notification module for scrolled
//!
//! Displays transient warnings and persistent errors over the viewer.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
