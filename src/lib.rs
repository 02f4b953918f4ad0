//! scrolled library - scroll-state reporting
//!
//! Bind a reporter to any element implementing [`scroll::ScrollTarget`] and it
//! keeps six flags (`top`, `bottom`, `middleOfY`, `left`, `right`, `middleOfX`)
//! in a caller-owned sink in sync with the element's scroll position. The
//! terminal viewer in the binary is built on the same pieces.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod notification;
pub mod scroll;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::ScrolledError;
pub use scroll::{ScrollGeometry, ScrollReporter, ScrollStatus, ScrollTarget, StatusScope, bind};
