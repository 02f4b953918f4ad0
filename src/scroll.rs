//! Scroll-state reporting
//!
//! A reporter binds to a scrollable element, derives six boolean flags from the
//! element's geometry and writes them to a caller-owned sink, once at bind time
//! and again on every scroll event the element raises.

mod geometry;
mod pane;
mod reporter;
mod sink;
mod status;

pub use geometry::{ScrollGeometry, ScrollListener, ScrollMetrics, ScrollTarget};
pub use pane::ScrollPane;
pub use reporter::{ScrollReporter, bind};
pub use sink::{FnSink, ScopeSlot, SharedStatus, StatusScope, StatusSink};
pub use status::ScrollStatus;
