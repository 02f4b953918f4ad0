use super::geometry::{ScrollGeometry, ScrollTarget};
use super::sink::StatusSink;
use super::status::ScrollStatus;

/// Keeps a sink in sync with an element's scroll position
///
/// Every call recomputes all six flags from the geometry it is given and
/// writes the whole status to the sink. Nothing is cached between calls.
pub struct ScrollReporter<S> {
    sink: S,
    computations: u64,
}

impl<S: StatusSink> ScrollReporter<S> {
    /// Compute the status for the element's current geometry and write it
    /// before returning
    pub fn initialize<G: ScrollGeometry + ?Sized>(geometry: &G, sink: S) -> Self {
        let mut reporter = Self {
            sink,
            computations: 0,
        };
        reporter.on_scroll(geometry);
        reporter
    }

    /// Recompute and rewrite the status after the element scrolled
    pub fn on_scroll<G: ScrollGeometry + ?Sized>(&mut self, geometry: &G) {
        let status = ScrollStatus::from_geometry(geometry);

        #[cfg(debug_assertions)]
        log::trace!("Scroll status: {}", status);

        self.sink.write_status(status);
        self.computations += 1;
    }

    /// Number of times the status has been computed and written
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

/// Bind a reporter to `target`
///
/// Writes the initial status immediately, then registers a listener that
/// rewrites it on every scroll event the target raises. The reporter is owned
/// by the listener and lives as long as the target.
pub fn bind<T, S>(target: &mut T, sink: S)
where
    T: ScrollTarget + ?Sized,
    S: StatusSink + 'static,
{
    let mut reporter = ScrollReporter::initialize(&*target, sink);

    #[cfg(debug_assertions)]
    log::debug!("Scroll reporter bound");

    target.add_scroll_listener(Box::new(move |geometry: &dyn ScrollGeometry| {
        reporter.on_scroll(geometry)
    }));
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod reporter_tests;
