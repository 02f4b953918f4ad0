//! Element-side boundary of the reporter
//!
//! An element exposes six geometry readouts and accepts scroll listeners.
//! Readouts are `f64` so that a missing value can be carried as `NaN`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrolledError;

/// Geometry readouts of a scrollable element
pub trait ScrollGeometry {
    /// Vertical scroll offset (0 = scrolled to the top)
    fn scroll_top(&self) -> f64;

    /// Total content height, including the off-screen part
    fn scroll_height(&self) -> f64;

    /// Visible height of the viewport
    fn offset_height(&self) -> f64;

    /// Horizontal scroll offset (0 = scrolled to the left edge)
    fn scroll_left(&self) -> f64;

    /// Total content width, including the off-screen part
    fn scroll_width(&self) -> f64;

    /// Visible width of the viewport
    fn offset_width(&self) -> f64;
}

/// Callback invoked with the element's geometry each time it scrolls
pub type ScrollListener = Box<dyn FnMut(&dyn ScrollGeometry)>;

/// A scrollable element that raises scroll events
pub trait ScrollTarget: ScrollGeometry {
    /// Register a listener. Listeners run in registration order and live as
    /// long as the target does.
    fn add_scroll_listener(&mut self, listener: ScrollListener);
}

/// Plain snapshot of the six geometry readouts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub offset_height: f64,
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub offset_width: f64,
}

impl ScrollMetrics {
    /// Geometry of an element whose readouts are all missing
    pub const UNKNOWN: Self = Self {
        scroll_top: f64::NAN,
        scroll_height: f64::NAN,
        offset_height: f64::NAN,
        scroll_left: f64::NAN,
        scroll_width: f64::NAN,
        offset_width: f64::NAN,
    };

    /// Take a snapshot of any element's readouts
    pub fn capture<G: ScrollGeometry + ?Sized>(geometry: &G) -> Self {
        Self {
            scroll_top: geometry.scroll_top(),
            scroll_height: geometry.scroll_height(),
            offset_height: geometry.offset_height(),
            scroll_left: geometry.scroll_left(),
            scroll_width: geometry.scroll_width(),
            offset_width: geometry.offset_width(),
        }
    }
}

impl ScrollGeometry for ScrollMetrics {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn offset_height(&self) -> f64 {
        self.offset_height
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn offset_width(&self) -> f64 {
        self.offset_width
    }
}

/// Parses `scrollTop,scrollHeight,offsetHeight,scrollLeft,scrollWidth,offsetWidth`
impl FromStr for ScrollMetrics {
    type Err = ScrolledError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>().map_err(|_| {
                    ScrolledError::InvalidGeometry(format!("'{}' is not a number", part))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let [
            scroll_top,
            scroll_height,
            offset_height,
            scroll_left,
            scroll_width,
            offset_width,
        ] = values[..]
        else {
            return Err(ScrolledError::InvalidGeometry(format!(
                "expected 6 comma-separated values, got {}",
                values.len()
            )));
        };

        Ok(Self {
            scroll_top,
            scroll_height,
            offset_height,
            scroll_left,
            scroll_width,
            offset_width,
        })
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
