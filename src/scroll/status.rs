//! Flag derivation
//!
//! Maps one geometry reading to the six edge and middle flags.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::ScrollGeometry;

/// Where an element is scrolled, as six flags
///
/// Serialized keys: `top`, `bottom`, `middleOfY`, `left`, `right`, `middleOfX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollStatus {
    pub top: bool,
    pub bottom: bool,
    pub middle_of_y: bool,
    pub left: bool,
    pub right: bool,
    pub middle_of_x: bool,
}

fn is_top<G: ScrollGeometry + ?Sized>(g: &G) -> bool {
    g.scroll_top() <= 0.0
}

fn is_bottom<G: ScrollGeometry + ?Sized>(g: &G) -> bool {
    g.scroll_top() >= g.scroll_height() - g.offset_height()
}

fn is_left<G: ScrollGeometry + ?Sized>(g: &G) -> bool {
    g.scroll_left() <= 0.0
}

fn is_right<G: ScrollGeometry + ?Sized>(g: &G) -> bool {
    g.scroll_left() >= g.scroll_width() - g.offset_width()
}

impl ScrollStatus {
    /// Derive all six flags from the element's current readouts
    ///
    /// Content that fits its viewport reports both edges of that axis at once.
    /// A `NaN` readout makes both edge comparisons false and the middle flag true.
    pub fn from_geometry<G: ScrollGeometry + ?Sized>(geometry: &G) -> Self {
        let top = is_top(geometry);
        let bottom = is_bottom(geometry);
        let left = is_left(geometry);
        let right = is_right(geometry);

        Self {
            top,
            bottom,
            middle_of_y: !top && !bottom,
            left,
            right,
            middle_of_x: !left && !right,
        }
    }

    /// Flags paired with their serialized key, in key order
    pub fn flags(&self) -> [(&'static str, bool); 6] {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("middleOfY", self.middle_of_y),
            ("left", self.left),
            ("right", self.right),
            ("middleOfX", self.middle_of_x),
        ]
    }
}

impl fmt::Display for ScrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.flags().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
