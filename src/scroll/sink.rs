//! Output side of the reporter
//!
//! The reporter never owns the status it maintains. It writes through a
//! `StatusSink` supplied by the caller: a shared status cell, one named slot of
//! a `StatusScope`, or a setter callback.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use super::status::ScrollStatus;

/// Receives every status the reporter computes
pub trait StatusSink {
    fn write_status(&mut self, status: ScrollStatus);
}

/// Status cell shared between the caller and the reporter
pub type SharedStatus = Rc<RefCell<ScrollStatus>>;

impl StatusSink for SharedStatus {
    fn write_status(&mut self, status: ScrollStatus) {
        *self.borrow_mut() = status;
    }
}

/// Adapts a setter callback into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(ScrollStatus)> StatusSink for FnSink<F> {
    fn write_status(&mut self, status: ScrollStatus) {
        (self.0)(status)
    }
}

/// Caller-owned record of statuses, keyed by slot name
///
/// Clones share the same record. Serializes as a JSON object mapping each
/// slot name to its six flags.
#[derive(Debug, Clone, Default)]
pub struct StatusScope {
    slots: Rc<RefCell<BTreeMap<String, ScrollStatus>>>,
}

impl StatusScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink writing to `key`. The key is fixed here and never looked up again.
    pub fn slot(&self, key: impl Into<String>) -> ScopeSlot {
        ScopeSlot {
            scope: self.clone(),
            key: key.into(),
        }
    }

    /// Latest status written to `key`, if any
    pub fn get(&self, key: &str) -> Option<ScrollStatus> {
        self.slots.borrow().get(key).copied()
    }

    /// Slot names that have been written, in sorted order
    pub fn keys(&self) -> Vec<String> {
        self.slots.borrow().keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for StatusScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.slots.borrow().serialize(serializer)
    }
}

/// One named slot of a `StatusScope`
#[derive(Debug, Clone)]
pub struct ScopeSlot {
    scope: StatusScope,
    key: String,
}

impl ScopeSlot {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl StatusSink for ScopeSlot {
    fn write_status(&mut self, status: ScrollStatus) {
        self.scope
            .slots
            .borrow_mut()
            .insert(self.key.clone(), status);
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod sink_tests;
