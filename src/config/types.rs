// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_SLOT: &str = "pane";

/// Scroll step section
#[derive(Debug, Clone, Deserialize)]
pub struct ScrollConfig {
    /// Lines moved per wheel notch or arrow key
    #[serde(default = "default_lines")]
    pub lines: u16,
    /// Columns moved per horizontal step
    #[serde(default = "default_columns")]
    pub columns: u16,
}

fn default_lines() -> u16 {
    3
}

fn default_columns() -> u16 {
    4
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            lines: default_lines(),
            columns: default_columns(),
        }
    }
}

/// Display section
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub scrollbar: bool,
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            scrollbar: true,
            status_bar: true,
        }
    }
}

/// Status section
#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    /// Scope slot the viewer's reporter writes into
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl StatusConfig {
    /// Slot name with surrounding whitespace removed; blank falls back to the default
    pub fn slot_key(&self) -> &str {
        match self.slot.trim() {
            "" => DEFAULT_SLOT,
            slot => slot,
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            slot: default_slot(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub status: StatusConfig,
}
