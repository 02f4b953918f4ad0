use ratatui::text::Line;

use crate::config::Config;
use crate::input::FileLoader;
use crate::notification::NotificationState;
use crate::scroll::{ScrollPane, ScrollStatus, StatusScope, bind};

const TAB_WIDTH: usize = 4;

pub struct App {
    pub pane: ScrollPane,
    pub scope: StatusScope,
    pub slot: String,
    pub lines: Vec<String>,
    pub max_line_width: u16,
    pub loader: Option<FileLoader>,
    pub notification: NotificationState,
    pub scroll_lines: u16,
    pub scroll_columns: u16,
    pub show_scrollbar: bool,
    pub show_status_bar: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl App {
    /// Create an app showing `text` right away
    pub fn new(text: &str, config: &Config) -> Self {
        let mut app = Self::empty(config);
        app.set_content(text);
        app
    }

    /// Create an app whose text arrives later from a background loader
    pub fn new_with_loader(loader: FileLoader, config: &Config) -> Self {
        let mut app = Self::empty(config);
        app.loader = Some(loader);
        app
    }

    fn empty(config: &Config) -> Self {
        let mut pane = ScrollPane::new();
        let scope = StatusScope::new();
        let slot = config.status.slot_key().to_string();

        bind(&mut pane, scope.slot(slot.as_str()));

        Self {
            pane,
            scope,
            slot,
            lines: Vec::new(),
            max_line_width: 0,
            loader: None,
            notification: NotificationState::new(),
            scroll_lines: config.scroll.lines,
            scroll_columns: config.scroll.columns,
            show_scrollbar: config.display.scrollbar,
            show_status_bar: config.display.status_bar,
            should_quit: false,
            dirty: true,
        }
    }

    /// Replace the displayed text and scroll back to the origin
    pub fn set_content(&mut self, text: &str) {
        self.lines = text
            .lines()
            .map(|line| line.replace('\t', &" ".repeat(TAB_WIDTH)))
            .collect();

        self.max_line_width = self
            .lines
            .iter()
            .map(|line| Line::raw(line.as_str()).width())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;

        #[cfg(debug_assertions)]
        log::debug!(
            "Content set: {} lines, widest {} columns",
            self.lines.len(),
            self.max_line_width
        );

        self.pane.reset();
        self.pane
            .update_bounds(self.line_count(), self.pane.viewport_height);
        self.pane
            .update_h_bounds(self.max_line_width, self.pane.viewport_width);
        self.dirty = true;
    }

    pub fn line_count(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// Poll the background loader and install its text once it arrives
    pub fn poll_file_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };

        match loader.poll() {
            Some(Ok(text)) => {
                self.loader = None;
                self.set_content(&text);
            }
            Some(Err(e)) => {
                #[cfg(debug_assertions)]
                log::error!("Failed to load input: {}", e);

                self.loader = None;
                self.notification.show_error(&e.to_string());
                self.dirty = true;
            }
            None => {}
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(|loader| loader.is_loading())
    }

    /// Latest status written by the pane's reporter
    pub fn status(&self) -> Option<ScrollStatus> {
        self.scope.get(&self.slot)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Redraw after input, after loading, or while a notification may expire
    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some()
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
