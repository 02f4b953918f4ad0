//! File Loader Module
//!
//! Reads the viewer's text in a background thread so a slow stdin never blocks
//! the first frame. The UI thread polls the channel once per loop iteration.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use crate::error::ScrolledError;

/// Represents the current state of file loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete(String),
    Error(ScrolledError),
}

/// Manages asynchronous file loading in a background thread
pub struct FileLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<String, ScrolledError>>>,
}

impl FileLoader {
    /// Spawn a background thread to load a file
    pub fn spawn_load(path: PathBuf) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_file_sync(&path);
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Spawn a background thread to load from stdin
    pub fn spawn_load_stdin() -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_stdin_sync();
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while still loading, and the result exactly once when done.
    pub fn poll(&mut self) -> Option<Result<String, ScrolledError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(text) => LoadingState::Complete(text.clone()),
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.rx = None;
                let err = ScrolledError::Io("File loader thread disconnected".to_string());
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

/// Synchronous file loading (runs in background thread)
fn load_file_sync(path: &Path) -> Result<String, ScrolledError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Synchronous stdin loading (runs in background thread)
fn load_stdin_sync() -> Result<String, ScrolledError> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
