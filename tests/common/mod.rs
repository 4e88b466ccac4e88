//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use arsim::config::Config;
use arsim::export::{ExportError, ExportRequest, ExportSink};
use arsim::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub type SubmittedRequests = Arc<Mutex<Vec<ExportRequest>>>;

/// Export sink that keeps every request it is handed.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub requests: SubmittedRequests,
}

impl ExportSink for RecordingSink {
    fn submit(&self, request: ExportRequest) -> Result<(), ExportError> {
        self.requests.lock().push(request);
        Ok(())
    }
}

/// Export sink that refuses every request.
pub struct RejectingSink;

impl ExportSink for RejectingSink {
    fn submit(&self, _request: ExportRequest) -> Result<(), ExportError> {
        Err(ExportError::Spawn(std::io::Error::other("worker pool closed")))
    }
}

pub fn app_with_recorder() -> (App, SubmittedRequests) {
    let sink = RecordingSink::default();
    let requests = Arc::clone(&sink.requests);
    (App::new(Config::default(), Box::new(sink)), requests)
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        arsim::ui::input::handle_key(app, key(KeyCode::Char(ch)));
    }
}
