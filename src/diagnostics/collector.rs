// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns a circular buffer. Other parts of the application log
//! through a [`DiagnosticsHandle`], which never blocks: when the channel is
//! full the event is dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ReportMetadata, SerializableEvent, UserAction, WarningKind,
};
use crate::error::{Error, Result};

/// Cheap-to-clone sender for diagnostic events.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&self, kind: WarningKind, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            kind,
            message: message.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Full channel: drop rather than stall the UI.
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.channel_bound());

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.push(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&mut self, state: AppStateEvent) {
        self.push(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.push(DiagnosticEventKind::Warning {
            kind,
            message: message.into(),
        });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.process_pending();
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes buffered events into a pretty-printed JSON report.
    ///
    /// Events still waiting in the channel are not included; call
    /// [`Self::process_pending`] first.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at_utc,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if serialization or any file operation fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|err| Error::Io(format!("failed to serialize diagnostics: {err}")))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        write_atomic(path, &json)?;

        Ok(path.to_path_buf())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("collection_started_at", &self.collection_started_at_utc)
            .finish()
    }
}

/// Writes `content` to a temp file beside `path`, then renames it into place.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CloseReason, InputSource};
    use crate::media::CacheStats;
    use tempfile::tempdir;

    fn collector() -> DiagnosticsCollector {
        DiagnosticsCollector::new(BufferCapacity::new(100))
    }

    #[test]
    fn direct_logging_lands_in_buffer() {
        let mut collector = collector();
        collector.log_action(UserAction::JumpToImage { index: 3 });
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = collector();
        let handle = collector.handle();
        handle.log_action(UserAction::NavigateNext {
            source: InputSource::Keyboard,
        });
        handle.log_warning(WarningKind::ImageLoad, "timeout");

        assert!(collector.is_empty());
        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = collector();
        let handle = collector.handle();
        let bound = BufferCapacity::new(100).channel_bound();
        for _ in 0..bound + 10 {
            handle.log_action(UserAction::CarouselNext);
        }
        collector.process_pending();
        assert_eq!(collector.len(), bound);
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = collector();
        for index in 0..150 {
            collector.log_action(UserAction::JumpToImage { index });
        }
        assert_eq!(collector.len(), 100);
        let first = collector.iter().next().map(|event| event.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::JumpToImage { index: 50 }
            })
        );
    }

    #[test]
    fn export_json_contains_metadata_and_events() {
        let mut collector = collector();
        collector.log_action(UserAction::CloseGallery {
            reason: CloseReason::Escape,
        });
        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["metadata"]["event_count"], 1);
        assert_eq!(value["events"][0]["type"], "user_action");
        assert_eq!(value["events"][0]["action"]["reason"], "escape");
    }

    #[test]
    fn export_to_file_creates_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("report.json");
        let mut collector = collector();
        collector.log_state(AppStateEvent::Shutdown {
            image_cache: CacheStats::default(),
        });

        let written = collector.export_to_file(&path).expect("export succeeds");
        assert_eq!(written, path);
        let content = fs::read_to_string(&path).expect("read report");
        assert!(content.contains("\"app_state\""));
        assert!(!path.with_extension("json.tmp").exists());
    }
}
