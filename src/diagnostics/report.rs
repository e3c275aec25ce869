// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structure for JSON export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    pub app_version: String,
    /// When collection started (RFC 3339).
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started; 0 for events recorded before
    /// the collector existed.
    pub offset_ms: u64,
    pub timestamp: String,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        collection_started_at: DateTime<Utc>,
        kind: DiagnosticEventKind,
    ) -> Self {
        let offset_ms = (timestamp - collection_started_at)
            .num_milliseconds()
            .max(0)
            .unsigned_abs();
        Self {
            offset_ms,
            timestamp: timestamp.to_rfc3339(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        Self { metadata, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::CacheStats;
    use crate::diagnostics::{AppStateEvent, DiagnosticEventKind};
    use chrono::Duration;

    #[test]
    fn offset_is_measured_from_collection_start() {
        let start = Utc::now();
        let event = SerializableEvent::new(
            start + Duration::milliseconds(1500),
            start,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::Shutdown {
                    image_cache: CacheStats::default(),
                },
            },
        );
        assert_eq!(event.offset_ms, 1500);
    }

    #[test]
    fn events_before_start_clamp_to_zero() {
        let start = Utc::now();
        let event = SerializableEvent::new(
            start - Duration::seconds(2),
            start,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::Shutdown {
                    image_cache: CacheStats::default(),
                },
            },
        );
        assert_eq!(event.offset_ms, 0);
    }

    #[test]
    fn metadata_carries_crate_version() {
        let metadata = ReportMetadata::new(Utc::now(), 10, 3);
        assert_eq!(metadata.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.event_count, 3);
    }
}
