// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded in-memory log of user actions and app events,
//! exportable as JSON for bug reports.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, CloseReason, DiagnosticEvent, DiagnosticEventKind, InputSource, UserAction,
    WarningKind,
};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
