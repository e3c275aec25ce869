// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use crate::media::CacheStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a navigation was triggered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Keyboard,
    Swipe,
    Button,
}

/// Why the gallery closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    Escape,
    Backdrop,
    CloseButton,
    /// The host page deselected the project.
    Host,
}

/// User-initiated actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Gallery
    // ==========================================================================
    OpenGallery {
        project: String,
        image_count: usize,
    },
    CloseGallery {
        reason: CloseReason,
    },
    NavigateNext {
        source: InputSource,
    },
    NavigatePrevious {
        source: InputSource,
    },
    JumpToImage {
        index: usize,
    },

    // ==========================================================================
    // Page shell
    // ==========================================================================
    ToggleServicesMenu {
        open: bool,
    },
    ToggleMobileNav {
        open: bool,
    },
    ActivateLink {
        href: String,
    },
    CarouselNext,
    CarouselPrevious,
    CarouselGoTo {
        index: usize,
    },
}

/// Application lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    Startup { locale: String, project_count: usize },
    Shutdown { image_cache: CacheStats },
}

/// Recoverable problems the user may notice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    ConfigLoad,
    ContentFallback,
    ImageLoad,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },
    AppState {
        state: AppStateEvent,
    },
    Warning {
        kind: WarningKind,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}
