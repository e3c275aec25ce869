// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: portfolio items and the viewer session state machine.

mod item;
mod viewer;

pub use item::{GalleryError, GalleryItem, ImageRef};
pub use viewer::{GalleryViewer, Session, ViewerState};
