// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer session state machine.
//!
//! `Closed --open--> Open(Session)`; `next`, `previous` and `jump_to` move
//! within the session; `close` returns to `Closed`. Opening while already
//! open replaces the item and resets the index.

use super::item::{GalleryItem, ImageRef};
use crate::domain::navigation::{self, Direction};
use std::sync::Arc;

/// The item being shown and the position within its gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    item: Arc<GalleryItem>,
    current_index: usize,
}

impl Session {
    fn new(item: Arc<GalleryItem>) -> Self {
        Self {
            item,
            current_index: 0,
        }
    }

    #[must_use]
    pub fn item(&self) -> &Arc<GalleryItem> {
        &self.item
    }

    /// Always in `0..item.image_count()`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> &ImageRef {
        // current_index is kept in range by every transition
        &self.item.gallery()[self.current_index]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(Session),
}

/// Owns the viewer state and enforces its transitions.
///
/// Every operation returns whether the state changed, so callers can skip
/// logging or prefetching for no-ops.
#[derive(Debug, Clone, Default)]
pub struct GalleryViewer {
    state: ViewerState,
}

impl GalleryViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `item` starting from its first image.
    pub fn open(&mut self, item: Arc<GalleryItem>) -> bool {
        let changed = match &self.state {
            ViewerState::Open(session) => {
                !Arc::ptr_eq(&session.item, &item) || session.current_index != 0
            }
            ViewerState::Closed => true,
        };
        self.state = ViewerState::Open(Session::new(item));
        changed
    }

    /// Ends the session. Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ViewerState::Open(_) => true,
            ViewerState::Closed => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.step(Direction::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.step(Direction::Previous)
    }

    /// Moves one image in `direction`, wrapping at both ends.
    ///
    /// No-op when closed or when the gallery has a single image.
    pub fn step(&mut self, direction: Direction) -> bool {
        let ViewerState::Open(session) = &mut self.state else {
            return false;
        };
        let len = session.item.image_count();
        if len <= 1 {
            return false;
        }
        session.current_index = navigation::step(session.current_index, len, direction);
        true
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let ViewerState::Open(session) = &mut self.state else {
            return false;
        };
        if index >= session.item.image_count() || index == session.current_index {
            return false;
        }
        session.current_index = index;
        true
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            ViewerState::Open(session) => Some(session),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open(_))
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&Arc<GalleryItem>> {
        self.session().map(Session::item)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session().map(Session::current_index)
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.session().map(Session::current_image)
    }

    /// Images adjacent to the current one, for prefetching.
    ///
    /// Empty when closed or when the gallery has a single image.
    #[must_use]
    pub fn neighbors(&self) -> Vec<&ImageRef> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        let len = session.item.image_count();
        if len <= 1 {
            return Vec::new();
        }
        let next = navigation::wrap_next(session.current_index, len);
        let previous = navigation::wrap_previous(session.current_index, len);
        let mut indices = vec![next];
        if previous != next {
            indices.push(previous);
        }
        indices
            .into_iter()
            .filter_map(|i| session.item.image(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, count: usize) -> Arc<GalleryItem> {
        let refs = (0..count)
            .map(|i| ImageRef::new(format!("{title}-{i}.png")))
            .collect();
        Arc::new(GalleryItem::new(title, refs).expect("non-empty gallery"))
    }

    #[test]
    fn starts_closed() {
        let viewer = GalleryViewer::new();
        assert!(!viewer.is_open());
        assert_eq!(viewer.state(), &ViewerState::Closed);
        assert!(viewer.current_image().is_none());
    }

    #[test]
    fn open_shows_first_image() {
        let mut viewer = GalleryViewer::new();
        assert!(viewer.open(item("a", 3)));
        assert_eq!(viewer.current_index(), Some(0));
        assert_eq!(viewer.current_image().map(ImageRef::as_str), Some("a-0.png"));
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 3));

        assert!(viewer.next());
        assert!(viewer.next());
        assert_eq!(viewer.current_index(), Some(2));
        assert!(viewer.next());
        assert_eq!(viewer.current_index(), Some(0));
        assert!(viewer.previous());
        assert_eq!(viewer.current_index(), Some(2));
    }

    #[test]
    fn navigation_is_noop_for_single_image() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("solo", 1));
        assert!(!viewer.next());
        assert!(!viewer.previous());
        assert_eq!(viewer.current_index(), Some(0));
        assert!(viewer.neighbors().is_empty());
    }

    #[test]
    fn navigation_is_noop_when_closed() {
        let mut viewer = GalleryViewer::new();
        assert!(!viewer.next());
        assert!(!viewer.previous());
        assert!(!viewer.jump_to(0));
        assert!(!viewer.close());
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 4));
        assert!(viewer.jump_to(3));
        assert_eq!(viewer.current_index(), Some(3));
        assert!(!viewer.jump_to(4));
        assert!(!viewer.jump_to(usize::MAX));
        assert_eq!(viewer.current_index(), Some(3));
    }

    #[test]
    fn jump_to_current_reports_no_change() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 2));
        assert!(!viewer.jump_to(0));
    }

    #[test]
    fn reopening_resets_index() {
        let mut viewer = GalleryViewer::new();
        let a = item("a", 3);
        viewer.open(Arc::clone(&a));
        viewer.next();
        viewer.next();

        let b = item("b", 5);
        assert!(viewer.open(Arc::clone(&b)));
        assert_eq!(viewer.current_index(), Some(0));
        assert!(Arc::ptr_eq(viewer.active_item().unwrap(), &b));
    }

    #[test]
    fn reopening_same_item_at_start_is_unchanged() {
        let mut viewer = GalleryViewer::new();
        let a = item("a", 3);
        viewer.open(Arc::clone(&a));
        assert!(!viewer.open(a));
    }

    #[test]
    fn close_discards_session() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 2));
        viewer.next();
        assert!(viewer.close());
        assert!(!viewer.is_open());
        assert!(viewer.active_item().is_none());

        viewer.open(item("a", 2));
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn index_stays_in_range_for_any_sequence() {
        for len in 1..6 {
            let mut viewer = GalleryViewer::new();
            viewer.open(item("p", len));
            // deterministic pseudo-random walk
            let mut seed: u32 = 0x9E37_79B9;
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                match seed % 3 {
                    0 => viewer.next(),
                    1 => viewer.previous(),
                    _ => viewer.jump_to((seed as usize / 3) % (len + 2)),
                };
                let index = viewer.current_index().unwrap();
                assert!(index < len);
            }
        }
    }

    #[test]
    fn next_then_previous_is_identity() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 5));
        for start in 0..5 {
            viewer.jump_to(start);
            viewer.next();
            viewer.previous();
            assert_eq!(viewer.current_index(), Some(start));
            viewer.previous();
            viewer.next();
            assert_eq!(viewer.current_index(), Some(start));
        }
    }

    #[test]
    fn neighbors_cover_both_sides() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 4));
        let names: Vec<_> = viewer.neighbors().iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["a-1.png", "a-3.png"]);
    }

    #[test]
    fn neighbors_deduplicate_for_two_images() {
        let mut viewer = GalleryViewer::new();
        viewer.open(item("a", 2));
        assert_eq!(viewer.neighbors().len(), 1);
    }
}
