// SPDX-License-Identifier: MPL-2.0
//! LRU cache of gallery image handles.
//!
//! Besides the loaded handles, the cache remembers which references are in
//! flight and which failed, so the app never issues the same request twice
//! and can show a placeholder instead of retrying on every frame.

use crate::app::config::DEFAULT_IMAGE_CACHE_CAPACITY;
use crate::domain::gallery::ImageRef;
use iced::widget::image;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// What the view should show for a given image.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageStatus {
    Ready(image::Handle),
    Loading,
    Failed,
    /// Never requested.
    Unknown,
}

/// Request counters, reported in the shutdown diagnostics event.
///
/// A hit is a request for an image already cached; a miss starts a fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    entries: LruCache<ImageRef, image::Handle>,
    pending: HashSet<ImageRef>,
    failed: HashSet<ImageRef>,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` handles (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Reports the status of `image` without touching LRU order.
    #[must_use]
    pub fn status(&self, image: &ImageRef) -> ImageStatus {
        if let Some(handle) = self.entries.peek(image) {
            ImageStatus::Ready(handle.clone())
        } else if self.pending.contains(image) {
            ImageStatus::Loading
        } else if self.failed.contains(image) {
            ImageStatus::Failed
        } else {
            ImageStatus::Unknown
        }
    }

    /// Marks `image` as requested.
    ///
    /// Returns false if it is already cached, in flight, or known to fail;
    /// the caller should not start a fetch then. A cached image counts as a
    /// hit and moves to the front of the LRU order.
    pub fn begin_request(&mut self, image: &ImageRef) -> bool {
        if self.entries.promote(image) {
            self.stats.hits += 1;
            return false;
        }
        if self.pending.contains(image) || self.failed.contains(image) {
            return false;
        }
        self.stats.misses += 1;
        self.pending.insert(image.clone());
        true
    }

    /// Filters `images` down to those that still need a fetch, marking each
    /// returned one as pending.
    pub fn claim_requests<'a, I>(&mut self, images: I) -> Vec<ImageRef>
    where
        I: IntoIterator<Item = &'a ImageRef>,
    {
        images
            .into_iter()
            .filter(|image| self.begin_request(image))
            .cloned()
            .collect()
    }

    /// Stores a loaded handle and clears the pending mark.
    pub fn insert(&mut self, image: ImageRef, handle: image::Handle) {
        self.pending.remove(&image);
        self.failed.remove(&image);
        if let Some((evicted, _)) = self.entries.push(image.clone(), handle) {
            if evicted != image {
                self.stats.evictions += 1;
            }
        }
    }

    /// Records a failed load and clears the pending mark.
    pub fn mark_failed(&mut self, image: ImageRef) {
        self.pending.remove(&image);
        self.failed.insert(image);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .field("stats", &self.stats)
            .finish()
    }
}
