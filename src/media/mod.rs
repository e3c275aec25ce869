// SPDX-License-Identifier: MPL-2.0
//! Gallery image loading and caching.
//!
//! - [`ImageSource`]: where an [`ImageRef`] points (network or disk)
//! - [`loader`]: async fetch of image bytes into Iced image handles
//! - [`cache`]: LRU cache of decoded handles plus in-flight bookkeeping

pub mod cache;
pub mod loader;

pub use cache::{CacheStats, ImageCache, ImageStatus};
pub use loader::{load_image, ImageLoader};

use crate::domain::gallery::ImageRef;
use std::path::PathBuf;

/// Resolved location of a gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl From<&ImageRef> for ImageSource {
    fn from(image: &ImageRef) -> Self {
        if image.is_remote() {
            ImageSource::Remote(image.as_str().to_string())
        } else {
            ImageSource::Local(PathBuf::from(image.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_resolve_to_remote() {
        let image = ImageRef::new("https://res.cloudinary.com/demo/a.png");
        assert_eq!(
            ImageSource::from(&image),
            ImageSource::Remote("https://res.cloudinary.com/demo/a.png".to_string())
        );
    }

    #[test]
    fn other_references_resolve_to_local_paths() {
        let image = ImageRef::new("photos/a.png");
        assert_eq!(
            ImageSource::from(&image),
            ImageSource::Local(PathBuf::from("photos/a.png"))
        );
    }
}
