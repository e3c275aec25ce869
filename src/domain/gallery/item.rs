// SPDX-License-Identifier: MPL-2.0
//! Portfolio entries shown by the gallery viewer.

use std::fmt;

/// Opaque reference to one gallery image (a URL or a filesystem path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the reference points at an HTTP(S) resource.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("https://") || self.0.starts_with("http://")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Reasons a gallery item cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The item has no images; the viewer requires at least one.
    EmptyGallery { title: String },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::EmptyGallery { title } => {
                write!(f, "project '{}' has an empty gallery", title)
            }
        }
    }
}

impl std::error::Error for GalleryError {}

/// An immutable portfolio entry with an ordered, non-empty image sequence.
///
/// The non-empty invariant is checked once in [`GalleryItem::new`], so the
/// viewer never has to handle an item it cannot display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    title: String,
    meta: String,
    location: String,
    description: String,
    gallery: Vec<ImageRef>,
    alt: String,
}

impl GalleryItem {
    /// Creates an item with the given title and images.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::EmptyGallery`] if `gallery` is empty.
    pub fn new(title: impl Into<String>, gallery: Vec<ImageRef>) -> Result<Self, GalleryError> {
        let title = title.into();
        if gallery.is_empty() {
            return Err(GalleryError::EmptyGallery { title });
        }
        Ok(Self {
            title,
            meta: String::new(),
            location: String::new(),
            description: String::new(),
            gallery,
            alt: String::new(),
        })
    }

    #[must_use]
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn meta(&self) -> &str {
        &self.meta
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Accessible description, falling back to the title when none was given.
    #[must_use]
    pub fn alt(&self) -> &str {
        if self.alt.is_empty() {
            &self.title
        } else {
            &self.alt
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &[ImageRef] {
        &self.gallery
    }

    /// Number of images; always at least 1.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.gallery.len()
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageRef> {
        self.gallery.get(index)
    }

    /// The cover image shown on the project card.
    #[must_use]
    pub fn cover(&self) -> &ImageRef {
        &self.gallery[0]
    }

    /// Whether the item has enough images for navigation controls.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.gallery.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(count: usize) -> Vec<ImageRef> {
        (0..count)
            .map(|i| ImageRef::new(format!("img-{i}.png")))
            .collect()
    }

    #[test]
    fn new_rejects_empty_gallery() {
        let err = GalleryItem::new("Tower", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            GalleryError::EmptyGallery {
                title: "Tower".to_string()
            }
        );
        assert!(err.to_string().contains("Tower"));
    }

    #[test]
    fn builder_sets_descriptive_fields() {
        let item = GalleryItem::new("Office", refs(2))
            .unwrap()
            .with_meta("Fit-out")
            .with_location("Westbay")
            .with_description("Four floors")
            .with_alt("Office interior");

        assert_eq!(item.title(), "Office");
        assert_eq!(item.meta(), "Fit-out");
        assert_eq!(item.location(), "Westbay");
        assert_eq!(item.description(), "Four floors");
        assert_eq!(item.alt(), "Office interior");
    }

    #[test]
    fn alt_falls_back_to_title() {
        let item = GalleryItem::new("Villa", refs(1)).unwrap();
        assert_eq!(item.alt(), "Villa");
    }

    #[test]
    fn cover_is_first_image() {
        let item = GalleryItem::new("Villa", refs(3)).unwrap();
        assert_eq!(item.cover().as_str(), "img-0.png");
        assert_eq!(item.image(2).map(ImageRef::as_str), Some("img-2.png"));
        assert!(item.image(3).is_none());
    }

    #[test]
    fn single_image_is_not_navigable() {
        assert!(!GalleryItem::new("A", refs(1)).unwrap().is_navigable());
        assert!(GalleryItem::new("B", refs(2)).unwrap().is_navigable());
    }

    #[test]
    fn image_ref_detects_remote_sources() {
        assert!(ImageRef::from("https://example.com/a.png").is_remote());
        assert!(ImageRef::from("http://example.com/a.png").is_remote());
        assert!(!ImageRef::from("/home/user/a.png").is_remote());
        assert!(!ImageRef::from("assets/a.png").is_remote());
    }
}
