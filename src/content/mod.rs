// SPDX-License-Identifier: MPL-2.0
//! Site content: navigation links, services, projects and testimonials.
//!
//! A sample catalog is embedded from `assets/content/catalog.toml`. A
//! different file can be supplied with `--content`. Either way the catalog
//! is validated once at load time and shared as `Arc<Catalog>`, so every
//! page reads from the same source.

use crate::domain::gallery::{GalleryItem, ImageRef};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "catalog.toml";

/// A header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    /// Whether this entry toggles the services dropdown.
    #[serde(default)]
    pub has_services: bool,
}

/// An entry of the services dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

/// On-disk shape of a project, before the gallery invariant is checked.
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    title: String,
    #[serde(default)]
    meta: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    gallery: Vec<String>,
}

impl TryFrom<ProjectRecord> for GalleryItem {
    type Error = Error;

    fn try_from(record: ProjectRecord) -> Result<Self> {
        let gallery = record.gallery.into_iter().map(ImageRef::new).collect();
        let item = GalleryItem::new(record.title, gallery)?
            .with_meta(record.meta)
            .with_location(record.location)
            .with_description(record.description)
            .with_alt(record.alt);
        Ok(item)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    nav_links: Vec<NavLink>,
    #[serde(default)]
    services: Vec<ServiceLink>,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    testimonials: Vec<Testimonial>,
}

/// Validated site content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    nav_links: Vec<NavLink>,
    services: Vec<ServiceLink>,
    projects: Vec<Arc<GalleryItem>>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Parses and validates a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if the TOML is malformed, a project has an
    /// empty gallery, or there are no projects at all.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;

        if file.projects.is_empty() {
            return Err(Error::Content("catalog has no projects".to_string()));
        }

        let projects = file
            .projects
            .into_iter()
            .map(|record| GalleryItem::try_from(record).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            nav_links: file.nav_links,
            services: file.services,
            projects,
            testimonials: file.testimonials,
        })
    }

    /// Loads the catalog compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_CATALOG)
            .ok_or_else(|| Error::Content(format!("missing embedded {EMBEDDED_CATALOG}")))?;
        let source = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml_str(&source)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Loads `override_path` if given, falling back to the embedded catalog.
    ///
    /// Returns the catalog and, when the override could not be used, the
    /// error that caused the fallback.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded catalog itself is invalid.
    pub fn load_with_override(override_path: Option<&Path>) -> Result<(Self, Option<Error>)> {
        if let Some(path) = override_path {
            match Self::load_from_path(path) {
                Ok(catalog) => return Ok((catalog, None)),
                Err(err) => return Self::load_embedded().map(|catalog| (catalog, Some(err))),
            }
        }
        Self::load_embedded().map(|catalog| (catalog, None))
    }

    #[must_use]
    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    #[must_use]
    pub fn services(&self) -> &[ServiceLink] {
        &self.services
    }

    #[must_use]
    pub fn projects(&self) -> &[Arc<GalleryItem>] {
        &self.projects
    }

    #[must_use]
    pub fn project(&self, index: usize) -> Option<&Arc<GalleryItem>> {
        self.projects.get(index)
    }

    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }
}
