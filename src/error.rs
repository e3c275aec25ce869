// SPDX-License-Identifier: MPL-2.0
use crate::domain::gallery::GalleryError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The content catalog is missing, malformed, or violates an invariant
    /// (for example a project whose gallery is empty).
    Content(String),
    /// Fetching a remote image failed (connection error or non-success status).
    Network(String),
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Content(_) => "error-content",
            Error::Network(_) => "error-image-load",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Content(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_formats_properly() {
        let err = Error::Content("project 'A' has an empty gallery".into());
        assert_eq!(
            format!("{}", err),
            "Content Error: project 'A' has an empty gallery"
        );
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn empty_gallery_maps_to_content_variant() {
        let err: Error = GalleryError::EmptyGallery {
            title: "A".to_string(),
        }
        .into();
        assert_eq!(err, Error::Content("project 'A' has an empty gallery".into()));
    }

    #[test]
    fn i18n_keys_are_stable() {
        assert_eq!(Error::Network("x".into()).i18n_key(), "error-image-load");
        assert_eq!(
            Error::Config("x".into()).i18n_key(),
            "notification-config-load-error"
        );
        assert_eq!(Error::Content("x".into()).i18n_key(), "error-content");
    }
}
