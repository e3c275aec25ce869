// SPDX-License-Identifier: MPL-2.0
//! Async image fetching.

use super::ImageSource;
use crate::app::config::IMAGE_REQUEST_TIMEOUT_SECS;
use crate::domain::gallery::ImageRef;
use crate::error::{Error, Result};
use iced::widget::image;
use std::time::Duration;

/// Fetches image bytes from the network or the filesystem.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
}

impl ImageLoader {
    /// Builds a loader with a bounded redirect policy and request timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("PortfolioLens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(IMAGE_REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Reads the raw bytes of `source`.
    ///
    /// # Errors
    ///
    /// [`Error::Network`] for connection failures and non-success HTTP
    /// status; [`Error::Io`] for unreadable local files.
    pub async fn fetch_bytes(&self, source: &ImageSource) -> Result<Vec<u8>> {
        match source {
            ImageSource::Remote(url) => {
                let response = self.client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(Error::Network(format!(
                        "HTTP status: {}",
                        response.status()
                    )));
                }
                let bytes = response.bytes().await?;
                Ok(bytes.to_vec())
            }
            ImageSource::Local(path) => Ok(tokio::fs::read(path).await?),
        }
    }
}

/// Loads one gallery image into an Iced handle.
///
/// Returns the reference alongside the result so the caller can settle its
/// pending bookkeeping whatever the outcome. Decoding happens lazily in the
/// renderer, so a corrupt file shows up as an empty image rather than here.
pub async fn load_image(
    loader: ImageLoader,
    image_ref: ImageRef,
) -> (ImageRef, Result<image::Handle>) {
    let source = ImageSource::from(&image_ref);
    let result = loader
        .fetch_bytes(&source)
        .await
        .and_then(|bytes| {
            if bytes.is_empty() {
                Err(Error::Io(format!("{image_ref} is empty")))
            } else {
                Ok(image::Handle::from_bytes(bytes))
            }
        });
    (image_ref, result)
}
