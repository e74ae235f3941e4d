// SPDX-License-Identifier: MPL-2.0
//! Resolution of gallery URLs into something Iced can draw.

use crate::error::{FetchError, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Where the pixels of a gallery item come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    /// Classifies `url`; relative paths are joined onto `base_dir` when given.
    #[must_use]
    pub fn parse(url: &str, base_dir: Option<&Path>) -> Self {
        let trimmed = url.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ImageSource::Remote(trimmed.to_string());
        }

        let path = Path::new(trimmed.strip_prefix("file://").unwrap_or(trimmed));
        match base_dir {
            Some(base) if path.is_relative() => ImageSource::Local(base.join(path)),
            _ => ImageSource::Local(path.to_path_buf()),
        }
    }

    /// Handle for local files; remote sources must be fetched first.
    #[must_use]
    pub fn local_handle(&self) -> Option<image::Handle> {
        match self {
            ImageSource::Local(path) => Some(image::Handle::from_path(path)),
            ImageSource::Remote(_) => None,
        }
    }
}

/// Downloads a remote image and returns its encoded bytes.
///
/// # Errors
///
/// Returns [`crate::error::Error::Fetch`] for transport failures, non-success
/// statuses and empty bodies.
pub async fn fetch_remote(url: String) -> Result<Vec<u8>> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(FetchError::EmptyBody.into());
    }
    tracing::debug!(%url, len = bytes.len(), "remote image fetched");
    Ok(bytes.to_vec())
}

/// Resolves any source into an image handle, downloading remote ones.
///
/// # Errors
///
/// Same as [`fetch_remote`]; local sources never fail here (unreadable files
/// surface when Iced decodes the handle).
pub async fn fetch_handle(source: ImageSource) -> Result<image::Handle> {
    match source {
        ImageSource::Local(path) => Ok(image::Handle::from_path(path)),
        ImageSource::Remote(url) => fetch_remote(url).await.map(image::Handle::from_bytes),
    }
}
