// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image fetches.
//!
//! Decoding runs on tokio's blocking pool so the iced update loop never
//! waits on disk or codec work.

use crate::error::{Error, Result};
use crate::media::{load_image, ImageData};
use std::path::PathBuf;

/// Decodes the image at `path` off the UI thread.
pub async fn fetch_image(path: PathBuf) -> Result<ImageData> {
    tracing::debug!(path = %path.display(), "fetching image");
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Image fetch task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[tokio::test]
    async fn fetch_decodes_existing_image() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("tile.png");
        RgbaImage::from_pixel(3, 5, Rgba([0, 128, 255, 255]))
            .save(&path)
            .expect("write png");

        let image = fetch_image(path).await.expect("decode");
        assert_eq!((image.width, image.height), (3, 5));
    }

    #[tokio::test]
    async fn fetch_reports_missing_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let result = fetch_image(temp_dir.path().join("gone.jpg")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
