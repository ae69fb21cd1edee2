//! Body diagram image loading

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Error, Result};

/// A decoded background image
#[derive(Clone, Debug)]
pub struct BackgroundImage {
    pub rgba: RgbaImage,
    pub path: PathBuf,
}

impl BackgroundImage {
    /// Read and decode an image file without blocking the event loop
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|e| Error::AssetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::decode(path, &bytes)
    }

    /// Decode an already fetched image
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)
            .map_err(|e| Error::AssetLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .to_rgba8();
        log::debug!(
            "Background {} decoded: {}x{} pixels",
            path.display(),
            rgba.width(),
            rgba.height()
        );
        Ok(Self {
            rgba,
            path: path.to_path_buf(),
        })
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.png");
        RgbaImage::from_pixel(6, 9, image::Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let image = BackgroundImage::load(&path).await.unwrap();
        assert_eq!((image.width(), image.height()), (6, 9));
        assert_eq!(image.rgba.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = BackgroundImage::load(Path::new("/nonexistent/body.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AssetLoad { .. }));
    }

    #[test]
    fn test_undecodable_bytes() {
        let err = BackgroundImage::decode(Path::new("body.png"), b"not an image").unwrap_err();
        assert!(matches!(err, Error::AssetLoad { ref path, .. } if path == Path::new("body.png")));
    }
}
