// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode, thumbnail, and re-encode in-memory images using
// the `image` crate. Used for collector previews and camera-frame encoding.

use image::{DynamicImage, ImageFormat};
use pdftools_core::error::{PdfToolsError, Result};
use tracing::{debug, instrument};

/// Wraps a decoded image for thumbnailing and encoding.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so calls
/// chain:
///
/// ```ignore
/// let preview = ImageProcessor::from_bytes(&bytes)?
///     .thumbnail(320, 320)
///     .to_png_bytes()?;
/// ```
pub struct ImageProcessor {
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            PdfToolsError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        debug!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self { image: img })
    }

    /// Create a processor from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| PdfToolsError::ImageError(format!("failed to decode image: {err}")))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Natural pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Downscale to fit within `max_width` x `max_height`, preserving aspect
    /// ratio. Uses Lanczos3 filtering. Images already inside the bounds are
    /// returned unchanged.
    #[instrument(skip(self), fields(max_width, max_height))]
    pub fn thumbnail(self, max_width: u32, max_height: u32) -> Self {
        if self.image.width() <= max_width && self.image.height() <= max_height {
            return self;
        }
        let resized = self
            .image
            .resize(max_width, max_height, image::imageops::FilterType::Lanczos3);
        debug!(
            new_w = resized.width(),
            new_h = resized.height(),
            "Thumbnail generated"
        );
        Self { image: resized }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| PdfToolsError::ImageError(format!("PNG encoding failed: {err}")))?;
        Ok(buffer)
    }

    /// Encode the current image as JPEG bytes with the given quality (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let rgb = self.image.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
        rgb.write_with_encoder(encoder)
            .map_err(|err| PdfToolsError::ImageError(format!("JPEG encoding failed: {err}")))?;
        Ok(buffer)
    }

    /// Write the image to a file. The format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.image.save(path.as_ref()).map_err(|err| {
            PdfToolsError::ImageError(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn sample(width: u32, height: u32) -> ImageProcessor {
        let img = RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(img))
    }

    #[test]
    fn decode_round_trip_keeps_dimensions() {
        let png = sample(120, 90).to_png_bytes().unwrap();
        let decoded = ImageProcessor::from_bytes(&png).unwrap();
        assert_eq!(decoded.dimensions(), (120, 90));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            ImageProcessor::from_bytes(&[1, 2, 3]),
            Err(PdfToolsError::ImageError(_))
        ));
    }

    #[test]
    fn thumbnail_preserves_aspect_ratio() {
        let thumb = sample(1600, 800).thumbnail(320, 320);
        assert_eq!(thumb.dimensions(), (320, 160));
    }

    #[test]
    fn thumbnail_does_not_upscale() {
        let thumb = sample(100, 50).thumbnail(320, 320);
        assert_eq!(thumb.dimensions(), (100, 50));
    }

    #[test]
    fn jpeg_encoding_produces_bytes() {
        let jpeg = sample(64, 64).to_jpeg_bytes(90).unwrap();
        assert!(!jpeg.is_empty());
        // JPEG SOI marker.
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
