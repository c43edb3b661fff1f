// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview helpers — thumbnail generation and inline data URLs for the
// collector grids.

use base64::Engine;
use pdftools_core::types::ImageItem;
use pdftools_document::ImageProcessor;
use tracing::warn;

/// Longest edge of a preview thumbnail, in pixels.
const PREVIEW_MAX_EDGE: u32 = 480;

/// Decode the item once to record its pixel dimensions and attach a PNG
/// thumbnail for the preview grid.
///
/// Failure is non-fatal: the item keeps its bytes and the grid shows a
/// placeholder; the assembler will surface the decode error at generate
/// time.
pub fn prepare(item: &mut ImageItem) {
    match ImageProcessor::from_bytes(&item.bytes) {
        Ok(processor) => {
            item.pixel_size = Some(processor.dimensions());
            match processor
                .thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE)
                .to_png_bytes()
            {
                Ok(png) => item.preview_png = Some(png),
                Err(e) => warn!(name = %item.name, error = %e, "preview encode failed"),
            }
        }
        Err(e) => warn!(name = %item.name, error = %e, "preview decode failed"),
    }
}

/// Inline `data:` URL for the item's thumbnail, if one exists.
pub fn data_url(item: &ImageItem) -> Option<String> {
    item.preview_png.as_ref().map(|png| {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(png)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftools_core::types::ImageSource;

    fn png_item(width: u32, height: u32) -> ImageItem {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([5, 10, 15]));
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        ImageItem::new("test.png".into(), "image/png".into(), buf, ImageSource::FilePick)
    }

    #[test]
    fn prepare_records_dimensions_and_thumbnail() {
        let mut item = png_item(1000, 500);
        prepare(&mut item);
        assert_eq!(item.pixel_size, Some((1000, 500)));
        assert!(item.preview_png.is_some());
    }

    #[test]
    fn data_url_has_png_prefix() {
        let mut item = png_item(100, 100);
        prepare(&mut item);
        let url = data_url(&item).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn broken_bytes_leave_item_without_preview() {
        let mut item = ImageItem::new(
            "bad.png".into(),
            "image/png".into(),
            vec![9, 9, 9],
            ImageSource::FilePick,
        );
        prepare(&mut item);
        assert!(item.preview_png.is_none());
        assert!(data_url(&item).is_none());
    }
}
