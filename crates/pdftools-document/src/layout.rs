// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page-fit layout — scale an image to the largest size that fits inside a
// margin-bounded printable area while preserving its aspect ratio, centred
// on the page. Both the image-to-PDF and camera-scan flows place every
// page through this routine.

use pdftools_core::PaperSize;
use pdftools_core::error::{PdfToolsError, Result};
use tracing::debug;

/// Fixed page dimensions and margin for one assembly run, in millimetres.
///
/// The margin applies on all four sides; the printable area is
/// `(width - 2*margin) x (height - 2*margin)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// Build a geometry, validating that the printable area is non-empty.
    pub fn new(width: f32, height: f32, margin: f32) -> Result<Self> {
        if !(width > 0.0 && height > 0.0 && margin > 0.0) {
            return Err(PdfToolsError::PageGeometry(format!(
                "page {width}x{height} with margin {margin} must all be positive"
            )));
        }
        if width <= 2.0 * margin || height <= 2.0 * margin {
            return Err(PdfToolsError::PageGeometry(format!(
                "margin {margin} leaves no printable area on a {width}x{height} page"
            )));
        }
        Ok(Self {
            width,
            height,
            margin,
        })
    }

    /// Geometry for a standard paper size with the given margin.
    pub fn from_paper(paper: PaperSize, margin: f32) -> Result<Self> {
        let (width, height) = paper.dimensions_mm();
        Self::new(width, height, margin)
    }

    /// Printable area (width, height) inside the margins.
    pub fn available(&self) -> (f32, f32) {
        (
            self.width - 2.0 * self.margin,
            self.height - 2.0 * self.margin,
        )
    }
}

/// Where an image lands on the page, in millimetres from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the maximal centred placement for an image on a page.
///
/// The standard "contain" fit: compare the image's aspect ratio against the
/// printable area's. The relatively wider side is bound-limited; the other
/// follows from the ratio. The result is centred on the full page, so at
/// least one dimension exactly touches its printable-area bound.
///
/// Zero image dimensions are rejected; callers must wait for decode to
/// complete before asking for a placement.
pub fn fit_to_page(image_width: u32, image_height: u32, geometry: PageGeometry) -> Result<Placement> {
    if image_width == 0 || image_height == 0 {
        return Err(PdfToolsError::InvalidDimensions {
            width: image_width,
            height: image_height,
        });
    }

    let (available_width, available_height) = geometry.available();
    let image_ratio = image_width as f32 / image_height as f32;
    let page_ratio = available_width / available_height;

    let (width, height) = if image_ratio > page_ratio {
        // Image is relatively wider: width touches the bound.
        let width = available_width;
        (width, width / image_ratio)
    } else {
        // Image is relatively taller (or equal): height touches the bound.
        let height = available_height;
        (height * image_ratio, height)
    };

    let x = (geometry.width - width) / 2.0;
    let y = (geometry.height - height) / 2.0;

    debug!(image_width, image_height, width, height, x, y, "placement computed");

    Ok(Placement {
        x,
        y,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn a4_margin_10() -> PageGeometry {
        PageGeometry::new(210.0, 297.0, 10.0).unwrap()
    }

    #[test]
    fn landscape_image_on_a4_worked_example() {
        // Page 210x297, margin 10 => printable 190x277. A 4000x3000 image is
        // relatively wider than the printable area, so width binds.
        let placement = fit_to_page(4000, 3000, a4_margin_10()).unwrap();
        assert!((placement.width - 190.0).abs() < EPS);
        assert!((placement.height - 142.5).abs() < EPS);
        assert!((placement.x - 10.0).abs() < EPS);
        assert!((placement.y - 77.25).abs() < EPS);
    }

    #[test]
    fn portrait_image_is_height_bound() {
        let placement = fit_to_page(1000, 3000, a4_margin_10()).unwrap();
        assert!((placement.height - 277.0).abs() < EPS);
        assert!((placement.width - 277.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        for (w, h) in [(4000, 3000), (640, 480), (1080, 1920), (500, 500), (7, 9973)] {
            let placement = fit_to_page(w, h, a4_margin_10()).unwrap();
            let image_ratio = w as f32 / h as f32;
            let placed_ratio = placement.width / placement.height;
            assert!(
                (placed_ratio - image_ratio).abs() < 1e-3 * image_ratio,
                "ratio drifted for {w}x{h}: {placed_ratio} vs {image_ratio}"
            );
        }
    }

    #[test]
    fn placement_fits_and_is_maximal() {
        let geometry = a4_margin_10();
        let (aw, ah) = geometry.available();
        for (w, h) in [(4000, 3000), (3000, 4000), (100, 100), (1920, 1080)] {
            let placement = fit_to_page(w, h, geometry).unwrap();
            assert!(placement.width <= aw + EPS);
            assert!(placement.height <= ah + EPS);
            // Maximal: at least one dimension touches its bound.
            assert!(
                (placement.width - aw).abs() < EPS || (placement.height - ah).abs() < EPS,
                "not maximal for {w}x{h}: {placement:?}"
            );
        }
    }

    #[test]
    fn placement_is_centred() {
        let geometry = a4_margin_10();
        for (w, h) in [(4000, 3000), (3000, 4000), (123, 456)] {
            let placement = fit_to_page(w, h, geometry).unwrap();
            assert!((placement.x + placement.width / 2.0 - geometry.width / 2.0).abs() < EPS);
            assert!((placement.y + placement.height / 2.0 - geometry.height / 2.0).abs() < EPS);
        }
    }

    #[test]
    fn square_image_on_scan_geometry() {
        // Camera-scan flow uses a 5 mm margin.
        let geometry = PageGeometry::new(210.0, 297.0, 5.0).unwrap();
        let placement = fit_to_page(2000, 2000, geometry).unwrap();
        assert!((placement.width - 200.0).abs() < EPS);
        assert!((placement.height - 200.0).abs() < EPS);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let geometry = a4_margin_10();
        assert!(matches!(
            fit_to_page(0, 100, geometry),
            Err(PdfToolsError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            fit_to_page(100, 0, geometry),
            Err(PdfToolsError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn oversized_margin_is_rejected() {
        assert!(PageGeometry::new(210.0, 297.0, 105.0).is_err());
        assert!(PageGeometry::new(210.0, 297.0, 150.0).is_err());
        assert!(PageGeometry::new(210.0, 297.0, -1.0).is_err());
    }

    #[test]
    fn from_paper_uses_paper_dimensions() {
        let geometry = PageGeometry::from_paper(PaperSize::A4, 10.0).unwrap();
        assert_eq!(geometry.width, 210.0);
        assert_eq!(geometry.height, 297.0);
        assert_eq!(geometry.available(), (190.0, 277.0));
    }
}
