// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembler — build a PDF with one page per collected image.
//
// Pages appear in collector order. Each image is decoded on a blocking task
// and awaited before its placement is computed; images are processed strictly
// one at a time and a started assembly runs to completion or fails as a whole.

use pdftools_core::PaperSize;
use pdftools_core::error::{PdfToolsError, Result};
use pdftools_core::types::ImageItem;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument};

use crate::layout::{self, PageGeometry};

/// Default download name for the image-to-PDF flow.
pub const IMAGES_PDF_FILENAME: &str = "images.pdf";

/// Default download name for the camera-scan flow.
pub const SCAN_PDF_FILENAME: &str = "scanned-document.pdf";

/// Pixel data decoded for embedding.
struct DecodedImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

fn decode_rgb(bytes: &[u8]) -> Result<DecodedImage> {
    let dynamic = image::load_from_memory(bytes)
        .map_err(|err| PdfToolsError::ImageError(format!("failed to decode image: {err}")))?;
    let (width, height) = (dynamic.width(), dynamic.height());
    Ok(DecodedImage {
        width,
        height,
        rgb: dynamic.to_rgb8().into_raw(),
    })
}

/// Builds multi-page PDFs from ordered image sequences.
pub struct DocumentAssembler {
    paper_size: PaperSize,
    margin_mm: f32,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: String,
}

impl DocumentAssembler {
    /// Create an assembler for the given paper size and margin.
    pub fn new(paper_size: PaperSize, margin_mm: f32) -> Self {
        Self {
            paper_size,
            margin_mm,
            title: "PDFTools Images".to_string(),
        }
    }

    /// Set the title metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn geometry(&self) -> Result<PageGeometry> {
        PageGeometry::from_paper(self.paper_size, self.margin_mm)
    }

    /// Assemble the collected images into a single PDF, one page per image,
    /// in input order.
    ///
    /// Empty input fails with the empty-collector error before any page is
    /// produced. Each decode happens on a blocking task and is awaited
    /// before the next image starts.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn assemble(&self, items: &[ImageItem]) -> Result<Vec<u8>> {
        if items.is_empty() {
            return Err(PdfToolsError::EmptyCollector);
        }
        let geometry = self.geometry()?;
        info!(paper = ?self.paper_size, margin_mm = self.margin_mm, "Assembling image PDF");

        let mut doc = PdfDocument::new(&self.title);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(items.len());

        for item in items {
            let bytes = item.bytes.clone();
            let decoded = tokio::task::spawn_blocking(move || decode_rgb(&bytes))
                .await
                .map_err(|err| PdfToolsError::ImageError(format!("decode task failed: {err}")))??;
            debug!(
                name = %item.name,
                width = decoded.width,
                height = decoded.height,
                "image decoded"
            );
            pages.push(page_for(&mut doc, geometry, decoded)?);
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!(bytes = output.len(), "Assembly complete");
        Ok(output)
    }

    /// Synchronous variant of [`assemble`](Self::assemble) for callers
    /// without a runtime (tests, benches).
    pub fn assemble_blocking(&self, items: &[ImageItem]) -> Result<Vec<u8>> {
        if items.is_empty() {
            return Err(PdfToolsError::EmptyCollector);
        }
        let geometry = self.geometry()?;

        let mut doc = PdfDocument::new(&self.title);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(items.len());
        for item in items {
            let decoded = decode_rgb(&item.bytes)?;
            pages.push(page_for(&mut doc, geometry, decoded)?);
        }
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
    }
}

/// Build one page with the image placed per the page-fit layout.
fn page_for(
    doc: &mut PdfDocument,
    geometry: PageGeometry,
    decoded: DecodedImage,
) -> Result<PdfPage> {
    let placement = layout::fit_to_page(decoded.width, decoded.height, geometry)?;

    let raw = RawImage {
        pixels: RawImageData::U8(decoded.rgb),
        width: decoded.width as usize,
        height: decoded.height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };
    let xobject_id = doc.add_image(&raw);

    // At 72 dpi one pixel renders as one pt, so each scale factor is the
    // target size in pt over the pixel count.
    let scale_x = Mm(placement.width).into_pt().0 / decoded.width as f32;
    let scale_y = Mm(placement.height).into_pt().0 / decoded.height as f32;

    let x_pt = Mm(placement.x).into_pt().0;
    // printpdf's origin is the bottom-left corner; the placement is measured
    // from the top.
    let y_pt = Mm(geometry.height - placement.y - placement.height).into_pt().0;

    let ops = vec![Op::UseXobject {
        id: xobject_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x_pt)),
            translate_y: Some(Pt(y_pt)),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            dpi: Some(72.0),
            rotate: None,
        },
    }];

    Ok(PdfPage::new(Mm(geometry.width), Mm(geometry.height), ops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftools_core::types::{ImageItem, ImageSource};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn png_item(width: u32, height: u32) -> ImageItem {
        ImageItem::new(
            format!("{width}x{height}.png"),
            "image/png".to_string(),
            png_bytes(width, height),
            ImageSource::FilePick,
        )
    }

    #[test]
    fn empty_input_is_rejected() {
        let assembler = DocumentAssembler::new(PaperSize::A4, 10.0);
        assert!(matches!(
            assembler.assemble_blocking(&[]),
            Err(PdfToolsError::EmptyCollector)
        ));
    }

    #[tokio::test]
    async fn async_empty_input_is_rejected() {
        let assembler = DocumentAssembler::new(PaperSize::A4, 10.0);
        assert!(matches!(
            assembler.assemble(&[]).await,
            Err(PdfToolsError::EmptyCollector)
        ));
    }

    #[test]
    fn single_image_produces_a_pdf() {
        let assembler = DocumentAssembler::new(PaperSize::A4, 10.0);
        let bytes = assembler.assemble_blocking(&[png_item(80, 60)]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn more_images_produce_more_output() {
        let assembler = DocumentAssembler::new(PaperSize::A4, 10.0);
        let one = assembler.assemble_blocking(&[png_item(80, 60)]).unwrap();
        let three = assembler
            .assemble_blocking(&[png_item(80, 60), png_item(60, 80), png_item(64, 64)])
            .unwrap();
        assert!(three.len() > one.len());
    }

    #[tokio::test]
    async fn async_assembly_matches_blocking() {
        let assembler = DocumentAssembler::new(PaperSize::A4, 5.0);
        let items = [png_item(80, 60), png_item(60, 80)];
        let bytes = assembler.assemble(&items).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn corrupt_image_fails_the_whole_assembly() {
        let assembler = DocumentAssembler::new(PaperSize::A4, 10.0);
        let bad = ImageItem::new(
            "broken.png".to_string(),
            "image/png".to_string(),
            vec![0, 1, 2, 3, 4],
            ImageSource::FilePick,
        );
        let result = assembler.assemble_blocking(&[png_item(80, 60), bad]);
        assert!(matches!(result, Err(PdfToolsError::ImageError(_))));
    }
}
