// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pdftools-document crate: the page-fit layout
// routine and a small synthetic image assembly.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pdftools_core::PaperSize;
use pdftools_core::types::{ImageItem, ImageSource};
use pdftools_document::layout::{PageGeometry, fit_to_page};
use pdftools_document::pdf::assembler::DocumentAssembler;

/// Benchmark the contain-fit placement computation across a spread of
/// aspect ratios.
fn bench_fit_to_page(c: &mut Criterion) {
    let geometry = PageGeometry::from_paper(PaperSize::A4, 10.0).unwrap();
    let sizes: Vec<(u32, u32)> = vec![(4000, 3000), (3000, 4000), (1920, 1080), (500, 500)];

    c.bench_function("fit_to_page (4 aspect ratios)", |b| {
        b.iter(|| {
            for &(w, h) in &sizes {
                let placement = fit_to_page(black_box(w), black_box(h), geometry).unwrap();
                black_box(placement);
            }
        });
    });
}

/// Benchmark assembling three small PNG pages into one document.
///
/// Images are tiny (64x64) so the measurement is dominated by the decode +
/// embed + serialise path rather than pixel throughput.
fn bench_assemble_three_pages(c: &mut Criterion) {
    let items: Vec<ImageItem> = (0..3)
        .map(|i| {
            let img = image::RgbImage::from_pixel(64, 64, image::Rgb([40 * i as u8, 80, 120]));
            let mut buf = Vec::new();
            let mut cursor = std::io::Cursor::new(&mut buf);
            image::DynamicImage::ImageRgb8(img)
                .write_to(&mut cursor, image::ImageFormat::Png)
                .unwrap();
            ImageItem::new(
                format!("page-{i}.png"),
                "image/png".to_string(),
                buf,
                ImageSource::FilePick,
            )
        })
        .collect();

    let assembler = DocumentAssembler::new(PaperSize::A4, 10.0);

    c.bench_function("assemble 3 pages (64x64 PNG)", |b| {
        b.iter(|| {
            let bytes = assembler.assemble_blocking(black_box(&items)).unwrap();
            black_box(bytes);
        });
    });
}

criterion_group!(benches, bench_fit_to_page, bench_assemble_three_pages);
criterion_main!(benches);
