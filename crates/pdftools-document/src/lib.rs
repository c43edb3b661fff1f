// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdftools-document — Document processing for the PDFTools utilities.
//
// Provides the page-fit layout used by every image flow, PDF generation
// (text documents and one-page-per-image assemblies), image helpers
// (decode, thumbnail, encode), and the local text rewrite engine.

pub mod image;
pub mod layout;
pub mod pdf;
pub mod rewrite;

// Re-export the primary entry points so callers can use
// `pdftools_document::DocumentAssembler` etc.
pub use image::processor::ImageProcessor;
pub use layout::{PageGeometry, Placement, fit_to_page};
pub use pdf::assembler::DocumentAssembler;
pub use pdf::writer::PdfWriter;
pub use rewrite::rewrite;
