// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — create text documents using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use pdftools_core::PaperSize;
use pdftools_core::error::{PdfToolsError, Result};
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use tracing::{debug, info, instrument};

/// Default download name when the user supplies no title.
pub const DEFAULT_TEXT_FILENAME: &str = "document.pdf";

/// Derive the download filename for a text document.
///
/// A non-empty title becomes the filename with whitespace runs replaced by
/// underscores and a `.pdf` suffix; otherwise the fixed default is used.
pub fn text_pdf_filename(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return DEFAULT_TEXT_FILENAME.to_string();
    }
    let joined: Vec<&str> = trimmed.split_whitespace().collect();
    format!("{}.pdf", joined.join("_"))
}

/// Creates PDF documents from plain text.
///
/// The text is laid out in a simple top-to-bottom flow using the built-in
/// Helvetica font, with an optional bold heading. Long lines wrap at an
/// estimated character width and pages break automatically.
pub struct PdfWriter {
    /// Paper size for page creation.
    paper_size: PaperSize,
    /// Optional document title, rendered as a heading and embedded in the
    /// PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    /// Create a new writer targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            title: None,
        }
    }

    /// Create a new writer defaulting to A4.
    pub fn a4() -> Self {
        Self::new(PaperSize::A4)
    }

    /// Set a title for the heading and PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Paper dimensions in printpdf's Mm units.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (w_mm, h_mm) = self.paper_size.dimensions_mm();
        (Mm(w_mm), Mm(h_mm))
    }

    /// Create a PDF from plain text content.
    ///
    /// Empty or whitespace-only text is rejected; the UI blocks the action
    /// with a notification instead of producing a blank document.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn create_from_text(&self, text: &str) -> Result<Vec<u8>> {
        if text.trim().is_empty() {
            return Err(PdfToolsError::EmptyText);
        }

        let (page_w, page_h) = self.page_dimensions();
        let heading = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        info!(paper = ?self.paper_size, heading = heading.unwrap_or(""), "Creating text PDF");

        let font_size_pt: f32 = 12.0;
        let line_height_pt: f32 = 15.0;
        let margin_mm: f32 = 20.0;
        let margin_pt: f32 = Mm(margin_mm).into_pt().0;
        let usable_width_mm = page_w.0 - 2.0 * margin_mm;

        // Approximate characters per line for Helvetica at 12pt. Average
        // glyph width is roughly 0.50 * font_size in pt (1pt = 0.3528mm).
        let avg_char_width_mm: f32 = 0.50 * font_size_pt * 0.3528;
        let max_chars_per_line = (usable_width_mm / avg_char_width_mm) as usize;

        let wrapped_lines = wrap_text(text, max_chars_per_line);
        let page_h_pt = page_h.into_pt().0;

        // With a heading, the body starts 40mm from the top of the first
        // page; continuation pages use the plain top margin.
        let first_body_top_pt = if heading.is_some() {
            Mm(40.0).into_pt().0
        } else {
            margin_pt
        };

        let mut doc = PdfDocument::new(heading.unwrap_or("PDFTools Document"));
        let mut pages: Vec<PdfPage> = Vec::new();

        let mut line_iter = wrapped_lines.iter().peekable();
        let mut first_page = true;
        while line_iter.peek().is_some() {
            let mut ops: Vec<Op> = Vec::new();
            let body_top_pt = if first_page { first_body_top_pt } else { margin_pt };

            if first_page {
                if let Some(title) = heading {
                    // 18pt bold heading with its baseline 25mm below the top edge.
                    ops.push(Op::StartTextSection);
                    ops.push(Op::SetTextCursor {
                        pos: Point {
                            x: Pt(margin_pt),
                            y: Pt(page_h_pt - Mm(25.0).into_pt().0),
                        },
                    });
                    ops.push(Op::SetFontSizeBuiltinFont {
                        size: Pt(18.0),
                        font: BuiltinFont::HelveticaBold,
                    });
                    ops.push(Op::WriteTextBuiltinFont {
                        items: vec![TextItem::Text(title.to_string())],
                        font: BuiltinFont::HelveticaBold,
                    });
                    ops.push(Op::EndTextSection);
                }
            }

            let usable_height_pt = page_h_pt - body_top_pt - margin_pt;
            let lines_per_page = (usable_height_pt / line_height_pt) as usize;

            let mut line_idx: usize = 0;
            while line_idx < lines_per_page {
                let line = match line_iter.next() {
                    Some(l) => l,
                    None => break,
                };

                // Position: below the body top, moving downward.
                let y_pt = page_h_pt - body_top_pt - (line_idx as f32 * line_height_pt);

                ops.push(Op::StartTextSection);
                ops.push(Op::SetTextCursor {
                    pos: Point {
                        x: Pt(margin_pt),
                        y: Pt(y_pt),
                    },
                });
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(font_size_pt),
                    font: BuiltinFont::Helvetica,
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(line.clone())],
                    font: BuiltinFont::Helvetica,
                });
                ops.push(Op::EndTextSection);

                line_idx += 1;
            }

            pages.push(PdfPage::new(page_w, page_h, ops));
            first_page = false;
        }

        // If wrapping somehow produced no lines, still emit one page.
        if pages.is_empty() {
            pages.push(PdfPage::new(page_w, page_h, Vec::new()));
        }

        doc.with_pages(pages);

        debug!(
            total_lines = wrapped_lines.len(),
            pages = doc.pages.len(),
            "Text layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        Ok(output)
    }

    /// Create a text PDF and write it directly to a file.
    pub fn write_text_to_file(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_text(text)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote text PDF to {}", path.as_ref().display());
        Ok(())
    }
}

// -- Text wrapping helper -----------------------------------------------------

/// Wrap a multi-line string so that no line exceeds `max_width` characters.
///
/// Splits on existing newlines first, then performs simple word-wrap within
/// each paragraph. Words longer than `max_width` are force-broken.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::with_capacity(max_width);

        for word in words {
            if word.len() > max_width {
                if !current_line.is_empty() {
                    result.push(current_line.clone());
                    current_line.clear();
                }
                // Force-break the oversized word.
                let mut remaining = word;
                while remaining.len() > max_width {
                    let (chunk, rest) = remaining.split_at(max_width);
                    result.push(chunk.to_string());
                    remaining = rest;
                }
                if !remaining.is_empty() {
                    current_line.push_str(remaining);
                }
            } else if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_line.len() + 1 + word.len() <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push(current_line.clone());
                current_line.clear();
                current_line.push_str(word);
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_from_title_replaces_whitespace() {
        assert_eq!(text_pdf_filename("My Report"), "My_Report.pdf");
        assert_eq!(text_pdf_filename("  spaced   out title "), "spaced_out_title.pdf");
    }

    #[test]
    fn filename_defaults_without_title() {
        assert_eq!(text_pdf_filename(""), "document.pdf");
        assert_eq!(text_pdf_filename("   "), "document.pdf");
    }

    #[test]
    fn empty_text_is_rejected() {
        let writer = PdfWriter::a4();
        assert!(matches!(
            writer.create_from_text("   \n  "),
            Err(PdfToolsError::EmptyText)
        ));
    }

    #[test]
    fn text_pdf_has_pdf_header() {
        let writer = PdfWriter::a4();
        let bytes = writer.create_from_text("Hello from the test suite.").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn titled_document_is_created() {
        let mut writer = PdfWriter::a4();
        writer.set_title("Weekly Notes");
        let bytes = writer
            .create_from_text("Line one.\nLine two.\nLine three.")
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_text_produces_more_output_than_short() {
        let writer = PdfWriter::a4();
        let short = writer.create_from_text("one line").unwrap();
        let paragraph = "A reasonably long line of body text for wrapping. ".repeat(200);
        let long = writer.create_from_text(&paragraph).unwrap();
        assert!(long.len() > short.len());
    }

    #[test]
    fn write_to_file_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let writer = PdfWriter::a4();
        writer.write_text_to_file("file output test", &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn wrap_keeps_paragraph_breaks() {
        let lines = wrap_text("first paragraph\n\nsecond paragraph", 40);
        assert_eq!(lines, ["first paragraph", "", "second paragraph"]);
    }

    #[test]
    fn wrap_respects_max_width() {
        let lines = wrap_text("aaa bbb ccc ddd eee", 7);
        assert_eq!(lines, ["aaa bbb", "ccc ddd", "eee"]);
    }

    #[test]
    fn wrap_force_breaks_oversized_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, ["abcd", "efgh", "ij"]);
    }
}
