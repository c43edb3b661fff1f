// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image-to-PDF page — collect images, preview them in order, generate a PDF
// with one page per image.

use dioxus::prelude::*;

use pdftools_core::human_errors::humanize_error;
use pdftools_core::types::{ImageCollector, ImageItem, ImageSource, image_mime_for_extension};
use pdftools_document::DocumentAssembler;
use pdftools_document::pdf::assembler::IMAGES_PDF_FILENAME;

use crate::services::app_services::AppServices;
use crate::services::preview;
use crate::state::AppState;

#[component]
pub fn ImageToPdf() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut collector = use_signal(ImageCollector::new);
    let mut status_msg = use_signal(|| Option::<String>::None);
    let mut generating = use_signal(|| false);

    let count = collector.read().len();
    let download_label = if count == 1 {
        "Download PDF (1 image)".to_string()
    } else {
        format!("Download PDF ({count} images)")
    };

    rsx! {
        div { style: "max-width: 900px; margin: 0 auto;",
            h1 { "Image to PDF Converter" }
            p { style: "color: #666;",
                "Convert your images into a single PDF document. Perfect for photo collections and visual reports."
            }

            // Upload area
            button {
                style: "width: 100%; padding: 32px; border-radius: 12px; border: 2px dashed #007aff; color: #007aff; background: white; font-size: 16px; margin: 16px 0; cursor: pointer;",
                disabled: *generating.read(),
                onclick: move |_| {
                    let picked = rfd::FileDialog::new()
                        .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp"])
                        .pick_files();

                    let Some(paths) = picked else { return };

                    let mut added = 0usize;
                    for path in paths {
                        match std::fs::read(&path) {
                            Ok(bytes) => {
                                let name = path
                                    .file_name()
                                    .map(|n| n.to_string_lossy().into_owned())
                                    .unwrap_or_else(|| "image".to_string());
                                let mime = path
                                    .extension()
                                    .map(|e| image_mime_for_extension(&e.to_string_lossy()))
                                    .unwrap_or("application/octet-stream");
                                let mut item = ImageItem::new(
                                    name,
                                    mime.to_string(),
                                    bytes,
                                    ImageSource::FilePick,
                                );
                                preview::prepare(&mut item);
                                tracing::info!(path = %path.display(), "image added to collector");
                                collector.write().push(item);
                                added += 1;
                            }
                            Err(e) => {
                                status_msg.set(Some(format!("Error: {e}")));
                            }
                        }
                    }
                    if added > 0 {
                        status_msg.set(Some(format!("{added} image(s) added")));
                    }
                },
                "Drop images here or click to upload"
                p { style: "font-size: 13px; color: #888; margin: 8px 0 0;",
                    "Supports JPG, PNG, GIF, and more"
                }
            }

            // Preview grid
            if count > 0 {
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h3 { "Selected Images ({count})" }
                    button {
                        style: "padding: 8px 12px; border-radius: 8px; border: 1px solid #ff3b30; color: #ff3b30; background: white;",
                        onclick: move |_| {
                            collector.write().clear();
                            status_msg.set(Some("All images cleared".into()));
                        },
                        "Clear All"
                    }
                }
                div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px;",
                    for (index, item) in collector.read().items().iter().enumerate() {
                        {
                            let id = item.id;
                            let url = preview::data_url(item);
                            rsx! {
                                div { style: "position: relative; aspect-ratio: 1; border-radius: 12px; overflow: hidden; background: #f0f0f0; border: 1px solid #e0e0e0;",
                                    if let Some(src) = url {
                                        img {
                                            src: "{src}",
                                            style: "width: 100%; height: 100%; object-fit: cover;",
                                        }
                                    } else {
                                        div { style: "display: flex; align-items: center; justify-content: center; height: 100%; color: #888; font-size: 12px;",
                                            "{item.name}"
                                        }
                                    }
                                    span { style: "position: absolute; top: 6px; left: 6px; width: 22px; height: 22px; border-radius: 50%; background: #007aff; color: white; font-size: 12px; display: flex; align-items: center; justify-content: center;",
                                        "{index + 1}"
                                    }
                                    button {
                                        style: "position: absolute; top: 6px; right: 6px; border: none; border-radius: 6px; background: rgba(255, 59, 48, 0.9); color: white; padding: 4px 8px; cursor: pointer;",
                                        onclick: move |_| {
                                            collector.write().remove(id);
                                            status_msg.set(Some("Image removed".into()));
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Generate
            div { style: "display: flex; justify-content: center; margin-top: 24px;",
                button {
                    style: "padding: 14px 28px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                    disabled: count == 0 || *generating.read(),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let items = collector.read().items().to_vec();
                            if items.is_empty() {
                                status_msg.set(Some(
                                    humanize_error(&pdftools_core::PdfToolsError::EmptyCollector).message,
                                ));
                                return;
                            }

                            generating.set(true);
                            status_msg.set(Some("Generating...".into()));

                            let config = state.read().config.clone();
                            let svc = svc.clone();
                            spawn(async move {
                                let assembler = DocumentAssembler::new(
                                    config.default_paper_size,
                                    config.image_margin_mm,
                                );
                                match assembler.assemble(&items).await {
                                    Ok(pdf_bytes) => {
                                        match svc.save_pdf(&pdf_bytes, IMAGES_PDF_FILENAME) {
                                            Ok(Some(_)) => {
                                                status_msg.set(Some("PDF generated successfully!".into()));
                                            }
                                            Ok(None) => {
                                                status_msg.set(Some("Save cancelled.".into()));
                                            }
                                            Err(e) => {
                                                status_msg.set(Some(humanize_error(&e).message));
                                            }
                                        }
                                    }
                                    Err(e) => {
                                        tracing::error!(error = %e, "image PDF assembly failed");
                                        status_msg.set(Some("Failed to generate PDF".into()));
                                    }
                                }
                                generating.set(false);
                            });
                        }
                    },
                    if *generating.read() {
                        "Generating..."
                    } else {
                        "{download_label}"
                    }
                }
            }

            // Tips
            div { style: "margin-top: 24px; padding: 16px; border-radius: 12px; background: #f4f4f5; font-size: 14px; color: #666;",
                h3 { style: "margin-top: 0;", "Tips" }
                ul { style: "margin: 0; padding-left: 20px;",
                    li { "Upload multiple images at once by selecting them together" }
                    li { "Images will appear in the PDF in the order shown above" }
                    li { "Each image will be on its own page in the PDF" }
                    li { "High-resolution images will produce better quality PDFs" }
                }
            }

            // Status
            if let Some(ref msg) = *status_msg.read() {
                p { style: "margin-top: 12px; color: #666; font-size: 14px; text-align: center;",
                    "{msg}"
                }
            }
        }
    }
}
