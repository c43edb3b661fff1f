// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Camera scan page — capture document pages, preview them, export as PDF.
//
// On mobile, frames come from the native camera bridge. On desktop the
// bridge is a stub, so the page offers a file dialog as the capture
// fallback. The camera stream is owned by a single `CameraSession` and
// released when scanning stops or the page is left.

use dioxus::prelude::*;

use pdftools_capture::CameraSession;
use pdftools_core::human_errors::humanize_error;
use pdftools_core::types::{ImageCollector, ImageItem, ImageSource, image_mime_for_extension};
use pdftools_document::DocumentAssembler;
use pdftools_document::pdf::assembler::SCAN_PDF_FILENAME;

use crate::services::app_services::AppServices;
use crate::services::preview;
use crate::state::AppState;

#[component]
pub fn CameraScan() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut session = use_signal(|| Option::<CameraSession>::None);
    let mut collector = use_signal(ImageCollector::new);
    let mut status_msg = use_signal(|| Option::<String>::None);
    let mut generating = use_signal(|| false);

    let camera_active = session.read().is_some();
    let count = collector.read().len();
    let download_label = if count == 1 {
        "Download PDF (1 page)".to_string()
    } else {
        format!("Download PDF ({count} pages)")
    };

    rsx! {
        div { style: "max-width: 900px; margin: 0 auto;",
            h1 { "Camera Document Scanner" }
            p { style: "color: #666;",
                "Scan physical documents with your camera and convert them to PDF instantly."
            }

            // Camera view / controls
            div { style: "padding: 24px; border: 1px solid #e0e0e0; border-radius: 12px; background: white; margin: 16px 0; text-align: center;",
                if camera_active {
                    p { style: "color: #007aff;", "Camera is active" }
                    div { style: "display: flex; justify-content: center; gap: 8px;",
                        button {
                            style: "padding: 10px 14px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                            onclick: move |_| {
                                let result = match session.write().as_mut() {
                                    Some(s) => s.switch_facing(),
                                    None => return,
                                };
                                match result {
                                    Ok(facing) => {
                                        status_msg.set(Some(format!("Switched to {facing:?} camera")));
                                    }
                                    Err(e) => {
                                        // The stream could not be reacquired.
                                        session.set(None);
                                        status_msg.set(Some(humanize_error(&e).message));
                                    }
                                }
                            },
                            "Flip Camera"
                        }
                        button {
                            style: "padding: 10px 24px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px;",
                            onclick: move |_| {
                                let quality = state.read().config.capture_jpeg_quality;
                                let frame = match session.write().as_mut() {
                                    Some(s) => s.capture_frame(quality),
                                    None => return,
                                };
                                match frame {
                                    Ok(jpeg) => {
                                        let page_number = collector.read().len() + 1;
                                        let mut item = ImageItem::new(
                                            format!("Page {page_number}"),
                                            "image/jpeg".to_string(),
                                            jpeg,
                                            ImageSource::CameraCapture,
                                        );
                                        preview::prepare(&mut item);
                                        collector.write().push(item);
                                        status_msg.set(Some("Document captured!".into()));
                                    }
                                    Err(e) => {
                                        tracing::warn!(error = %e, "frame capture failed");
                                        status_msg.set(Some(humanize_error(&e).message));
                                    }
                                }
                            },
                            "Capture"
                        }
                        button {
                            style: "padding: 10px 14px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                            onclick: move |_| {
                                if let Some(mut s) = session.write().take() {
                                    s.stop();
                                }
                                status_msg.set(Some("Camera stopped".into()));
                            },
                            "Stop"
                        }
                    }
                } else {
                    p { style: "color: #888;", "Camera is not active" }
                    button {
                        style: "padding: 10px 24px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px;",
                        onclick: move |_| {
                            let facing = state.read().config.default_camera_facing;
                            match CameraSession::open(facing) {
                                Ok(s) => {
                                    session.set(Some(s));
                                    status_msg.set(Some("Camera started".into()));
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "camera start failed");
                                    let human = humanize_error(&e);
                                    status_msg.set(Some(format!("{} {}", human.message, human.suggestion)));
                                }
                            }
                        },
                        "Start Camera"
                    }
                }

                // File fallback — the capture path on devices without a camera.
                button {
                    style: "margin-top: 12px; padding: 8px 16px; border-radius: 8px; border: 2px dashed #007aff; color: #007aff; background: white;",
                    disabled: *generating.read(),
                    onclick: move |_| {
                        let picked = rfd::FileDialog::new()
                            .add_filter("Images", &["jpg", "jpeg", "png", "tiff", "tif", "bmp"])
                            .pick_file();
                        if let Some(path) = picked {
                            match std::fs::read(&path) {
                                Ok(bytes) => {
                                    let page_number = collector.read().len() + 1;
                                    let mime = path
                                        .extension()
                                        .map(|e| image_mime_for_extension(&e.to_string_lossy()))
                                        .unwrap_or("application/octet-stream");
                                    let mut item = ImageItem::new(
                                        format!("Page {page_number}"),
                                        mime.to_string(),
                                        bytes,
                                        ImageSource::FilePick,
                                    );
                                    preview::prepare(&mut item);
                                    tracing::info!(path = %path.display(), "page added from file");
                                    collector.write().push(item);
                                    status_msg.set(Some("Page added.".into()));
                                }
                                Err(e) => {
                                    status_msg.set(Some(format!("Error: {e}")));
                                }
                            }
                        }
                    },
                    "Add Page from File"
                }
            }

            // Captured pages
            if count > 0 {
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h3 { "Captured Pages ({count})" }
                    button {
                        style: "padding: 8px 12px; border-radius: 8px; border: 1px solid #ff3b30; color: #ff3b30; background: white;",
                        onclick: move |_| {
                            collector.write().clear();
                            status_msg.set(None);
                        },
                        "Clear All"
                    }
                }
                div { style: "display: flex; gap: 8px; overflow-x: auto; padding: 8px 0;",
                    for (index, item) in collector.read().items().iter().enumerate() {
                        {
                            let id = item.id;
                            let url = preview::data_url(item);
                            rsx! {
                                button {
                                    style: "min-width: 90px; height: 120px; border: 1px solid #ccc; border-radius: 8px; overflow: hidden; background: #f0f0f0; padding: 0; cursor: pointer;",
                                    title: "Click to remove",
                                    onclick: move |_| {
                                        collector.write().remove(id);
                                        status_msg.set(Some("Image removed".into()));
                                    },
                                    if let Some(src) = url {
                                        img {
                                            src: "{src}",
                                            style: "width: 100%; height: 100%; object-fit: cover;",
                                        }
                                    } else {
                                        span { style: "font-size: 12px; color: #888;", "P{index + 1}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Generate PDF
            if count > 0 {
                div { style: "display: flex; justify-content: center; margin-top: 16px;",
                    button {
                        style: "padding: 14px 28px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                        disabled: *generating.read(),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let items = collector.read().items().to_vec();
                                generating.set(true);
                                status_msg.set(Some("Generating...".into()));

                                let config = state.read().config.clone();
                                let svc = svc.clone();
                                spawn(async move {
                                    let assembler = DocumentAssembler::new(
                                        config.default_paper_size,
                                        config.scan_margin_mm,
                                    );
                                    match assembler.assemble(&items).await {
                                        Ok(pdf_bytes) => {
                                            match svc.save_pdf(&pdf_bytes, SCAN_PDF_FILENAME) {
                                                Ok(Some(_)) => {
                                                    status_msg.set(Some("PDF saved successfully!".into()));
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
                                            tracing::error!(error = %e, "scan PDF assembly failed");
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
            }

            // Tips
            div { style: "margin-top: 24px; padding: 16px; border-radius: 12px; background: #f4f4f5; font-size: 14px; color: #666;",
                h3 { style: "margin-top: 0;", "Scanning Tips" }
                ul { style: "margin: 0; padding-left: 20px;",
                    li { "Hold your device steady and ensure good lighting" }
                    li { "Avoid shadows and reflections on the document" }
                    li { "Use the flip camera button to switch between front and back cameras" }
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
