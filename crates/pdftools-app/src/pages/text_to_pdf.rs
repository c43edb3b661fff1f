// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text-to-PDF page — type or paste text, optionally title it, download as PDF.

use dioxus::prelude::*;

use pdftools_core::human_errors::humanize_error;
use pdftools_document::PdfWriter;
use pdftools_document::pdf::writer::text_pdf_filename;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn TextToPdf() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut title = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut status_msg = use_signal(|| Option::<String>::None);

    let char_count = text.read().chars().count();
    let word_count = text.read().split_whitespace().count();

    rsx! {
        div { style: "max-width: 760px; margin: 0 auto;",
            h1 { "Text to PDF Converter" }
            p { style: "color: #666;",
                "Convert your text into a professional PDF document. Perfect for notes, essays, and assignments."
            }

            // Title input
            label { style: "display: block; font-size: 14px; margin: 16px 0 4px;",
                "Document Title (Optional)"
            }
            input {
                style: "width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 8px; font-size: 14px;",
                placeholder: "Enter document title...",
                value: "{title}",
                oninput: move |evt| title.set(evt.value().to_string()),
            }

            // Text input
            label { style: "display: block; font-size: 14px; margin: 16px 0 4px;", "Your Text" }
            textarea {
                style: "width: 100%; min-height: 300px; padding: 12px; font-family: monospace; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; resize: vertical;",
                placeholder: "Paste or type your text here...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value().to_string()),
            }
            div { style: "display: flex; justify-content: space-between; color: #888; font-size: 13px; margin-top: 4px;",
                span { "{char_count} characters" }
                span { "{word_count} words" }
            }

            // Actions
            div { style: "display: flex; gap: 8px; margin-top: 16px;",
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let content = text.read().clone();
                            let doc_title = title.read().clone();

                            let mut writer = PdfWriter::new(state.read().config.default_paper_size);
                            if !doc_title.trim().is_empty() {
                                writer.set_title(doc_title.trim());
                            }

                            match writer.create_from_text(&content) {
                                Ok(pdf_bytes) => {
                                    let filename = text_pdf_filename(&doc_title);
                                    match svc.save_pdf(&pdf_bytes, &filename) {
                                        Ok(Some(_)) => {
                                            status_msg.set(Some("PDF downloaded successfully!".into()));
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
                                    status_msg.set(Some(humanize_error(&e).message));
                                }
                            }
                        }
                    },
                    "Download PDF"
                }
                button {
                    style: "padding: 12px 16px; border-radius: 8px; border: 1px solid #ff3b30; color: #ff3b30; background: white;",
                    onclick: move |_| {
                        text.set(String::new());
                        title.set(String::new());
                        status_msg.set(Some("Text cleared".into()));
                    },
                    "Clear"
                }
            }

            // Tips
            div { style: "margin-top: 24px; padding: 16px; border-radius: 12px; background: #f4f4f5; font-size: 14px; color: #666;",
                h3 { style: "margin-top: 0;", "Tips" }
                ul { style: "margin: 0; padding-left: 20px;",
                    li { "Add a title for a more professional document header" }
                    li { "Use the AI Improve tool to enhance your text before converting" }
                    li { "Your text is processed locally - we don't store any data" }
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
