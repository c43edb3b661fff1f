// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// AI Improve page — pick a mode, paste text, get the rewritten version.
//
// The rewrite is a local simulation (see pdftools_document::rewrite); the
// configured delay stands in for processing time.

use dioxus::prelude::*;

use pdftools_core::RewriteMode;
use pdftools_core::error::PdfToolsError;
use pdftools_core::human_errors::humanize_error;
use pdftools_document::rewrite;

use crate::state::AppState;

#[component]
pub fn AiImprove() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut mode = use_signal(|| RewriteMode::Improve);
    let mut input_text = use_signal(String::new);
    let mut output_text = use_signal(String::new);
    let mut improving = use_signal(|| false);
    let mut status_msg = use_signal(|| Option::<String>::None);

    let word_count = input_text.read().split_whitespace().count();

    rsx! {
        div { style: "max-width: 900px; margin: 0 auto;",
            h1 { "AI Text Improver" }
            p { style: "color: #666;",
                "Enhance your writing. Fix grammar, improve clarity, and make your text more professional."
            }

            // Mode selection
            div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px; margin: 16px 0;",
                for m in RewriteMode::ALL {
                    {
                        let selected = *mode.read() == m;
                        let border = if selected { "2px solid #007aff" } else { "1px solid #e0e0e0" };
                        let label = m.label();
                        let description = m.description();
                        rsx! {
                            button {
                                style: "padding: 12px; border-radius: 12px; border: {border}; background: white; text-align: left; cursor: pointer;",
                                onclick: move |_| mode.set(m),
                                div { style: "font-size: 14px; font-weight: 600;", "{label}" }
                                div { style: "font-size: 12px; color: #888; margin-top: 2px;", "{description}" }
                            }
                        }
                    }
                }
            }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                // Input
                div {
                    label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Original Text" }
                    textarea {
                        style: "width: 100%; min-height: 250px; padding: 12px; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; resize: vertical;",
                        placeholder: "Paste your text here...",
                        value: "{input_text}",
                        oninput: move |evt| input_text.set(evt.value().to_string()),
                    }
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 8px;",
                        span { style: "color: #888; font-size: 13px;", "{word_count} words" }
                        button {
                            style: "padding: 10px 20px; border-radius: 8px; border: none; background: #007aff; color: white;",
                            disabled: *improving.read(),
                            onclick: move |_| {
                                let source = input_text.read().clone();
                                if source.trim().is_empty() {
                                    status_msg.set(Some(humanize_error(&PdfToolsError::EmptyText).message));
                                    return;
                                }

                                improving.set(true);
                                output_text.set(String::new());
                                let delay_ms = state.read().config.rewrite_delay_ms;
                                let selected_mode = *mode.read();

                                spawn(async move {
                                    // Placeholder latency; the rewrite itself is instant.
                                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                                    output_text.set(rewrite(selected_mode, &source));
                                    improving.set(false);
                                    status_msg.set(Some("Text improved successfully!".into()));
                                });
                            },
                            if *improving.read() { "Improving..." } else { "Improve" }
                        }
                    }
                }

                // Output
                div {
                    label { style: "display: block; font-size: 14px; margin-bottom: 4px;", "Improved Text" }
                    textarea {
                        style: "width: 100%; min-height: 250px; padding: 12px; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; resize: vertical; background: #fafafa;",
                        placeholder: "Your improved text will appear here...",
                        readonly: true,
                        value: "{output_text}",
                    }
                }
            }

            // Info
            div { style: "margin-top: 24px; padding: 16px; border-radius: 12px; background: #f4f4f5; font-size: 14px; color: #666;",
                h3 { style: "margin-top: 0;", "How it works" }
                ul { style: "margin: 0; padding-left: 20px;",
                    li { "Choose your improvement mode based on what you need" }
                    li { "Paste your text and click \"Improve\" to enhance it" }
                    li { "All processing happens on your device and nothing is stored" }
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
