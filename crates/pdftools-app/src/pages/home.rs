// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — hero copy and quick links to the four tools.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { style: "max-width: 900px; margin: 0 auto; text-align: center;",
            h1 { style: "font-size: 36px; margin-bottom: 8px;",
                "Free PDF Tools for Everyone"
            }
            p { style: "color: #666; font-size: 18px; margin-bottom: 32px;",
                "Convert text to PDF, improve your writing, scan documents with your camera, and more. No sign-up, no uploads — everything runs on your device."
            }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; text-align: left;",
                ToolCard {
                    to: Route::TextToPdf {},
                    title: "Text to PDF",
                    description: "Turn notes, essays, and assignments into professional PDF documents.",
                }
                ToolCard {
                    to: Route::AiImprove {},
                    title: "AI Improve",
                    description: "Fix grammar, simplify jargon, or make your text more formal.",
                }
                ToolCard {
                    to: Route::ImageToPdf {},
                    title: "Image to PDF",
                    description: "Combine photos and screenshots into a single PDF, one page per image.",
                }
                ToolCard {
                    to: Route::CameraScan {},
                    title: "Camera Scan",
                    description: "Scan physical documents with your camera and save them as PDF.",
                }
            }

            p { style: "color: #888; font-size: 14px; margin-top: 32px;",
                "Your documents are processed locally and never leave your device."
            }
        }
    }
}

#[component]
fn ToolCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: block; padding: 20px; border: 1px solid #e0e0e0; border-radius: 12px; text-decoration: none; color: inherit; background: white;",
            h3 { style: "margin: 0 0 8px 0;", "{title}" }
            p { style: "margin: 0; color: #666; font-size: 14px;", "{description}" }
        }
    }
}
