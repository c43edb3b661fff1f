// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Privacy policy page — static copy.

use dioxus::prelude::*;

struct Section {
    title: &'static str,
    body: &'static str,
}

const SECTIONS: [Section; 5] = [
    Section {
        title: "Information We Collect",
        body: "PDFTools processes your documents entirely on your device. Text you convert, images you combine, and pages you scan are never uploaded anywhere. We do not collect names, email addresses, or account information because there are no accounts.",
    },
    Section {
        title: "How We Protect Your Data",
        body: "Because nothing leaves your device, there is nothing for us to protect on a server. Generated PDFs are written only to the locations you choose in the save dialog.",
    },
    Section {
        title: "Cookies & Analytics",
        body: "The app contains no analytics, tracking, or advertising of any kind.",
    },
    Section {
        title: "Your Rights",
        body: "Your documents are yours. Delete a generated PDF and it is gone; we keep no copies and no processing history.",
    },
    Section {
        title: "Children's Privacy",
        body: "PDFTools is safe for users of all ages. Since no personal information is collected from anyone, none is collected from children.",
    },
];

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! {
        div { style: "max-width: 760px; margin: 0 auto;",
            h1 { "Privacy Policy" }
            p { style: "color: #666;",
                "Your privacy matters. Here's exactly how PDFTools handles your data - in plain language."
            }

            for section in SECTIONS.iter() {
                div { style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px; background: white; margin-top: 16px;",
                    h2 { style: "margin: 0 0 8px 0; font-size: 18px;", "{section.title}" }
                    p { style: "margin: 0; color: #666; font-size: 14px;", "{section.body}" }
                }
            }

            div { style: "margin-top: 24px; padding: 16px; border-radius: 12px; background: #f4f4f5; font-size: 14px; color: #666;",
                h3 { style: "margin-top: 0;", "In short" }
                ul { style: "margin: 0; padding-left: 20px;",
                    li { "All processing happens on your device" }
                    li { "No accounts, no tracking, no ads" }
                    li { "Your files are never stored or transmitted" }
                }
            }
        }
    }
}
