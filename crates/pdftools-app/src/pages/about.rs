// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// About page — mission statement and values.

use dioxus::prelude::*;

struct Value {
    title: &'static str,
    description: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Student First",
        description: "Every feature is designed with students in mind. We understand the challenges of academic life.",
    },
    Value {
        title: "Speed & Simplicity",
        description: "No complicated interfaces or lengthy processes. Get your PDFs ready in seconds.",
    },
    Value {
        title: "Privacy Focused",
        description: "Your documents are processed locally. We never store or access your files.",
    },
    Value {
        title: "Free Forever",
        description: "Education should be accessible. Our tools are 100% free with no hidden costs.",
    },
];

#[component]
pub fn About() -> Element {
    rsx! {
        div { style: "max-width: 760px; margin: 0 auto;",
            h1 { "Making PDF Tools Accessible" }
            p { style: "color: #666; font-size: 17px;",
                "PDFTools was created with a simple mission: provide students and professionals with free, easy-to-use PDF utilities that just work."
            }

            h2 { style: "margin-top: 32px;", "Our Mission" }
            p { style: "color: #666;",
                "We believe that essential productivity tools should be free and accessible to everyone. Whether you're a student working on assignments, a teacher preparing materials, or a professional handling documents, you deserve tools that are fast, reliable, and respect your privacy."
            }

            h2 { style: "margin-top: 32px;", "What We Stand For" }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                for value in VALUES.iter() {
                    div { style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px; background: white;",
                        h3 { style: "margin: 0 0 8px 0;", "{value.title}" }
                        p { style: "margin: 0; color: #666; font-size: 14px;", "{value.description}" }
                    }
                }
            }

            h2 { style: "margin-top: 32px;", "Our Story" }
            p { style: "color: #666;",
                "PDFTools started as a small project to help students convert their notes to PDFs without paying for expensive software or dealing with complicated online tools filled with ads."
            }
            p { style: "color: #666;",
                "Today, we serve thousands of students from around the world, helping them with their academic work every day. From text conversion to writing improvement, we're constantly adding new features based on what our users need."
            }
            p { style: "color: #666;",
                "We're committed to keeping our tools free and improving them based on your feedback. If you have suggestions or need help, don't hesitate to reach out!"
            }
        }
    }
}
