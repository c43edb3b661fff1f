// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contact page — a simple feedback form. Sending is simulated; there is no
// backend to deliver to.

use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut status_msg = use_signal(|| Option::<String>::None);

    rsx! {
        div { style: "max-width: 640px; margin: 0 auto;",
            h1 { "Contact Us" }
            p { style: "color: #666;",
                "Have a question or suggestion? We'd love to hear from you."
            }

            label { style: "display: block; font-size: 14px; margin: 16px 0 4px;", "Name *" }
            input {
                style: "width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 8px;",
                value: "{name}",
                oninput: move |evt| name.set(evt.value().to_string()),
            }

            label { style: "display: block; font-size: 14px; margin: 16px 0 4px;", "Email *" }
            input {
                style: "width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 8px;",
                r#type: "email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value().to_string()),
            }

            label { style: "display: block; font-size: 14px; margin: 16px 0 4px;", "Subject" }
            input {
                style: "width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 8px;",
                value: "{subject}",
                oninput: move |evt| subject.set(evt.value().to_string()),
            }

            label { style: "display: block; font-size: 14px; margin: 16px 0 4px;", "Message *" }
            textarea {
                style: "width: 100%; min-height: 160px; padding: 10px; border: 1px solid #ccc; border-radius: 8px; resize: vertical;",
                value: "{message}",
                oninput: move |evt| message.set(evt.value().to_string()),
            }

            button {
                style: "margin-top: 16px; padding: 12px 24px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 15px;",
                disabled: *submitting.read(),
                onclick: move |_| {
                    if name.read().trim().is_empty()
                        || email.read().trim().is_empty()
                        || message.read().trim().is_empty()
                    {
                        status_msg.set(Some("Please fill in all required fields".into()));
                        return;
                    }

                    submitting.set(true);
                    spawn(async move {
                        // No mail backend; acknowledge after a short pause.
                        tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
                        tracing::info!("contact form submitted");
                        name.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                        submitting.set(false);
                        status_msg.set(Some("Message sent! We'll get back to you soon.".into()));
                    });
                },
                if *submitting.read() { "Sending..." } else { "Send Message" }
            }

            if let Some(ref msg) = *status_msg.read() {
                p { style: "margin-top: 12px; color: #666; font-size: 14px;", "{msg}" }
            }
        }
    }
}
