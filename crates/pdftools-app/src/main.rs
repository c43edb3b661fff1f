// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDFTools — free document utilities.
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::about::About;
use pages::ai_improve::AiImprove;
use pages::camera_scan::CameraScan;
use pages::contact::Contact;
use pages::home::Home;
use pages::image_to_pdf::ImageToPdf;
use pages::privacy::PrivacyPolicy;
use pages::text_to_pdf::TextToPdf;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("PDFTools starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/text-to-pdf")]
    TextToPdf {},
    #[route("/ai-improve")]
    AiImprove {},
    #[route("/image-to-pdf")]
    ImageToPdf {},
    #[route("/camera-scan")]
    CameraScan {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/privacy-policy")]
    PrivacyPolicy {},
}

/// Root component.
fn app() -> Element {
    // Initialise backend services (config, data directory)
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("backend services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "config load failed — using defaults");
            AppServices::fallback()
        }
    });

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent header/footer layout wrapping all pages.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Top navigation
            header { class: "site-header",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; border-bottom: 1px solid #e0e0e0; background: #fafafa;",
                Link { to: Route::Home {},
                    style: "font-size: 20px; font-weight: 700; text-decoration: none; color: #1a1a1a;",
                    "PDF"
                    span { style: "color: #e0356b;", "Tools" }
                }
                nav { style: "display: flex; gap: 16px;",
                    NavLink { to: Route::TextToPdf {}, label: "Text to PDF" }
                    NavLink { to: Route::AiImprove {}, label: "AI Improve" }
                    NavLink { to: Route::ImageToPdf {}, label: "Image to PDF" }
                    NavLink { to: Route::CameraScan {}, label: "Camera Scan" }
                }
            }

            // Page content
            main { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 24px;",
                Outlet::<Route> {}
            }

            // Footer links
            footer { class: "site-footer",
                style: "display: flex; justify-content: center; gap: 24px; padding: 16px 0; border-top: 1px solid #e0e0e0; background: #fafafa; font-size: 13px;",
                NavLink { to: Route::About {}, label: "About" }
                NavLink { to: Route::Contact {}, label: "Contact" }
                NavLink { to: Route::PrivacyPolicy {}, label: "Privacy Policy" }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "text-decoration: none; color: #333; font-size: 14px;",
            "{label}"
        }
    }
}
