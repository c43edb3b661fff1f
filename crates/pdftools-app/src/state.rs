// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use pdftools_core::AppConfig;

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application settings.
    pub config: AppConfig,
    /// Status message for user feedback.
    #[allow(dead_code)]
    pub status_message: Option<String>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            config: svc.config(),
            status_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            status_message: None,
        }
    }
}
