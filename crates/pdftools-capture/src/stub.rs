// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub camera for desktop/CI builds where no native camera API is wired up.
//
// Every method reports the platform as unavailable — the scan page detects
// this and offers a file dialog instead.

use pdftools_core::CameraFacing;
use pdftools_core::error::{PdfToolsError, Result};

use crate::traits::CameraBridge;

/// No-op camera returned on non-mobile platforms.
#[derive(Default)]
pub struct StubCamera;

impl CameraBridge for StubCamera {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn start(&mut self, _facing: CameraFacing) -> Result<()> {
        tracing::warn!("CameraBridge::start called on stub camera");
        Err(PdfToolsError::PlatformUnavailable)
    }

    fn capture_jpeg(&mut self, _quality: u8) -> Result<Vec<u8>> {
        Err(PdfToolsError::PlatformUnavailable)
    }

    fn stop(&mut self) {}

    fn is_active(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_never_starts() {
        let mut camera = StubCamera;
        assert!(matches!(
            camera.start(CameraFacing::Rear),
            Err(PdfToolsError::PlatformUnavailable)
        ));
        assert!(!camera.is_active());
    }
}
