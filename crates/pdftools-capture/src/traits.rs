// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic camera trait.
//
// Platforms without a camera (desktop, CI) return
// `PdfToolsError::PlatformUnavailable` from the stub implementation; a user
// refusing camera permission surfaces as `PdfToolsError::CameraDenied`.

use pdftools_core::CameraFacing;
use pdftools_core::error::Result;

/// Capture JPEG frames from the device camera.
///
/// Exactly one preview stream exists per bridge. `start` acquires it,
/// `stop` releases it; `capture_jpeg` is only valid while the stream is
/// active. Callers own the stream through [`crate::CameraSession`].
pub trait CameraBridge: Send {
    /// Human-readable platform name (e.g. "iOS", "Android").
    fn platform_name(&self) -> &str;

    /// Acquire the camera stream for the given facing.
    fn start(&mut self, facing: CameraFacing) -> Result<()>;

    /// Capture one frame from the active stream as JPEG bytes.
    fn capture_jpeg(&mut self, quality: u8) -> Result<Vec<u8>>;

    /// Release the camera stream. Idempotent.
    fn stop(&mut self);

    /// Whether the stream is currently held.
    fn is_active(&self) -> bool;
}
