// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Paper size for generated documents.
    pub default_paper_size: crate::PaperSize,
    /// Page margin for the image-to-PDF flow, in millimetres.
    pub image_margin_mm: f32,
    /// Page margin for the camera-scan flow, in millimetres.
    pub scan_margin_mm: f32,
    /// JPEG quality (1-100) for camera frame encoding.
    pub capture_jpeg_quality: u8,
    /// Which camera the scan page opens with.
    pub default_camera_facing: crate::CameraFacing,
    /// Simulated processing delay for the text improver, in milliseconds.
    pub rewrite_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_paper_size: crate::PaperSize::A4,
            image_margin_mm: 10.0,
            scan_margin_mm: 5.0,
            capture_jpeg_quality: 90,
            default_camera_facing: crate::CameraFacing::Rear,
            rewrite_delay_ms: 1500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_flows() {
        let config = AppConfig::default();
        assert_eq!(config.default_paper_size, crate::PaperSize::A4);
        assert_eq!(config.image_margin_mm, 10.0);
        assert_eq!(config.scan_margin_mm, 5.0);
        assert_eq!(config.capture_jpeg_quality, 90);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rewrite_delay_ms, config.rewrite_delay_ms);
        assert_eq!(back.default_camera_facing, config.default_camera_facing);
    }
}
