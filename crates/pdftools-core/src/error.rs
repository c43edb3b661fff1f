// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PDFTools.

use thiserror::Error;

/// Top-level error type for all PDFTools operations.
#[derive(Debug, Error)]
pub enum PdfToolsError {
    // -- Input errors --
    #[error("no images to convert")]
    EmptyCollector,

    #[error("no text to convert")]
    EmptyText,

    // -- Document errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("PDF generation failed: {0}")]
    PdfError(String),

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid page geometry: {0}")]
    PageGeometry(String),

    // -- Camera errors --
    #[error("camera access denied: {0}")]
    CameraDenied(String),

    #[error("no camera available on this device")]
    CameraUnavailable,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PdfToolsError>;
