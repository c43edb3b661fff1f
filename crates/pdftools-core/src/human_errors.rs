// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the notification banners.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Nothing in this app retries automatically; the flags drive icon and colour
// in the UI and tell the user whether clicking the action again can help.

use crate::error::PdfToolsError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// May succeed on a second attempt (I/O hiccup, busy device).
    Transient,
    /// User must do something first (add an image, grant permission).
    ActionRequired,
    /// Cannot be fixed by retrying or user action on this device.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether clicking the same action again can succeed.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `PdfToolsError` into a `HumanError` anyone can understand.
pub fn humanize_error(err: &PdfToolsError) -> HumanError {
    match err {
        // -- Input errors --
        PdfToolsError::EmptyCollector => HumanError {
            message: "Please add at least one image.".into(),
            suggestion: "Upload images or capture a page with the camera, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PdfToolsError::EmptyText => HumanError {
            message: "Please enter some text first.".into(),
            suggestion: "Type or paste your text into the box, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Document errors --
        PdfToolsError::ImageError(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PdfToolsError::PdfError(_) => HumanError {
            message: "Failed to generate the PDF.".into(),
            suggestion: "Try again. If this keeps happening, try removing the most recently added image.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PdfToolsError::InvalidDimensions { .. } => HumanError {
            message: "This image has no usable size.".into(),
            suggestion: "The file doesn't look like a valid image. Try a different file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PdfToolsError::PageGeometry(_) => HumanError {
            message: "The page settings don't fit together.".into(),
            suggestion: "The margins are larger than the page. Reset the settings and try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Camera --
        PdfToolsError::CameraDenied(_) => HumanError {
            message: "Could not access the camera.".into(),
            suggestion: "Check the camera permissions for this app in your device settings, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        PdfToolsError::CameraUnavailable => HumanError {
            message: "No camera was found on this device.".into(),
            suggestion: "You can still add pages by uploading image files instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        // -- Storage --
        PdfToolsError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or try saving to a different folder.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        PdfToolsError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Platform --
        PdfToolsError::Bridge(_) => HumanError {
            message: "A device-specific feature didn't work.".into(),
            suggestion: "Try restarting the app. Some features may not be available on all devices.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PdfToolsError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "On this device you can add pages by uploading image files instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_is_action_required() {
        let human = humanize_error(&PdfToolsError::EmptyCollector);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn camera_denied_is_action_required_and_retriable() {
        let human = humanize_error(&PdfToolsError::CameraDenied("NotAllowedError".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.retriable);
    }

    #[test]
    fn pdf_failure_is_transient() {
        let human = humanize_error(&PdfToolsError::PdfError("serialize".into()));
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn bad_image_is_permanent() {
        let human = humanize_error(&PdfToolsError::ImageError("decode".into()));
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = PdfToolsError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }
}
