// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the PDFTools document utilities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a collected image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a collected image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// User picked an image file from storage.
    FilePick,
    /// Frame captured from the device camera.
    CameraCapture,
}

/// MIME type for an image file extension. Unknown extensions fall back to
/// the generic byte-stream type.
pub fn image_mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// A single image waiting to be assembled into a PDF.
///
/// Holds the encoded bytes; pixel dimensions are recorded when known
/// (camera frames, or once a preview has been decoded) but the assembler
/// always decodes fresh at assembly time.
#[derive(Debug, Clone)]
pub struct ImageItem {
    pub id: ImageId,
    /// Display name (file name or a generated capture label).
    pub name: String,
    /// MIME type of the encoded bytes (e.g. "image/jpeg").
    pub mime: String,
    /// Encoded image bytes as selected or captured.
    pub bytes: Vec<u8>,
    /// PNG-encoded thumbnail for the preview grid, if one was generated.
    pub preview_png: Option<Vec<u8>>,
    /// Natural pixel dimensions (width, height), if already known.
    pub pixel_size: Option<(u32, u32)>,
    pub source: ImageSource,
    pub added_at: DateTime<Utc>,
}

impl ImageItem {
    pub fn new(name: String, mime: String, bytes: Vec<u8>, source: ImageSource) -> Self {
        Self {
            id: ImageId::new(),
            name,
            mime,
            bytes,
            preview_png: None,
            pixel_size: None,
            source,
            added_at: Utc::now(),
        }
    }
}

/// Ordered in-memory list of images pending assembly.
///
/// Insertion order is the page order of the output document. Each item
/// carries a unique id; removal is by id and preserves the order of the
/// remaining items.
#[derive(Debug, Clone, Default)]
pub struct ImageCollector {
    items: Vec<ImageItem>,
}

impl ImageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image at the end of the list.
    pub fn push(&mut self, item: ImageItem) {
        self.items.push(item);
    }

    /// Remove the item with the given id. Returns true if an item was removed.
    pub fn remove(&mut self, id: ImageId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drop all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in page order.
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn get_mut(&mut self, id: ImageId) -> Option<&mut ImageItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::A3 => (297.0, 420.0),
            Self::A5 => (148.0, 210.0),
            Self::Letter => (216.0, 279.0),
            Self::Legal => (216.0, 356.0),
        }
    }
}

/// Which camera the scan page is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraFacing {
    /// Screen-side camera.
    Front,
    /// World-facing camera (default for document scanning).
    Rear,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Rear,
            Self::Rear => Self::Front,
        }
    }
}

/// Rewrite modes offered by the text improver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewriteMode {
    Improve,
    Grammar,
    Formal,
    Simplify,
}

impl RewriteMode {
    pub const ALL: [RewriteMode; 4] = [
        RewriteMode::Improve,
        RewriteMode::Grammar,
        RewriteMode::Formal,
        RewriteMode::Simplify,
    ];

    /// Short label for the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Improve => "Improve Writing",
            Self::Grammar => "Fix Grammar",
            Self::Formal => "Make Formal",
            Self::Simplify => "Simplify",
        }
    }

    /// One-line description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Improve => "Enhance overall quality",
            Self::Grammar => "Correct grammatical errors",
            Self::Formal => "Professional tone",
            Self::Simplify => "Make it easier to read",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ImageItem {
        ImageItem::new(
            name.to_string(),
            "image/png".to_string(),
            vec![1, 2, 3],
            ImageSource::FilePick,
        )
    }

    #[test]
    fn collector_preserves_insertion_order() {
        let mut collector = ImageCollector::new();
        collector.push(item("a"));
        collector.push(item("b"));
        collector.push(item("c"));

        let names: Vec<&str> = collector.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn remove_by_id_keeps_others_in_order() {
        let mut collector = ImageCollector::new();
        collector.push(item("a"));
        collector.push(item("b"));
        collector.push(item("c"));
        let middle = collector.items()[1].id;

        assert!(collector.remove(middle));
        let names: Vec<&str> = collector.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut collector = ImageCollector::new();
        collector.push(item("a"));

        assert!(!collector.remove(ImageId::new()));
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn clear_empties_collector() {
        let mut collector = ImageCollector::new();
        collector.push(item("a"));
        collector.push(item("b"));
        collector.clear();
        assert!(collector.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let a = item("a");
        let b = item("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn mime_lookup_is_case_insensitive() {
        assert_eq!(image_mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(image_mime_for_extension("png"), "image/png");
        assert_eq!(image_mime_for_extension("xyz"), "application/octet-stream");
    }

    #[test]
    fn facing_toggles_both_ways() {
        assert_eq!(CameraFacing::Front.toggled(), CameraFacing::Rear);
        assert_eq!(CameraFacing::Rear.toggled(), CameraFacing::Front);
    }
}
