//! Core document model: the COCO annotation collections this tool consumes.
//!
//! The model deserializes straight from a COCO JSON document. All three
//! collections keep their source order; for categories that order is
//! load-bearing, because the emitted line position in `labels.txt` is the
//! class index downstream trainers use.

use serde::{Deserialize, Serialize};

use super::bbox::CocoBox;
use super::ids::{CategoryId, ImageId};

/// A complete COCO annotation document.
///
/// The whole model is read once, transformed, and discarded after the label
/// files are written; nothing here is mutated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// All category definitions, in source order.
    pub categories: Vec<Category>,

    /// All images covered by the document.
    pub images: Vec<Image>,

    /// All annotations (bounding boxes with a category).
    pub annotations: Vec<Annotation>,
}

/// A category (class label) in the document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    /// Identifier referenced by annotations.
    pub id: CategoryId,

    /// Display name, written as one line of `labels.txt`.
    pub name: String,
}

impl Category {
    /// Creates a new category with the given properties.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An image in the document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier for this image.
    pub id: ImageId,

    /// Filename the per-image label file is named after (text before the
    /// first `.`).
    pub file_name: String,

    /// Width of the image in pixels.
    pub width: u32,

    /// Height of the image in pixels.
    pub height: u32,
}

impl Image {
    /// Creates a new image with the given properties.
    pub fn new(
        id: impl Into<ImageId>,
        file_name: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            width,
            height,
        }
    }
}

/// An annotation: one bounding box owned by an image.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    /// ID of the image this annotation belongs to. An annotation whose id
    /// matches no image is silently excluded from the output.
    pub image_id: ImageId,

    /// Category carried through to the label row.
    pub category_id: CategoryId,

    /// Box in COCO form: `[x, y, width, height]` in absolute pixels.
    pub bbox: CocoBox,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(
        image_id: impl Into<ImageId>,
        category_id: impl Into<CategoryId>,
        bbox: CocoBox,
    ) -> Self {
        Self {
            image_id: image_id.into(),
            category_id: category_id.into(),
            bbox,
        }
    }
}
