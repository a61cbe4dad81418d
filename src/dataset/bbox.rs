//! Bounding box types for the two encodings this tool converts between.
//!
//! COCO stores a box as its absolute top-left corner plus extent in pixels;
//! YOLO stores the box center plus extent as fractions of the image size.
//! The conversion between them is the core of this crate.

use serde::{Deserialize, Serialize};

/// A bounding box in COCO form: absolute top-left corner plus extent, in
/// pixels.
///
/// Serializes as the COCO 4-element array `[x, y, width, height]`.
///
/// Note: components are not validated. Boxes that extend beyond the image
/// bounds are representable and convert to normalized values outside [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CocoBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CocoBox {
    /// Creates a box from top-left corner and extent.
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts to YOLO form: center plus extent, normalized to the image
    /// dimensions.
    ///
    /// Caller must guarantee `image_width > 0` and `image_height > 0`; a
    /// zero dimension yields non-finite components.
    pub fn to_yolo(&self, image_width: f64, image_height: f64) -> YoloBox {
        let x_center = self.x + self.width / 2.0;
        let y_center = self.y + self.height / 2.0;

        YoloBox {
            cx: x_center / image_width,
            cy: y_center / image_height,
            width: self.width / image_width,
            height: self.height / image_height,
        }
    }
}

/// A bounding box in YOLO form: center plus extent, as fractions of the
/// image dimensions.
///
/// Nominally in [0, 1] for boxes inside the image; never clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YoloBox {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
}

impl YoloBox {
    /// Converts back to COCO form in absolute pixels. Inverse of
    /// [`CocoBox::to_yolo`] up to floating-point error.
    pub fn to_coco(&self, image_width: f64, image_height: f64) -> CocoBox {
        let width = self.width * image_width;
        let height = self.height * image_height;

        CocoBox {
            x: self.cx * image_width - width / 2.0,
            y: self.cy * image_height - height / 2.0,
            width,
            height,
        }
    }
}

// Custom serde implementations so the box reads and writes as the COCO
// `[x, y, w, h]` array rather than a struct with named fields.
impl Serialize for CocoBox {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.width, self.height].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CocoBox {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y, width, height] = <[f64; 4]>::deserialize(deserializer)?;
        Ok(CocoBox {
            x,
            y,
            width,
            height,
        })
    }
}
