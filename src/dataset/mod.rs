//! The COCO document model and the conversion to YOLO labels.
//!
//! The [`Dataset`] is read once from a COCO JSON document
//! ([`io_coco_json`]), every box is mapped from absolute corner/extent form
//! to normalized center form ([`CocoBox::to_yolo`]), and the result is
//! emitted as one label file per image plus a shared class list
//! ([`io_yolo`]).
//!
//! # Design Principles
//!
//! 1. **Type Safety**: newtype ids keep the two foreign keys an annotation
//!    carries from being mixed up.
//!
//! 2. **Permissive Construction**: boxes are not validated on the way in;
//!    out-of-bounds input produces out-of-range normalized output rather
//!    than an error, matching what downstream tooling expects from this
//!    conversion.

mod bbox;
mod ids;
pub mod io_coco_json;
pub mod io_yolo;
mod model;

// Re-export core types for convenient access
pub use bbox::{CocoBox, YoloBox};
pub use ids::{CategoryId, ImageId};
pub use model::{Annotation, Category, Dataset, Image};
