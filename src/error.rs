use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::{CategoryId, ImageId};

/// The main error type for coco2yolo operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse COCO JSON from {path}: {source}")]
    CocoJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    LabelWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "annotation on image {image_id} references category {category_id}, which is not in the category list"
    )]
    UnknownCategory {
        image_id: ImageId,
        category_id: CategoryId,
    },
}
