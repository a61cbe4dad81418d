//! COCO JSON reader.
//!
//! # COCO Format Reference
//!
//! COCO bounding boxes use `[x, y, width, height]` where `(x, y)` is the
//! top-left corner in absolute pixel coordinates. A document carries three
//! linked collections: `categories`, `images` and `annotations`.
//!
//! The reader is permissive about fields this tool does not consume: `info`,
//! `licenses`, annotation `id`/`area`/`iscrowd`/`segmentation`, category
//! `supercategory` and the like are accepted and ignored. Missing required
//! fields are a fatal structural error.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::model::Dataset;
use crate::error::ConvertError;

/// Reads a document from a COCO JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use coco2yolo::dataset::io_coco_json::read_coco_json;
///
/// let dataset = read_coco_json(Path::new("annotations.json"))?;
/// # Ok::<(), coco2yolo::ConvertError>(())
/// ```
pub fn read_coco_json(path: &Path) -> Result<Dataset, ConvertError> {
    let file = File::open(path).map_err(ConvertError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| ConvertError::CocoJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a document from a COCO JSON string.
///
/// Useful for testing without file I/O.
pub fn from_coco_str(json: &str) -> Result<Dataset, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a document from a COCO JSON byte slice.
///
/// Useful for fuzzing and processing raw bytes without UTF-8 validation
/// overhead.
pub fn from_coco_slice(bytes: &[u8]) -> Result<Dataset, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CategoryId, CocoBox, ImageId};

    fn sample_coco_json() -> &'static str {
        r#"{
            "info": {
                "year": 2024,
                "version": "1.0",
                "description": "Test dataset"
            },
            "licenses": [
                {"id": 1, "name": "CC BY 4.0", "url": "https://creativecommons.org/licenses/by/4.0/"}
            ],
            "images": [
                {"id": 1, "width": 640, "height": 480, "file_name": "image001.jpg", "license": 1}
            ],
            "categories": [
                {"id": 1, "name": "person", "supercategory": "human"}
            ],
            "annotations": [
                {
                    "id": 1,
                    "image_id": 1,
                    "category_id": 1,
                    "bbox": [10.0, 20.0, 90.0, 60.0],
                    "area": 5400.0,
                    "iscrowd": 0,
                    "segmentation": []
                }
            ]
        }"#
    }

    #[test]
    fn test_parses_sample_and_ignores_extra_fields() {
        let dataset = from_coco_str(sample_coco_json()).expect("parse failed");

        assert_eq!(dataset.categories.len(), 1);
        assert_eq!(dataset.images.len(), 1);
        assert_eq!(dataset.annotations.len(), 1);

        let img = &dataset.images[0];
        assert_eq!(img.id, ImageId(1));
        assert_eq!(img.file_name, "image001.jpg");
        assert_eq!(img.width, 640);
        assert_eq!(img.height, 480);

        let ann = &dataset.annotations[0];
        assert_eq!(ann.image_id, ImageId(1));
        assert_eq!(ann.category_id, CategoryId(1));
        assert_eq!(ann.bbox, CocoBox::from_xywh(10.0, 20.0, 90.0, 60.0));
    }

    #[test]
    fn test_missing_collection_is_a_structural_error() {
        // No "images" key at all.
        let json = r#"{
            "categories": [{"id": 1, "name": "person"}],
            "annotations": []
        }"#;

        assert!(from_coco_str(json).is_err());
    }

    #[test]
    fn test_missing_member_field_is_a_structural_error() {
        // Image without width.
        let json = r#"{
            "categories": [],
            "images": [{"id": 1, "file_name": "a.jpg", "height": 100}],
            "annotations": []
        }"#;

        assert!(from_coco_str(json).is_err());
    }

    #[test]
    fn test_malformed_bbox_is_a_structural_error() {
        let json = r#"{
            "categories": [],
            "images": [],
            "annotations": [{"image_id": 1, "category_id": 1, "bbox": [1, 2, 3]}]
        }"#;

        assert!(from_coco_str(json).is_err());
    }

    #[test]
    fn test_read_missing_file_surfaces_io_error() {
        let err = read_coco_json(Path::new("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }

    #[test]
    fn test_from_slice_matches_from_str() {
        let from_str = from_coco_str(sample_coco_json()).expect("parse str");
        let from_slice = from_coco_slice(sample_coco_json().as_bytes()).expect("parse slice");

        assert_eq!(from_str.annotations[0].bbox, from_slice.annotations[0].bbox);
    }
}
