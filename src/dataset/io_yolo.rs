//! YOLO txt label writer.
//!
//! Emits one label file per image plus a shared `labels.txt` class list into
//! a flat destination directory. Each label row is
//! `<class> <cx> <cy> <w> <h>` with the four floats normalized to the image
//! dimensions and fixed to exactly six decimal places.
//!
//! The destination directory must already exist; nothing is created here.
//! There is no rollback: files written before a failure stay on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::ids::{CategoryId, ImageId};
use super::model::{Annotation, Category, Dataset, Image};
use crate::error::ConvertError;

/// File name of the shared class list.
pub const LABELS_FILE_NAME: &str = "labels.txt";

const LABEL_EXTENSION: &str = "txt";

/// How the class column of a label row is derived from an annotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassMode {
    /// Write the COCO category id through verbatim, without checking it
    /// against the category list.
    #[default]
    CategoryId,

    /// Write the zero-based position of the category in the source list,
    /// i.e. the line number of its name in `labels.txt`. An annotation
    /// referencing a category absent from the list is a fatal error in this
    /// mode.
    ZeroIndexed,
}

/// Counts reported after a successful conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Class names written to `labels.txt`.
    pub categories: usize,

    /// Label files written (one per image, empty files included).
    pub images: usize,

    /// Annotation rows written across all label files.
    pub annotations: usize,

    /// Annotations excluded because their image id matched no image.
    pub skipped_annotations: usize,
}

/// Writes a COCO document as YOLO label files.
///
/// Emits `labels.txt` (one class name per line, source category order) and
/// then one `<stem>.txt` per image in document order, where `<stem>` is the
/// image file name truncated at the first `.`. Images without annotations
/// produce an empty file; annotations owned by no image in the document are
/// skipped and only counted in the summary.
///
/// # Errors
/// Fails on the first unwritable path, or on an unknown category id when
/// `mode` is [`ClassMode::ZeroIndexed`].
pub fn write_yolo_labels(
    out_dir: &Path,
    dataset: &Dataset,
    mode: ClassMode,
) -> Result<ConversionSummary, ConvertError> {
    let labels_path = out_dir.join(LABELS_FILE_NAME);
    write_file(&labels_path, &render_labels_txt(&dataset.categories))?;

    let class_map = match mode {
        ClassMode::CategoryId => None,
        ClassMode::ZeroIndexed => Some(class_index_map(&dataset.categories)),
    };

    // Group once up front instead of rescanning all annotations per image.
    // Source order within each image is preserved for diffable output.
    let mut by_image: BTreeMap<ImageId, Vec<&Annotation>> = BTreeMap::new();
    for ann in &dataset.annotations {
        by_image.entry(ann.image_id).or_default().push(ann);
    }

    let mut annotations_written = 0;
    for image in &dataset.images {
        let anns = by_image.remove(&image.id).unwrap_or_default();
        let content = render_image_labels(image, &anns, class_map.as_ref())?;
        annotations_written += anns.len();

        let file_name = format!("{}.{}", label_stem(&image.file_name), LABEL_EXTENSION);
        write_file(&out_dir.join(file_name), &content)?;
    }

    // Whatever is left in the map belongs to no image in the document.
    let skipped_annotations = by_image.values().map(Vec::len).sum();

    Ok(ConversionSummary {
        categories: dataset.categories.len(),
        images: dataset.images.len(),
        annotations: annotations_written,
        skipped_annotations,
    })
}

/// Renders the shared class list: one display name per line.
///
/// Source order is preserved exactly; the line position is the implicit
/// class index downstream trainers use.
pub fn render_labels_txt(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        out.push_str(&category.name);
        out.push('\n');
    }
    out
}

/// Renders the label rows for one image.
///
/// Returns the empty string when the image owns no annotations. `class_map`
/// is `Some` only in [`ClassMode::ZeroIndexed`].
pub fn render_image_labels(
    image: &Image,
    annotations: &[&Annotation],
    class_map: Option<&BTreeMap<CategoryId, usize>>,
) -> Result<String, ConvertError> {
    let mut out = String::new();
    for ann in annotations {
        let yolo = ann
            .bbox
            .to_yolo(f64::from(image.width), f64::from(image.height));

        let class = match class_map {
            None => ann.category_id.to_string(),
            Some(map) => map
                .get(&ann.category_id)
                .ok_or(ConvertError::UnknownCategory {
                    image_id: ann.image_id,
                    category_id: ann.category_id,
                })?
                .to_string(),
        };

        out.push_str(&format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            class, yolo.cx, yolo.cy, yolo.width, yolo.height
        ));
    }
    Ok(out)
}

/// Zero-based class index per category id, following source order.
fn class_index_map(categories: &[Category]) -> BTreeMap<CategoryId, usize> {
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| (category.id, index))
        .collect()
}

/// Text before the first `.` of the image file name.
///
/// `img.v2.png` collapses to `img`, so multi-dot names can collide on the
/// same label file.
fn label_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

fn write_file(path: &Path, content: &str) -> Result<(), ConvertError> {
    fs::write(path, content).map_err(|source| ConvertError::LabelWrite {
        path: path.to_path_buf(),
        source,
    })
}
