#![allow(dead_code)]

use coco2yolo::dataset::{Annotation, Category, CocoBox, Dataset, Image};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Absolute tolerance for recovering pixel coordinates from a label row
/// written at six decimal places.
pub fn eps_yolo(image_w: u32, image_h: u32) -> f64 {
    image_w.max(image_h) as f64 * 1e-6
}

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Image dimensions plus a box whose corner is anchored inside the image.
/// The box extent may still run past the far edges, which the converter
/// must pass through unclamped.
pub fn arb_box_in_image() -> impl Strategy<Value = (u32, u32, CocoBox)> {
    (1u32..=4096, 1u32..=4096).prop_flat_map(|(image_w, image_h)| {
        let w = f64::from(image_w);
        let h = f64::from(image_h);
        (0.0..w, 0.0..h, 0.0..=w, 0.0..=h).prop_map(move |(x, y, box_w, box_h)| {
            (image_w, image_h, CocoBox::from_xywh(x, y, box_w, box_h))
        })
    })
}

pub fn arb_category_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

/// A well-formed document: unique ids, unique image stems, every annotation
/// owned by an image and category that exist.
pub fn arb_dataset(
    max_categories: usize,
    max_images: usize,
    max_annotations: usize,
) -> impl Strategy<Value = Dataset> {
    let categories = prop::collection::vec(arb_category_name(), 1..=max_categories);
    let images = prop::collection::vec((1u32..=2048, 1u32..=2048), 1..=max_images);

    (categories, images).prop_flat_map(move |(names, dims)| {
        let n_images = dims.len();
        let n_categories = names.len();

        prop::collection::vec(
            (
                0..n_images,
                0..n_categories,
                0.0..2048.0f64,
                0.0..2048.0f64,
                0.0..2048.0f64,
                0.0..2048.0f64,
            ),
            0..=max_annotations,
        )
        .prop_map(move |rows| {
            let categories = names
                .iter()
                .enumerate()
                .map(|(i, name)| Category::new((i + 1) as u64, name.clone()))
                .collect();

            let images = dims
                .iter()
                .enumerate()
                .map(|(i, (w, h))| Image::new((i + 1) as u64, format!("img_{i:04}.jpg"), *w, *h))
                .collect();

            let annotations = rows
                .into_iter()
                .map(|(img_idx, cat_idx, x, y, w, h)| {
                    Annotation::new(
                        (img_idx + 1) as u64,
                        (cat_idx + 1) as u64,
                        CocoBox::from_xywh(x, y, w, h),
                    )
                })
                .collect();

            Dataset {
                categories,
                images,
                annotations,
            }
        })
    })
}
