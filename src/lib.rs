//! coco2yolo: convert COCO JSON annotations to YOLO txt labels.
//!
//! Reads one aggregate COCO document (categories, images, annotations) and
//! writes the YOLO training layout: a shared `labels.txt` class list plus
//! one `<image-stem>.txt` label file per image, each row holding a
//! normalized center-form bounding box.
//!
//! # Modules
//!
//! - [`dataset`]: document model, the box transform, and COCO/YOLO I/O
//! - [`error`]: error types for coco2yolo operations

pub mod dataset;
pub mod error;

use std::path::PathBuf;

use clap::Parser;

pub use error::ConvertError;

use dataset::io_coco_json::read_coco_json;
use dataset::io_yolo::{write_yolo_labels, ClassMode};

/// The coco2yolo CLI application.
#[derive(Parser)]
#[command(name = "coco2yolo")]
#[command(version, about)]
struct Cli {
    /// Path to the input COCO JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output directory. Must already exist.
    #[arg(short, long)]
    output: PathBuf,

    /// Write zero-based class indices (labels.txt line numbers) instead of
    /// raw COCO category ids.
    #[arg(long)]
    zero_index: bool,
}

/// Run the coco2yolo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    let dataset = read_coco_json(&cli.input)?;

    let mode = if cli.zero_index {
        ClassMode::ZeroIndexed
    } else {
        ClassMode::CategoryId
    };
    let summary = write_yolo_labels(&cli.output, &dataset, mode)?;

    println!("COCO JSON to YOLO txt successfully converted!");
    println!(
        "  {} class(es), {} image(s), {} annotation(s)",
        summary.categories, summary.images, summary.annotations
    );
    if summary.skipped_annotations > 0 {
        println!(
            "  {} annotation(s) referenced images not in the document and were skipped",
            summary.skipped_annotations
        );
    }

    Ok(())
}
