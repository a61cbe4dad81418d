fn main() {
    if let Err(err) = coco2yolo::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
