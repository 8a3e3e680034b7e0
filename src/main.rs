#![warn(clippy::all, rust_2018_idioms)]

use grey_processor::{AppConfig, ImageProcessorApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = AppConfig::default();
    let options = config.native_options();
    let title = config.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ImageProcessorApp::new(cc, &config)))),
    )
}
