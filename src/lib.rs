#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod image;
pub mod renderer;
pub mod selection;
pub mod session;
pub mod transform;

pub use app::ImageProcessorApp;
pub use command::{Command, CommandOutcome};
pub use config::AppConfig;
pub use error::{CodecError, ImageError};
pub use file_handler::{FilePicker, NativeFilePicker};
pub use crate::image::{GreyImage, Sample};
pub use renderer::{GreyPalette, Renderer};
pub use selection::Selection;
pub use session::Session;
pub use transform::Transform;
