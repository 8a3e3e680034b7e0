use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

/// Extensions offered in the open dialog and accepted when dropped
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Chooses files on behalf of Load, Save and Merge.
///
/// `None` means the user cancelled, which is not an error.
pub trait FilePicker {
    fn pick_open(&self, title: &str) -> Option<PathBuf>;
    fn pick_save(&self, title: &str) -> Option<PathBuf>;
}

/// Blocking native dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl FilePicker for NativeFilePicker {
    fn pick_open(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_save(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("PNG", &["png"])
            .set_file_name("image.png")
            .save_file()
    }
}

/// Where the contents of a dropped file can be read from
#[derive(Debug, Clone)]
pub enum DropSource {
    /// Native platforms hand over a path
    Path(PathBuf),
    /// Web and some native backends hand over the bytes directly
    Bytes(Arc<[u8]>),
}

/// An image file the user dropped on the window
#[derive(Debug, Clone)]
pub struct DroppedImage {
    pub name: String,
    pub source: DropSource,
}

/// Collects image files dropped onto the window
#[derive(Debug, Default)]
pub struct FileHandler;

impl FileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Take any files dropped this frame, keeping only images
    pub fn take_dropped_images(&self, ctx: &egui::Context) -> Vec<DroppedImage> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        dropped
            .into_iter()
            .filter_map(|file| {
                let name = display_name(&file);
                if !is_image_file(&file) {
                    log::warn!("Dropped file is not a supported type: {}", name);
                    return None;
                }
                let source = if let Some(bytes) = file.bytes {
                    DropSource::Bytes(bytes)
                } else if let Some(path) = file.path {
                    DropSource::Path(path)
                } else {
                    log::warn!("Dropped file has no accessible data: {}", name);
                    return None;
                };
                Some(DroppedImage { name, source })
            })
            .collect()
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping files:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    file.path
        .as_deref()
        .or_else(|| (!file.name.is_empty()).then(|| Path::new(&file.name)))
        .is_some_and(has_image_extension)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
