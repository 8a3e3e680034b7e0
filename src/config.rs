use eframe::egui;

/// Screen size of one image pixel, in points
pub const DEFAULT_PIXEL_SIZE: f32 = 1.0;

/// Start-up settings. Nothing here is read from or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Screen size of one image pixel, in points
    pub pixel_size: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Image Processor".to_owned(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            window_size: [900.0, 640.0],
            min_window_size: [320.0, 240.0],
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size)
                .with_drag_and_drop(true),
            ..Default::default()
        }
    }
}
