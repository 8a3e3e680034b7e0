// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Shape, Stroke, Vec2};

use crate::image::GreyImage;
use crate::selection::Selection;

/// Drawn for values below 0; stored samples can never reach it
pub const UNDERFLOW_COLOR: Color32 = Color32::BLUE;
/// Drawn for values above 255; stored samples can never reach it
pub const OVERFLOW_COLOR: Color32 = Color32::RED;
/// Outline around the selected pixel
pub const SELECTION_COLOR: Color32 = Color32::RED;

/// All 256 grey levels, computed once so drawing never builds colours.
#[derive(Debug, Clone)]
pub struct GreyPalette {
    greys: [Color32; 256],
}

impl Default for GreyPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl GreyPalette {
    pub fn new() -> Self {
        let mut greys = [Color32::BLACK; 256];
        for (level, color) in (0..=u8::MAX).zip(greys.iter_mut()) {
            *color = Color32::from_gray(level);
        }
        Self { greys }
    }

    /// Colour for a grey level.
    ///
    /// Out-of-range values get loud highlight colours instead of being
    /// clamped, so a transform that forgot to clamp shows up on screen.
    pub fn color(&self, grey: i32) -> Color32 {
        match u8::try_from(grey) {
            Ok(level) => self.greys[usize::from(level)],
            Err(_) if grey < 0 => UNDERFLOW_COLOR,
            Err(_) => OVERFLOW_COLOR,
        }
    }
}

/// Draws the current image as one filled square per pixel
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: GreyPalette,
    pixel_size: f32,
}

impl Renderer {
    /// Creates a renderer drawing each pixel as a `pixel_size` square
    pub fn new(pixel_size: f32) -> Self {
        Self {
            palette: GreyPalette::new(),
            pixel_size,
        }
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn palette(&self) -> &GreyPalette {
        &self.palette
    }

    /// Screen size of the whole image
    pub fn canvas_size(&self, image: &GreyImage) -> Vec2 {
        egui::vec2(
            image.cols() as f32 * self.pixel_size,
            image.rows() as f32 * self.pixel_size,
        )
    }

    /// Build the shapes for one frame
    ///
    /// Args:
    ///     image (GreyImage): The image to draw
    ///     selection (Selection): Pixel to outline
    ///     origin (Pos2): Screen position of the top-left pixel
    ///
    /// Returns:
    ///     Vec<Shape>: One filled square per pixel, then the selection outline
    pub fn shapes(&self, image: &GreyImage, selection: Selection, origin: Pos2) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(image.rows() * image.cols() + 1);

        for (row, samples) in image.iter_rows().enumerate() {
            for (col, &sample) in samples.iter().enumerate() {
                shapes.push(Shape::rect_filled(
                    self.cell_rect(origin, row, col),
                    0.0,
                    self.palette.color(i32::from(sample)),
                ));
            }
        }

        shapes.push(Shape::rect_stroke(
            self.cell_rect(origin, selection.row, selection.col),
            0.0,
            Stroke::new(1.0, SELECTION_COLOR),
        ));

        shapes
    }

    /// Paint the image in a single batch so the frame never shows half an image
    pub fn paint(
        &self,
        painter: &egui::Painter,
        image: &GreyImage,
        selection: Selection,
        origin: Pos2,
    ) {
        painter.extend(self.shapes(image, selection, origin));
    }

    fn cell_rect(&self, origin: Pos2, row: usize, col: usize) -> Rect {
        Rect::from_min_size(
            origin + egui::vec2(col as f32, row as f32) * self.pixel_size,
            Vec2::splat(self.pixel_size),
        )
    }
}
