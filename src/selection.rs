use crate::image::GreyImage;

/// The highlighted pixel. Display only; transforms never read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub row: usize,
    pub col: usize,
}

impl Selection {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Map a position relative to the canvas origin to the pixel under it.
    ///
    /// Returns `None` when the position falls outside the image, so the
    /// caller keeps its previous selection.
    pub fn from_position(x: f32, y: f32, pixel_size: f32, image: &GreyImage) -> Option<Self> {
        if pixel_size.is_nan() || pixel_size <= 0.0 || x < 0.0 || y < 0.0 {
            return None;
        }
        let row = (y / pixel_size).floor() as usize;
        let col = (x / pixel_size).floor() as usize;
        image.contains(row, col).then_some(Self { row, col })
    }

    /// Pull the selection back inside `image` after its dimensions changed
    pub fn clamped_to(self, image: &GreyImage) -> Self {
        Self {
            row: self.row.min(image.rows() - 1),
            col: self.col.min(image.cols() - 1),
        }
    }
}
