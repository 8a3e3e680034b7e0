use std::ops::{Index, IndexMut};

use crate::error::ImageError;

/// One greyscale intensity, 0 (black) to 255 (white)
pub type Sample = u8;

/// Built-in image shown before anything is loaded
const STARTUP_ROWS: [[Sample; 3]; 3] = [[80, 80, 80], [80, 200, 80], [80, 80, 80]];

/// A rectangular grid of greyscale samples stored row-major.
///
/// The grid always has at least one row and one column, and every row has
/// the same length. Samples are `u8`, so the 0..=255 range holds for every
/// stored value; transforms do their arithmetic in wider types and clamp
/// before writing back.
#[derive(Clone, PartialEq, Eq)]
pub struct GreyImage {
    rows: usize,
    cols: usize,
    data: Vec<Sample>,
}

// Custom Debug so large images don't flood the log
impl std::fmt::Debug for GreyImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreyImage")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl Default for GreyImage {
    fn default() -> Self {
        Self {
            rows: STARTUP_ROWS.len(),
            cols: STARTUP_ROWS[0].len(),
            data: STARTUP_ROWS.iter().flatten().copied().collect(),
        }
    }
}

impl GreyImage {
    /// Create an image from a row-major sample buffer
    pub fn new(rows: usize, cols: usize, data: Vec<Sample>) -> Result<Self, ImageError> {
        if rows == 0 || cols == 0 {
            return Err(ImageError::Empty { rows, cols });
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ImageError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create an image where every sample has the same value
    pub fn filled(rows: usize, cols: usize, value: Sample) -> Result<Self, ImageError> {
        Self::new(rows, cols, vec![value; rows * cols])
    }

    /// Create an image from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<Sample>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ImageError::Empty {
                rows: height,
                cols: width,
            });
        }

        let mut data = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ImageError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: height,
            cols: width,
            data,
        })
    }

    /// Number of rows (image height)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Sample> {
        self.contains(row, col)
            .then(|| self.data[row * self.cols + col])
    }

    /// Borrow one row of samples
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Sample] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Sample]> {
        self.data.chunks_exact(self.cols)
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Sample] {
        &mut self.data
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Sample> {
        self.data.chunks_exact_mut(self.cols)
    }

    /// Copy the samples out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Sample>> {
        self.iter_rows().map(<[Sample]>::to_vec).collect()
    }

    pub fn into_raw(self) -> Vec<Sample> {
        self.data
    }
}

impl Index<(usize, usize)> for GreyImage {
    type Output = Sample;

    fn index(&self, (row, col): (usize, usize)) -> &Sample {
        assert!(
            self.contains(row, col),
            "pixel ({row}, {col}) outside {}x{} image",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for GreyImage {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Sample {
        assert!(
            self.contains(row, col),
            "pixel ({row}, {col}) outside {}x{} image",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
