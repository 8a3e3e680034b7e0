//! Per-pixel and geometric operations on a [`GreyImage`].
//!
//! Every operation takes the image by value and hands back the result, so
//! callers swap their current image whether or not the dimensions changed.

use crate::image::{GreyImage, Sample};

/// Grey levels added by [`lighten`]
pub const LIGHTEN_STEP: Sample = 20;

/// Grey level that [`fade`] pulls samples toward
pub const FADE_MIDPOINT: i32 = 128;

/// Fraction of the distance to the midpoint removed by [`fade`]
pub const FADE_RATE: f64 = 0.2;

/// The single-image operations exposed as buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Lighten,
    Fade,
    FlipHorizontal,
    ShiftVertical,
    Rotate180,
    Rotate90,
    Expand,
}

impl Transform {
    pub const ALL: [Transform; 7] = [
        Transform::Lighten,
        Transform::Fade,
        Transform::FlipHorizontal,
        Transform::ShiftVertical,
        Transform::Rotate180,
        Transform::Rotate90,
        Transform::Expand,
    ];

    pub fn apply(self, image: GreyImage) -> GreyImage {
        match self {
            Transform::Lighten => lighten(image),
            Transform::Fade => fade(image),
            Transform::FlipHorizontal => flip_horizontal(image),
            Transform::ShiftVertical => shift_vertical(image),
            Transform::Rotate180 => rotate_180(image),
            Transform::Rotate90 => rotate_90(image),
            Transform::Expand => expand(image),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Transform::Lighten => "Lighten",
            Transform::Fade => "Fade",
            Transform::FlipHorizontal => "Flip Horiz",
            Transform::ShiftVertical => "Shift Vert",
            Transform::Rotate180 => "Rotate 180",
            Transform::Rotate90 => "Rotate 90",
            Transform::Expand => "Expand",
        }
    }

    /// Whether the output may have different dimensions than the input
    pub fn changes_dimensions(self) -> bool {
        matches!(self, Transform::Rotate90)
    }
}

/// Raise every sample by [`LIGHTEN_STEP`], saturating at white.
pub fn lighten(mut image: GreyImage) -> GreyImage {
    for sample in image.as_mut_slice() {
        *sample = sample.saturating_add(LIGHTEN_STEP);
    }
    image
}

/// Pull every sample 20% of the way toward mid-grey.
///
/// A sample of 158 is 30 levels above 128 and drops by 6 to 152; a sample of
/// 48 is 80 below and rises by 16 to 64. The adjustment is rounded, so
/// samples within two levels of 128 stay where they are.
pub fn fade(mut image: GreyImage) -> GreyImage {
    for sample in image.as_mut_slice() {
        *sample = fade_sample(*sample);
    }
    image
}

fn fade_sample(sample: Sample) -> Sample {
    let value = i32::from(sample);
    let delta = (f64::from(value - FADE_MIDPOINT) * -FADE_RATE).round() as i32;
    clamp_sample(value + delta)
}

fn clamp_sample(value: i32) -> Sample {
    value.clamp(0, i32::from(Sample::MAX)) as Sample
}

/// Mirror the image about its vertical centre line.
pub fn flip_horizontal(mut image: GreyImage) -> GreyImage {
    for row in image.rows_mut() {
        row.reverse();
    }
    image
}

/// Move every row one step down; the bottom row wraps to the top.
pub fn shift_vertical(mut image: GreyImage) -> GreyImage {
    let cols = image.cols();
    image.as_mut_slice().rotate_right(cols);
    image
}

/// Turn the image half way round.
///
/// `output[r][c] = input[rows-1-r][cols-1-c]`, which in a row-major buffer is
/// the buffer read backwards.
pub fn rotate_180(mut image: GreyImage) -> GreyImage {
    image.as_mut_slice().reverse();
    image
}

/// Quarter turn producing a `cols x rows` image with
/// `output[r][c] = input[rows-1-c][r]`.
pub fn rotate_90(image: GreyImage) -> GreyImage {
    let (rows, cols) = image.dimensions();
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..cols {
        for c in 0..rows {
            data.push(image[(rows - 1 - c, r)]);
        }
    }
    rebuild(cols, rows, data, image)
}

/// Blow the top-left quarter up to fill the whole image.
///
/// Each quadrant pixel becomes a 2x2 block. When a dimension is odd the last
/// row or column is not covered by any block and comes out black.
pub fn expand(image: GreyImage) -> GreyImage {
    let (rows, cols) = image.dimensions();
    let mut data = vec![0; rows * cols];
    for y in 0..rows / 2 {
        for x in 0..cols / 2 {
            let value = image[(y, x)];
            for (dy, dx) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                data[(2 * y + dy) * cols + 2 * x + dx] = value;
            }
        }
    }
    rebuild(rows, cols, data, image)
}

/// Average `other` into the region both images share.
///
/// The shared region is `min(rows) x min(cols)` anchored at the top-left;
/// samples outside it keep their value. `None` means no second image was
/// chosen and leaves `image` as it is.
pub fn merge(mut image: GreyImage, other: Option<&GreyImage>) -> GreyImage {
    let Some(other) = other else {
        log::debug!("Merge skipped: no second image");
        return image;
    };

    let rows = image.rows().min(other.rows());
    let cols = image.cols().min(other.cols());
    for r in 0..rows {
        for c in 0..cols {
            let sum = u16::from(image[(r, c)]) + u16::from(other[(r, c)]);
            image[(r, c)] = (sum / 2) as Sample;
        }
    }
    image
}

// Dimensions come from a valid source image, so this only fails on a logic error.
fn rebuild(rows: usize, cols: usize, data: Vec<Sample>, source: GreyImage) -> GreyImage {
    match GreyImage::new(rows, cols, data) {
        Ok(image) => image,
        Err(err) => {
            log::error!("Transform produced an invalid image: {}", err);
            source
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(rows: Vec<Vec<Sample>>) -> GreyImage {
        GreyImage::from_rows(rows).unwrap()
    }

    #[test]
    fn test_fade_sample_examples() {
        assert_eq!(fade_sample(158), 152);
        assert_eq!(fade_sample(48), 64);
        assert_eq!(fade_sample(128), 128);
        assert_eq!(fade_sample(220), 202);
        assert_eq!(fade_sample(0), 26);
        assert_eq!(fade_sample(255), 230);
    }

    #[test]
    fn test_flip_keeps_odd_centre_column() {
        let flipped = flip_horizontal(image(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        assert_eq!(flipped.to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
    }

    #[test]
    fn test_shift_vertical_wraps_bottom_row() {
        let shifted = shift_vertical(image(vec![vec![1, 2], vec![3, 4], vec![5, 6]]));
        assert_eq!(shifted.to_rows(), vec![vec![5, 6], vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let rotated = rotate_90(image(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        assert_eq!(rotated.dimensions(), (3, 2));
        assert_eq!(
            rotated.to_rows(),
            vec![vec![4, 1], vec![5, 2], vec![6, 3]]
        );
    }

    #[test]
    fn test_expand_odd_dimensions_leave_black_edge() {
        let expanded = expand(image(vec![
            vec![1, 2, 9],
            vec![3, 4, 9],
            vec![9, 9, 9],
        ]));
        assert_eq!(
            expanded.to_rows(),
            vec![vec![1, 1, 0], vec![1, 1, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_only_rotate_90_changes_dimensions() {
        let source = image(vec![vec![10, 20, 30], vec![40, 50, 60]]);
        for transform in Transform::ALL {
            let output = transform.apply(source.clone());
            assert_eq!(
                output.dimensions() != source.dimensions(),
                transform.changes_dimensions(),
                "{:?}",
                transform
            );
        }
    }
}
