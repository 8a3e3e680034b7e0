use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when building a [`crate::GreyImage`] from raw parts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// An image needs at least one row and one column
    #[error("Image must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: usize, cols: usize },

    /// The sample buffer does not match rows * cols
    #[error("Sample buffer holds {found} values, expected {expected}")]
    DataLength { expected: usize, found: usize },

    /// Rows of a nested grid have different lengths
    #[error("Row {row} has {found} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while reading or writing image files
#[derive(Error, Debug)]
pub enum CodecError {
    /// The file could not be opened or is not a supported raster format
    #[error("Image reading failed: {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// In-memory bytes (e.g. a dropped file) could not be decoded
    #[error("Image reading failed: {0}")]
    Memory(#[source] image::ImageError),

    /// The destination could not be written
    #[error("Image writing failed: {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded raster cannot be held as a greyscale grid
    #[error("Image reading failed: {0}")]
    Image(#[from] ImageError),
}

impl CodecError {
    /// True for failures that happened while reading an image
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::Memory(_) | Self::Image(_)
        )
    }

    /// True for failures that happened while writing an image
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
