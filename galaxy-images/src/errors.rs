use crate::fits::FitsError;
use thiserror::Error;

/// Convenience alias for `Result<T, ImageError>`.
pub type ImageResult<T> = Result<T, ImageError>;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("FITS error: {0}")]
    Fits(#[from] FitsError),

    #[error("expected at least {needed} images for a {rows}x{cols} grid, got {got}")]
    NotEnoughImages {
        rows: usize,
        cols: usize,
        needed: usize,
        got: usize,
    },

    #[error("image {index} is {got_w}x{got_h}, expected {want_w}x{want_h} like the first cell")]
    CellSizeMismatch {
        index: usize,
        got_w: u32,
        got_h: u32,
        want_w: u32,
        want_h: u32,
    },

    #[error("expected at least {needed} labels, got {got}")]
    NotEnoughLabels { needed: usize, got: usize },

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
