//! Image utilities for galaxy-survey pipelines.
//!
//! Two small jobs: deciding whether two FITS files hold identical
//! pixels (the regression check run after re-generating cutouts), and
//! composing a grid of galaxy cutouts into a single quick-look PNG.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fits`] | Primary-HDU reader, [`fits_pixels_identical`](fits::fits_pixels_identical) |
//! | [`grid`] | [`render_galaxy_grid`](grid::render_galaxy_grid), [`load_cutouts`](grid::load_cutouts) |
//! | [`errors`] | [`ImageError`] and [`ImageResult`] |

pub mod errors;
pub mod fits;
pub mod grid;

pub use errors::{ImageError, ImageResult};
pub use fits::{fits_pixels_identical, read_primary, BitPix, FitsError, PrimaryHdu};
pub use grid::{load_cutouts, render_galaxy_grid};
