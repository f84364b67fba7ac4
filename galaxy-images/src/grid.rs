//! Galaxy cutout mosaics.
//!
//! Renders a rows×cols grid of equally-sized galaxy cutouts into one
//! PNG, optionally stamping a red label into each cell — the quick-look
//! figure used to eyeball a batch of cutouts before upload.

use crate::{ImageError, ImageResult};
use image::RgbImage;
use plotters::element::BitMapElement;
use plotters::prelude::*;
use std::path::Path;

/// Decodes cutout files into RGB images, in order.
pub fn load_cutouts<P: AsRef<Path>>(paths: &[P]) -> ImageResult<Vec<RgbImage>> {
    paths
        .iter()
        .map(|p| Ok(image::open(p.as_ref())?.to_rgb8()))
        .collect()
}

/// Renders the first `rows * cols` images as a mosaic PNG at `path`.
///
/// All cells take the dimensions of the first image; images are placed
/// row-major. With `labels`, the n-th label is drawn in red inside the
/// n-th cell.
///
/// # Errors
/// `NotEnoughImages`/`NotEnoughLabels` if fewer inputs than cells,
/// `CellSizeMismatch` if any used image differs from the first in size,
/// `Render` for backend failures.
pub fn render_galaxy_grid(
    images: &[RgbImage],
    rows: usize,
    cols: usize,
    path: &Path,
    labels: Option<&[String]>,
) -> ImageResult<()> {
    let needed = rows * cols;
    if images.len() < needed {
        return Err(ImageError::NotEnoughImages {
            rows,
            cols,
            needed,
            got: images.len(),
        });
    }
    if let Some(labels) = labels {
        if labels.len() < needed {
            return Err(ImageError::NotEnoughLabels {
                needed,
                got: labels.len(),
            });
        }
    }
    let (cell_w, cell_h) = images[0].dimensions();
    for (index, img) in images.iter().take(needed).enumerate() {
        if img.dimensions() != (cell_w, cell_h) {
            let (got_w, got_h) = img.dimensions();
            return Err(ImageError::CellSizeMismatch {
                index,
                got_w,
                got_h,
                want_w: cell_w,
                want_h: cell_h,
            });
        }
    }

    let canvas_size = (cols as u32 * cell_w, rows as u32 * cell_h);
    let root = BitMapBackend::new(path, canvas_size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    for n in 0..needed {
        let x = (n % cols) as i32 * cell_w as i32;
        let y = (n / cols) as i32 * cell_h as i32;

        let cell: BitMapElement<'_, _> =
            BitMapElement::with_owned_buffer((x, y), (cell_w, cell_h), images[n].as_raw().clone())
                .ok_or_else(|| ImageError::Render("cell buffer size mismatch".to_string()))?;
        root.draw(&cell).map_err(render_error)?;

        if let Some(labels) = labels {
            let style = ("sans-serif", 16).into_font().color(&RED);
            let pos = (x + cell_w as i32 / 5, y + cell_h as i32 / 5);
            root.draw(&Text::new(labels[n].clone(), pos, style))
                .map_err(render_error)?;
        }
    }

    root.present().map_err(render_error)?;
    Ok(())
}

fn render_error<E: std::error::Error>(e: E) -> ImageError {
    ImageError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb(rgb))
    }

    #[test]
    fn test_grid_dimensions_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("grid.png");

        let images = vec![
            solid(8, 8, [255, 0, 0]),
            solid(8, 8, [0, 255, 0]),
            solid(8, 8, [0, 0, 255]),
            solid(8, 8, [255, 255, 0]),
        ];
        render_galaxy_grid(&images, 2, 2, &out, None).unwrap();

        let mosaic = image::open(&out).unwrap().to_rgb8();
        assert_eq!(mosaic.dimensions(), (16, 16));
        assert_eq!(mosaic.get_pixel(3, 3), &Rgb([255, 0, 0]));
        assert_eq!(mosaic.get_pixel(12, 3), &Rgb([0, 255, 0]));
        assert_eq!(mosaic.get_pixel(3, 12), &Rgb([0, 0, 255]));
        assert_eq!(mosaic.get_pixel(12, 12), &Rgb([255, 255, 0]));
    }

    #[test]
    fn test_extra_images_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("grid.png");

        let images = vec![
            solid(4, 4, [10, 10, 10]),
            solid(4, 4, [20, 20, 20]),
            solid(4, 4, [30, 30, 30]),
        ];
        render_galaxy_grid(&images, 1, 2, &out, None).unwrap();

        let mosaic = image::open(&out).unwrap().to_rgb8();
        assert_eq!(mosaic.dimensions(), (8, 4));
    }

    #[test]
    fn test_too_few_images() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("grid.png");

        let images = vec![solid(4, 4, [0, 0, 0])];
        let result = render_galaxy_grid(&images, 2, 2, &out, None);
        assert!(matches!(
            result,
            Err(ImageError::NotEnoughImages { needed: 4, got: 1, .. })
        ));
    }

    #[test]
    fn test_mismatched_cell_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("grid.png");

        let images = vec![solid(4, 4, [0, 0, 0]), solid(8, 8, [0, 0, 0])];
        let result = render_galaxy_grid(&images, 1, 2, &out, None);
        assert!(matches!(
            result,
            Err(ImageError::CellSizeMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_too_few_labels() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("grid.png");

        let images = vec![solid(4, 4, [0, 0, 0]), solid(4, 4, [0, 0, 0])];
        let labels = vec!["only one".to_string()];
        let result = render_galaxy_grid(&images, 1, 2, &out, Some(&labels));
        assert!(matches!(
            result,
            Err(ImageError::NotEnoughLabels { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn test_load_cutouts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        solid(4, 4, [1, 2, 3]).save(&a).unwrap();
        solid(4, 4, [4, 5, 6]).save(&b).unwrap();

        let cutouts = load_cutouts(&[&a, &b]).unwrap();
        assert_eq!(cutouts.len(), 2);
        assert_eq!(cutouts[0].get_pixel(0, 0), &Rgb([1, 2, 3]));
        assert_eq!(cutouts[1].get_pixel(0, 0), &Rgb([4, 5, 6]));
    }
}
