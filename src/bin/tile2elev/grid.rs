// grid.rs - Decode an image into an elevation grid
//
// Grid is indexed [row, col], matching image y/x.

use image::{DynamicImage, GenericImageView};
use ndarray::Array2;

use gsi_terrain::{Decoding, EncodedPixel};

/// One elevation per pixel; NaN marks no-data
pub fn decode_grid(img: &DynamicImage, decoding: Decoding) -> Array2<f32> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(y, x)| {
        let p = img.get_pixel(x as u32, y as u32);
        decoding.elevation(EncodedPixel::new(p[0], p[1], p[2]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn shape_and_values() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([0, 1, 0]));
        img.put_pixel(0, 1, Rgb([128, 0, 0]));
        let grid = decode_grid(&DynamicImage::ImageRgb8(img), Decoding::Reference);

        assert_eq!(grid.dim(), (2, 3));
        assert!((grid[[1, 2]] - 2.56).abs() < 1e-5);
        assert!(grid[[1, 0]].is_nan());
        assert_eq!(grid[[0, 0]], 0.0);
    }
}
