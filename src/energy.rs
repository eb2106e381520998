// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an RGB image, calculate its luminance once, and from the
//! luminance an energy map: the sum of the absolute responses of two
//! normalized Sobel kernels,
//!
//! ```text
//!    vertical            horizontal
//!   -1/8 -1/4 -1/8      -1/8  0  1/8
//!     0    0    0       -1/4  0  1/4
//!    1/8  1/4  1/8      -1/8  0  1/8
//! ```
//!
//! Neighbours that fall outside the buffer are replaced by the edge
//! pixel itself.  For a 3x3 kernel that is the same as mirroring the
//! buffer about its edge.

use crate::twodmap::TwoDimensionalMap;
use image::RgbImage;

/// Luminance, one `f64` per pixel.
pub type GrayMap = TwoDimensionalMap<f64>;

/// Gradient magnitude, one non-negative `f64` per pixel.
pub type EnergyMap = TwoDimensionalMap<f64>;

const RED_WEIGHT: f64 = 0.2125;
const GREEN_WEIGHT: f64 = 0.7154;
const BLUE_WEIGHT: f64 = 0.0721;

/// Convert an RGB image to its luminance map.  The carver does this
/// exactly once per carve and then narrows the result alongside the
/// image, rather than rebuilding it each pass.
pub fn grayscale(image: &RgbImage) -> GrayMap {
    TwoDimensionalMap::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y);
        RED_WEIGHT * f64::from(p[0])
            + GREEN_WEIGHT * f64::from(p[1])
            + BLUE_WEIGHT * f64::from(p[2])
    })
}

// One side of either kernel: 1/8, 1/4, 1/8.  The outer pair is summed
// first, so swapping `a` and `c` gives the same bits: a neighbourhood and
// its mirror image (or its transpose) get identical energies, and equal
// neighbourhoods cancel to exactly zero.  Neighbourhoods that are equal
// only in exact arithmetic can still differ in the last bit.
#[inline]
fn tap(a: f64, b: f64, c: f64) -> f64 {
    0.125 * (a + c) + 0.25 * b
}

// Fill one output row of the energy map.  This is the only place the
// kernels live; the sequential and threaded versions both call it.
fn energy_row(gray: &GrayMap, y: u32, out: &mut [f64]) {
    let (width, height) = gray.dimensions();
    let up = gray.row(y.saturating_sub(1));
    let mid = gray.row(y);
    let down = gray.row((y + 1).min(height - 1));
    let last = width as usize - 1;

    for (x, e) in out.iter_mut().enumerate() {
        let (l, r) = (x.saturating_sub(1), (x + 1).min(last));
        let vertical = tap(down[l], down[x], down[r]) - tap(up[l], up[x], up[r]);
        let horizontal = tap(up[r], mid[r], down[r]) - tap(up[l], mid[l], down[l]);
        *e = vertical.abs() + horizontal.abs();
    }
}

/// Compute the energy of every pixel in a luminance map.  The result
/// has the same dimensions as the input.  An empty map gives an empty
/// energy map.
#[cfg(not(feature = "threaded"))]
pub fn estimate_energy(gray: &GrayMap) -> EnergyMap {
    let (width, height) = gray.dimensions();
    let mut energy = EnergyMap::new(width, height);
    if width == 0 || height == 0 {
        return energy;
    }
    for y in 0..height {
        energy_row(gray, y, energy.row_mut(y));
    }
    energy
}

/// Compute the energy of every pixel in a luminance map.  The result
/// has the same dimensions as the input.  An empty map gives an empty
/// energy map.
///
/// The rows are divvied up into one band per CPU and each band is
/// filled on its own scoped thread.  Every row only reads the
/// luminance map, so the result is identical to the sequential pass.
#[cfg(feature = "threaded")]
pub fn estimate_energy(gray: &GrayMap) -> EnergyMap {
    let (width, height) = gray.dimensions();
    let mut energy = EnergyMap::new(width, height);
    if width == 0 || height == 0 {
        return energy;
    }

    let jobs = num_cpus::get().max(1);
    let rows_per_band = (height as usize + jobs - 1) / jobs;
    let row_len = width as usize;

    let outcome = crossbeam::scope(|scope| {
        for (band, rows) in energy
            .as_mut_slice()
            .chunks_mut(rows_per_band * row_len)
            .enumerate()
        {
            scope.spawn(move |_| {
                for (offset, out) in rows.chunks_mut(row_len).enumerate() {
                    energy_row(gray, (band * rows_per_band + offset) as u32, out);
                }
            });
        }
    });
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    // A 5x4 luminance field; the expected energies were worked out by
    // hand from the kernels above.
    const GRAY_DATA: [f64; 20] = [
        0.0, 0.0, 8.0, 8.0, 8.0, //
        0.0, 0.0, 8.0, 8.0, 8.0, //
        0.0, 0.0, 8.0, 8.0, 8.0, //
        0.0, 0.0, 0.0, 0.0, 0.0,
    ];
    const GRAY_ENERGY: [f64; 20] = [
        0.0, 4.0, 4.0, 0.0, 0.0, //
        0.0, 4.0, 4.0, 0.0, 0.0, //
        0.0, 4.0, 6.0, 4.0, 4.0, //
        0.0, 2.0, 4.0, 4.0, 4.0,
    ];

    #[test]
    fn energy_generator_works() {
        let gray = GrayMap::from_vec(5, 4, GRAY_DATA.to_vec()).unwrap();
        let energy = estimate_energy(&gray);
        assert_eq!(energy.dimensions(), (5, 4));
        assert_eq!(energy.as_slice(), &GRAY_ENERGY[..]);
    }

    #[test]
    fn single_row_uses_only_horizontal_gradient() {
        let gray = GrayMap::from_vec(3, 1, vec![0.0, 8.0, 16.0]).unwrap();
        assert_eq!(estimate_energy(&gray).into_vec(), vec![4.0, 8.0, 4.0]);
    }

    #[test]
    fn single_pixel_has_no_energy() {
        let gray = GrayMap::from_vec(1, 1, vec![200.0]).unwrap();
        assert_eq!(estimate_energy(&gray).into_vec(), vec![0.0]);
    }

    #[test]
    fn empty_map_has_empty_energy() {
        let gray = GrayMap::new(0, 3);
        assert!(estimate_energy(&gray).as_slice().is_empty());
    }

    #[test]
    fn uniform_image_has_zero_energy() {
        let image = RgbImage::from_pixel(7, 5, Rgb([37, 141, 222]));
        let energy = estimate_energy(&grayscale(&image));
        assert!(energy.as_slice().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn energy_is_never_negative() {
        let image = RgbImage::from_fn(9, 6, |x, y| {
            Rgb([(x * 31 % 256) as u8, (y * 47 % 256) as u8, ((x * y) % 256) as u8])
        });
        let energy = estimate_energy(&grayscale(&image));
        assert!(energy.as_slice().iter().all(|&e| e >= 0.0 && e.is_finite()));
    }

    fn mottled(width: u32, height: u32) -> GrayMap {
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 83 + y * 29) % 256) as u8,
                ((x * x * 7 + y * 131) % 256) as u8,
                ((x * y * 13 + 101) % 256) as u8,
            ])
        });
        grayscale(&image)
    }

    #[test]
    fn mirrored_map_has_mirrored_energy() {
        let gray = mottled(7, 5);
        let (width, height) = gray.dimensions();
        let flipped = GrayMap::from_fn(width, height, |x, y| gray[(width - 1 - x, y)]);
        let energy = estimate_energy(&gray);
        let flipped_energy = estimate_energy(&flipped);
        for (x, y) in itertools::iproduct!(0..width, 0..height) {
            assert_eq!(flipped_energy[(width - 1 - x, y)], energy[(x, y)]);
        }

        let upended = GrayMap::from_fn(width, height, |x, y| gray[(x, height - 1 - y)]);
        let upended_energy = estimate_energy(&upended);
        for (x, y) in itertools::iproduct!(0..width, 0..height) {
            assert_eq!(upended_energy[(x, height - 1 - y)], energy[(x, y)]);
        }
    }

    #[test]
    fn transposed_map_has_transposed_energy() {
        let gray = mottled(6, 4);
        let (width, height) = gray.dimensions();
        let transposed = GrayMap::from_fn(height, width, |x, y| gray[(y, x)]);
        let energy = estimate_energy(&gray);
        let transposed_energy = estimate_energy(&transposed);
        for (x, y) in itertools::iproduct!(0..width, 0..height) {
            assert_eq!(transposed_energy[(y, x)], energy[(x, y)]);
        }
    }

    #[test]
    fn two_by_two_mirror_tie_is_exact() {
        let image = RgbImage::from_vec(
            2,
            2,
            vec![60, 60, 60, 0, 0, 0, 0, 60, 0, 60, 0, 60],
        )
        .unwrap();
        let energy = estimate_energy(&grayscale(&image));
        assert_eq!(energy[(0, 0)], energy[(1, 0)]);
        assert_eq!(energy[(0, 1)], energy[(1, 1)]);
    }

    #[test]
    fn grayscale_weights_channels() {
        let image = RgbImage::from_vec(3, 1, vec![100, 0, 0, 0, 100, 0, 0, 0, 100]).unwrap();
        let gray = grayscale(&image);
        for (got, want) in gray.row(0).iter().zip(&[21.25, 71.54, 7.21]) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
    }
}
