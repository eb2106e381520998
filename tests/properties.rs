// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Property tests: invariants of the energy map, the seam solver and
//! the carver that should hold for any input.

use image::{Rgb, RgbImage};
use proptest::prelude::*;
use seamshrink::{carve, estimate_energy, grayscale, solve_min_seam, EnergyMap, RemoveSeam};

/// Small energy maps, values as a real energy map would have them.
fn energy_map() -> impl Strategy<Value = EnergyMap> {
    (1u32..=16, 1u32..=16).prop_flat_map(|(width, height)| {
        prop::collection::vec(0.0f64..1000.0, (width * height) as usize)
            .prop_map(move |data| EnergyMap::from_vec(width, height, data).unwrap())
    })
}

/// Small RGB images with arbitrary pixels.
fn rgb_image() -> impl Strategy<Value = RgbImage> {
    (2u32..=12, 1u32..=10).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<u8>(), (width * height * 3) as usize)
            .prop_map(move |data| RgbImage::from_raw(width, height, data).unwrap())
    })
}

proptest! {
    /// Property: a seam has one in-range, connected entry per row
    #[test]
    fn seams_are_connected_and_in_range(energy in energy_map()) {
        let (width, height) = energy.dimensions();
        let seam = solve_min_seam(&energy).unwrap();
        prop_assert_eq!(seam.len(), height as usize);
        prop_assert!(seam.iter().all(|&x| x < width));
        prop_assert!(seam.is_connected());
    }

    /// Property: the solver's seam costs no more than any straight column
    #[test]
    fn seam_is_no_worse_than_a_straight_column(energy in energy_map()) {
        let (width, height) = energy.dimensions();
        let seam = solve_min_seam(&energy).unwrap();
        let seam_cost: f64 = seam.iter().enumerate().map(|(y, &x)| energy[(x, y as u32)]).sum();
        for x in 0..width {
            let column: f64 = (0..height).map(|y| energy[(x, y)]).sum();
            prop_assert!(seam_cost <= column + 1e-6);
        }
    }

    /// Property: energy is non-negative and shaped like its input
    #[test]
    fn energy_is_non_negative(image in rgb_image()) {
        let energy = estimate_energy(&grayscale(&image));
        prop_assert_eq!(energy.dimensions(), image.dimensions());
        prop_assert!(energy.as_slice().iter().all(|&e| e >= 0.0));
    }

    /// Property: carving n seams leaves width - n columns, same height
    #[test]
    fn carving_narrows_by_seam_count(image in rgb_image(), fraction in 0.0f64..1.0) {
        let (width, height) = image.dimensions();
        let n = ((width - 1) as f64 * fraction) as u32;
        let carved = carve(&image, n).unwrap();
        prop_assert_eq!(carved.image.dimensions(), (width - n, height));
        prop_assert_eq!(carved.energy.dimensions(), (width - n, height));
    }

    /// Property: asking for the whole width is refused
    #[test]
    fn carving_everything_fails(image in rgb_image(), extra in 0u32..5) {
        prop_assert!(carve(&image, image.width() + extra).is_err());
    }

    /// Property: every carved pixel comes from the same row of the original
    #[test]
    fn carved_rows_are_subsequences_of_original_rows(image in rgb_image()) {
        let carved = carve(&image, 1).unwrap();
        for (carved_row, mut original_row) in carved.image.rows().zip(image.rows()) {
            for pixel in carved_row {
                prop_assert!(original_row.any(|candidate| candidate == pixel));
            }
        }
    }

    /// Property: image and luminance stay in lockstep under removal
    #[test]
    fn lockstep_removal_matches_fresh_grayscale(image in rgb_image()) {
        let mut narrowed = image.clone();
        let mut gray = grayscale(&image);
        let seam = solve_min_seam(&estimate_energy(&gray)).unwrap();
        narrowed.remove_seam(&seam).unwrap();
        gray.remove_seam(&seam).unwrap();
        prop_assert_eq!(gray, grayscale(&narrowed));
    }

    /// Property: uniform images carve to uniform images with no energy
    #[test]
    fn uniform_images_stay_uniform(
        (width, height) in (2u32..=12, 1u32..=10),
        (r, g, b) in (any::<u8>(), any::<u8>(), any::<u8>())
    ) {
        let image = RgbImage::from_pixel(width, height, Rgb([r, g, b]));
        let carved = carve(&image, width / 2).unwrap();
        prop_assert!(carved.image.pixels().all(|p| *p == Rgb([r, g, b])));
        prop_assert!(carved.energy.as_slice().iter().all(|&e| e == 0.0));
    }
}
