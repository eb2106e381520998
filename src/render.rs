// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of what the carver did.
//!
//! Nothing in here is needed to carve; these are for a caller that
//! wants to look at the energy map or at what changed.

use crate::energy::EnergyMap;
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use itertools::{Itertools, MinMaxResult};
use num_traits::NumCast;

/// Stretch an energy map onto 0..=255.  A map with no spread (a
/// uniform image, say) comes out black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (low, high) = match energy.as_slice().iter().minmax() {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(&e) => (e, e),
        MinMaxResult::MinMax(&low, &high) => (low, high),
    };
    let spread = high - low;

    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let scaled = if spread > 0.0 {
            (energy[(x, y)] - low) * 255.0 / spread
        } else {
            0.0
        };
        Luma([<u8 as NumCast>::from(scaled).unwrap_or(u8::MAX)])
    })
}

/// The per-channel absolute difference between the carved image and
/// the original squeezed (bicubically) to the same size.
pub fn difference_image(original: &RgbImage, carved: &RgbImage) -> RgbImage {
    let (width, height) = carved.dimensions();
    let squeezed = imageops::resize(original, width, height, FilterType::CatmullRom);

    ImageBuffer::from_fn(width, height, |x, y| {
        let (a, b) = (squeezed.get_pixel(x, y), carved.get_pixel(x, y));
        Rgb([
            a[0].max(b[0]) - a[0].min(b[0]),
            a[1].max(b[1]) - a[1].min(b[1]),
            a[2].max(b[2]) - a[2].min(b[2]),
        ])
    })
}
