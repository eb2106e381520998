// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine: narrow an image by removing, one at a
//! time, the cheapest vertical seam.  Each pass needs the energy of
//! the image as it is *now*, so passes cannot overlap; the luminance
//! map is kept and narrowed alongside the image so that only the
//! energy has to be rebuilt each pass.

use crate::energy::{estimate_energy, grayscale, EnergyMap};
use crate::error::CarveError;
use crate::seamfinder::SeamFinder;
use crate::seamremover::RemoveSeam;
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};
use log::{debug, trace};

/// The narrowed image, and the energy map of that narrowed image.
#[derive(Debug, Clone)]
pub struct Carved {
    pub image: RgbImage,
    pub energy: EnergyMap,
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    image: &'a I,
}

impl<'a, I, P> SeamCarver<'a, I, P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Remove `seam_count` columns from the image.
    pub fn carve(&self, seam_count: u32) -> Result<Carved, CarveError> {
        self.carve_with_progress(seam_count, |_, _| {})
    }

    /// Remove `seam_count` columns from the image, calling
    /// `progress(completed, total)` after each seam is gone.  Between
    /// those calls is the only point where a caller could sensibly
    /// give up on the carve.
    ///
    /// Fails without doing any work if the image is empty, is neither
    /// RGB nor RGBA, or is not wider than `seam_count`.  An alpha
    /// channel is dropped; the result is always RGB.
    pub fn carve_with_progress<F>(
        &self,
        seam_count: u32,
        mut progress: F,
    ) -> Result<Carved, CarveError>
    where
        F: FnMut(u32, u32),
    {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidDimensions { width, height });
        }
        let channels = P::CHANNEL_COUNT;
        if channels != 3 && channels != 4 {
            return Err(CarveError::UnsupportedChannelCount(channels));
        }
        if seam_count >= width {
            return Err(CarveError::SeamCountTooLarge { seam_count, width });
        }

        let mut image: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
            let p = self.image.get_pixel(x, y);
            let c = p.channels();
            Rgb([c[0], c[1], c[2]])
        });
        let mut gray = grayscale(&image);

        for completed in 1..=seam_count {
            let seam = estimate_energy(&gray).find_vertical_seam()?;
            image.remove_seam(&seam)?;
            gray.remove_seam(&seam)?;
            debug!(
                "seam {}/{}: entered at column {}, width now {}",
                completed,
                seam_count,
                seam[0],
                image.width()
            );
            trace!("seam {}: {:?}", completed, &*seam);
            progress(completed, seam_count);
        }

        let energy = estimate_energy(&gray);
        Ok(Carved { image, energy })
    }
}

/// A convenience wrapper: carve `seam_count` columns out of an image.
pub fn carve<I, P>(image: &I, seam_count: u32) -> Result<Carved, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    SeamCarver::new(image).carve(seam_count)
}
