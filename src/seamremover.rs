// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a seam out of a buffer.
//!
//! Every buffer the carver keeps is row-major, so removing one cell per
//! row is a compaction: within each row, everything left of the seam
//! stays put and everything right of it moves one cell left, and the
//! whole storage slides up to close the gap left by earlier rows.  It
//! happens in place, followed by a single truncate.

use crate::error::CarveError;
use crate::seam::Seam;
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel};

/// Anything with one row per seam entry that can lose one column.
pub trait RemoveSeam {
    /// Remove the seam, leaving the buffer exactly one column narrower.
    /// The seam is checked before anything moves, so on error the
    /// buffer is untouched.
    fn remove_seam(&mut self, seam: &Seam) -> Result<(), CarveError>;
}

// `cell` is the number of storage slots per pixel: the channel count
// for an image, 1 for a map.
fn compact_rows<T: Copy>(data: &mut Vec<T>, width: u32, cell: usize, seam: &Seam) {
    let row_len = width as usize * cell;
    let mut write = 0;
    for (y, &column) in seam.iter().enumerate() {
        let start = y * row_len;
        let cut = start + column as usize * cell;
        let end = start + row_len;
        data.copy_within(start..cut, write);
        write += cut - start;
        data.copy_within(cut + cell..end, write);
        write += end - cut - cell;
    }
    data.truncate(write);
}

impl<P> RemoveSeam for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
{
    fn remove_seam(&mut self, seam: &Seam) -> Result<(), CarveError> {
        let (width, height) = self.dimensions();
        seam.check(width, height)?;

        let mut samples = std::mem::replace(self, ImageBuffer::new(0, 0)).into_raw();
        compact_rows(&mut samples, width, usize::from(P::CHANNEL_COUNT), seam);
        // A checked seam drops exactly one pixel per row, so the samples
        // are (width - 1) * height * channels long.
        *self = ImageBuffer::from_raw(width - 1, height, samples)
            .expect("compacted buffer is one column narrower");
        Ok(())
    }
}

impl<T: Default + Copy> RemoveSeam for TwoDimensionalMap<T> {
    fn remove_seam(&mut self, seam: &Seam) -> Result<(), CarveError> {
        let (width, height) = self.dimensions();
        seam.check(width, height)?;

        compact_rows(&mut self.data, width, 1, seam);
        self.width = width - 1;
        Ok(())
    }
}
