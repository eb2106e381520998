// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! What can go wrong while carving.
//!
//! The engine does no I/O, so every one of these is detected up front
//! (bad input) or is an internal consistency check on a seam.  None of
//! them are worth retrying.

use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum CarveError {
    /// The image, or one of the maps derived from it, has no pixels.
    #[fail(display = "invalid image dimensions {}x{}", width, height)]
    InvalidDimensions { width: u32, height: u32 },

    /// Carving every column away is not a narrower image.
    #[fail(
        display = "cannot remove {} seams from an image {} pixels wide",
        seam_count, width
    )]
    SeamCountTooLarge { seam_count: u32, width: u32 },

    /// A seam must name exactly one column for every row.
    #[fail(
        display = "seam has {} entries but the image is {} rows tall",
        actual, expected
    )]
    SeamLengthMismatch { expected: u32, actual: u32 },

    #[fail(
        display = "seam column {} in row {} is outside an image {} pixels wide",
        column, row, width
    )]
    SeamIndexOutOfRange { row: u32, column: u32, width: u32 },

    /// Only RGB and RGBA input is carved; alpha is dropped.
    #[fail(display = "cannot carve pixels with {} channels, expected 3 or 4", _0)]
    UnsupportedChannelCount(u8),
}
