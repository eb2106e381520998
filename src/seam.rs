// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam: one column index per row, top to bottom.

use crate::error::CarveError;
use std::convert::TryFrom;
use std::ops::Deref;

/// A list of x-coordinates that, when mapped with the range
/// (0..height), give the XY coordinates for each pixel in the seam to
/// be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn new(columns: Vec<u32>) -> Self {
        Seam(columns)
    }

    /// Confirm that this seam can be cut out of a `width` x `height`
    /// buffer: one entry per row, every entry inside its row.
    pub fn check(&self, width: u32, height: u32) -> Result<(), CarveError> {
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidDimensions { width, height });
        }
        if self.0.len() != height as usize {
            return Err(CarveError::SeamLengthMismatch {
                expected: height,
                actual: u32::try_from(self.0.len()).unwrap_or(u32::MAX),
            });
        }
        match self.0.iter().position(|&column| column >= width) {
            Some(row) => Err(CarveError::SeamIndexOutOfRange {
                row: row as u32,
                column: self.0[row],
                width,
            }),
            None => Ok(()),
        }
    }

    /// True if every step between consecutive rows moves at most one
    /// column sideways.
    pub fn is_connected(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for Seam {
    fn from(columns: Vec<u32>) -> Self {
        Seam(columns)
    }
}

impl Deref for Seam {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}
