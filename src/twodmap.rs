// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense, row-major, two-dimensional arena.
//!
//! Every intermediate product of the carver (the grayscale buffer, the
//! energy map, the cost-and-direction table) is one of these.  Rows are
//! contiguous, so a row can be handed out as a slice and a band of rows
//! can be split off with `chunks_mut` for the threaded energy pass.

use std::ops::{Index, IndexMut};

/// Defines the basic map: an addressable two-dimensional field
/// containing an object that represents one of several possible
/// objects during processing: an `f64` for the grayscale and energy
/// maps, or a cost + direction pair for the seam solver.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map by calling `f(x, y)` for every address, row by row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector is not exactly `width * height` long.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the value at a single address.
    pub fn get_pt(&self, x: u32, y: u32) -> P {
        self.data[self.get_index(x, y)]
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// One full row, mutable.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// Row `y` mutable, together with the row below it read-only.  The
    /// solver fills one row from the next, and this is the borrow that
    /// lets it do so without copying.
    pub(crate) fn row_and_below_mut(&mut self, y: u32) -> (&mut [P], &[P]) {
        let width = self.width as usize;
        let split = self.get_index(0, y + 1);
        let (upper, lower) = self.data.split_at_mut(split);
        (&mut upper[split - width..], &lower[..width])
    }

    /// The whole field as a row-major slice.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    #[cfg(feature = "threaded")]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<P> {
        self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
