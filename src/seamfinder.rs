// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam of an energy map.
//!
//! The cost table is built bottom-up: the last row is the energy map's
//! last row, and each row above is its own energy plus the cheapest of
//! the (up to) three cells beneath it.  Alongside each cost we record
//! which of those three cells was taken, so the seam can be walked
//! straight down from the cheapest cell of the top row.

use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::seam::Seam;
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;
use std::cmp::Ordering;

/// The cumulative cost of the cheapest path from this cell to the
/// bottom row, and the step (-1, 0 or +1 columns) that path takes into
/// the row below.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct CostAndDirection {
    pub cost: f64,
    pub direction: i8,
}

/// The solved cost-and-direction table for one energy map.
#[derive(Debug, Clone)]
pub struct CostTable(TwoDimensionalMap<CostAndDirection>);

// Left beats straight down only when strictly cheaper; right is then
// compared against whichever of those two won.  The order of these
// comparisons decides which pixels are removed on ties.
#[inline]
fn direction_of(below: &[CostAndDirection], x: usize) -> i8 {
    let last = below.len() - 1;
    let mut direction: i8 = 0;
    if x > 0 && below[x - 1].cost < below[x].cost {
        direction = -1;
    }
    if x < last && below[(x as isize + direction as isize) as usize].cost > below[x + 1].cost {
        direction = 1;
    }
    direction
}

/// Build the cost table for an energy map.  Fails only on an empty map.
pub fn solve_cost_table(energy: &EnergyMap) -> Result<CostTable, CarveError> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions { width, height });
    }

    let mut table: TwoDimensionalMap<CostAndDirection> = TwoDimensionalMap::new(width, height);
    for (cell, &e) in table.row_mut(height - 1).iter_mut().zip(energy.row(height - 1)) {
        cell.cost = e;
    }

    let last = width as usize - 1;
    for y in (0..height - 1).rev() {
        let (row, below) = table.row_and_below_mut(y);
        for (x, (cell, &e)) in row.iter_mut().zip(energy.row(y)).enumerate() {
            let cheapest = below[x.saturating_sub(1)]
                .cost
                .min(below[x].cost)
                .min(below[(x + 1).min(last)].cost);
            *cell = CostAndDirection {
                cost: e + cheapest,
                direction: direction_of(below, x),
            };
        }
    }
    Ok(CostTable(table))
}

impl CostTable {
    pub fn cost(&self, x: u32, y: u32) -> f64 {
        self.0[(x, y)].cost
    }

    pub fn direction(&self, x: u32, y: u32) -> i8 {
        self.0[(x, y)].direction
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    /// The column of the cheapest cell in the top row.  On ties the
    /// leftmost one wins.
    pub fn entry_column(&self) -> u32 {
        self.0
            .row(0)
            .iter()
            .position_min_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal))
            .unwrap_or(0) as u32
    }

    /// The total energy of the cheapest seam.
    pub fn seam_cost(&self) -> f64 {
        self.cost(self.entry_column(), 0)
    }

    /// Walk the directions down from the entry column, producing one
    /// x-coordinate per row.
    pub fn seam(&self) -> Seam {
        let height = self.0.height();
        let mut column = self.entry_column();
        let mut columns = Vec::with_capacity(height as usize);
        for y in 0..height {
            columns.push(column);
            column = (i64::from(column) + i64::from(self.direction(column, y))) as u32;
        }
        Seam::new(columns)
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn solve_min_seam(energy: &EnergyMap) -> Result<Seam, CarveError> {
    Ok(solve_cost_table(energy)?.seam())
}

/// This trait defines how we will get seams out of something.  It's a
/// primitive interface, just enough to make room for things other than
/// a bare energy map to hand out seams.
pub trait SeamFinder {
    /// Request the cheapest top-to-bottom seam.
    fn find_vertical_seam(&self) -> Result<Seam, CarveError>;
}

impl SeamFinder for EnergyMap {
    fn find_vertical_seam(&self) -> Result<Seam, CarveError> {
        solve_min_seam(self)
    }
}
