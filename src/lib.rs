// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image narrowing by seam carving.
//!
//! ```no_run
//! let image = image::open("tower.png").unwrap().to_rgb8();
//! let carved = seamshrink::carve(&image, 40).unwrap();
//! carved.image.save("tower-narrow.png").unwrap();
//! ```

pub mod error;
pub use error::CarveError;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod seam;
pub use seam::Seam;

pub mod energy;
pub use energy::{estimate_energy, grayscale, EnergyMap, GrayMap};

pub mod seamfinder;
pub use seamfinder::{solve_cost_table, solve_min_seam, CostTable, SeamFinder};

pub mod seamremover;
pub use seamremover::RemoveSeam;

pub mod seamcarver;
pub use seamcarver::{carve, Carved, SeamCarver};

pub mod render;
pub use render::{difference_image, energy_to_image};
