#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! Newton's method finds a root of a polynomial by starting somewhere
//! and repeatedly sliding down the tangent line.  Which root it ends
//! up at depends, sometimes wildly, on where it started.  Color every
//! point of a region of the complex plane by the root it leads to, and
//! the boundaries between those "basins of attraction" turn out to be
//! fractals.
//!
//! This crate renders those basins for `x^n - 1`, n from 1 to 9, on a
//! square grid over -2..2 on both axes.  The grid's rows are dealt out
//! round-robin to a fixed pool of threads, each of which owns its rows
//! outright, so no locking is needed.  The result is a grid recording,
//! for each pixel, which root it converged to (if any) and how many
//! steps it took, which can then be written out as a pair of images.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;

pub mod config;
pub mod error;
pub mod evaluate;
pub mod grid;
pub mod partition;
pub mod planes;
pub mod polynomial;
pub mod pool;
pub mod ppm;

pub use config::Config;
pub use error::FractalError;
pub use evaluate::Convergence;
pub use grid::ResultGrid;
pub use polynomial::Polynomial;
pub use pool::WorkerPool;

use log::info;

use planes::PlaneMapper;

/// Renders the full grid described by `config` over the default
/// square of the complex plane.
pub fn render(config: &Config) -> Result<ResultGrid, FractalError> {
    info!(
        "degree {}, {}x{} pixels, {} workers",
        config.degree(),
        config.size(),
        config.size(),
        config.workers()
    );
    let polynomial = Polynomial::new(config.degree())?;
    let plane = PlaneMapper::square(config.size())?;
    WorkerPool::new(config.workers())?.render(&polynomial, &plane)
}
