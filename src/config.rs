// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The validated settings for one render.

use crate::error::FractalError;
use crate::polynomial::{MAX_DEGREE, MIN_DEGREE};

/// True when a `size` × `size` grid can be allocated and written out:
/// its cell count must not overflow, and its side must fit the 32-bit
/// dimensions of an image header.
pub fn size_fits(size: usize) -> bool {
    size <= u32::max_value() as usize && size.checked_mul(size).is_some()
}

/// What to render, and with how many workers.  Construct it through
/// `Config::new`, which refuses anything the renderer cannot use.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    degree: u32,
    size: usize,
    workers: usize,
}

impl Config {
    /// Checks the settings and bundles them up.
    pub fn new(degree: u32, size: usize, workers: usize) -> Result<Config, FractalError> {
        if degree < MIN_DEGREE || degree > MAX_DEGREE {
            return Err(FractalError::InvalidDegree(degree));
        }
        if size == 0 {
            return Err(FractalError::InvalidSize);
        }
        if !size_fits(size) {
            return Err(FractalError::SizeTooLarge(size));
        }
        if workers == 0 {
            return Err(FractalError::InvalidWorkers);
        }
        Ok(Config {
            degree,
            size,
            workers,
        })
    }

    /// The degree `n` of `x^n - 1`.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The side length of the grid, in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of worker threads.
    pub fn workers(&self) -> usize {
        self.workers
    }
}
