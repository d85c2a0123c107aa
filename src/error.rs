// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by every stage of a render.  Numeric
//! divergence is not an error; it is reported inside the result grid.

use std::io;

use failure::Fail;

/// Everything that can stop a render from producing output.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// Only `x^n - 1` for n in 1 through 9 is supported.
    #[fail(display = "Polynomial degree must be between 1 and 9, got {}", _0)]
    InvalidDegree(u32),

    /// The grid must have at least one row.
    #[fail(display = "Grid size must be greater than zero")]
    InvalidSize,

    /// The grid is too large to allocate, or to describe in an image
    /// header.
    #[fail(display = "Grid size {} is too large", _0)]
    SizeTooLarge(usize),

    /// At least one worker is needed to do anything.
    #[fail(display = "Worker count must be greater than zero")]
    InvalidWorkers,

    /// The complex plane's bounds are empty or inverted.
    #[fail(display = "The plane minimum {} is not less than the maximum {}", _0, _1)]
    InvalidPlane(f64, f64),

    /// The operating system refused to start a worker thread.
    #[fail(display = "Could not spawn worker {}: {}", _0, _1)]
    Spawn(usize, #[cause] io::Error),

    /// A worker died before finishing its rows.
    #[fail(display = "A worker thread panicked during the render")]
    WorkerPanicked,

    /// Writing one of the output images failed.
    #[fail(display = "Could not write {}: {}", _0, _1)]
    Io(String, #[cause] io::Error),
}
