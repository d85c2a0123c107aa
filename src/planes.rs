// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square grid of pixels on the integral plane with an
//! origin at 0,0, and a square on the complex plane whose real and
//! imaginary parts both run from the same minimum to the same maximum.
use num::Complex;

use crate::config::size_fits;
use crate::error::FractalError;

/// The default lower bound of both axes of the complex plane.
pub const X_MIN: f64 = -2.0;

/// The default upper bound of both axes of the complex plane.
pub const X_MAX: f64 = 2.0;

/// Describes the column, row of a pixel in the grid.  Column first,
/// because it fits with our x,y schema.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: a square integral
/// cartesian plane, and a square region of the complex plane.  Maps
/// pixels in the first to points in the second.
#[derive(Clone, Debug)]
pub struct PlaneMapper {
    /// The number of pixels along each side of the integral plane.
    pub size: usize,
    /// The lower bound of both the real and imaginary axes.
    pub min: f64,
    /// The upper bound of both the real and imaginary axes.
    pub max: f64,
    // The width, in the complex plane, of a single pixel.
    step: f64,
}

impl PlaneMapper {
    /// Constructor.  Takes the side length of the pixel grid, and the
    /// bounds shared by both axes of the complex plane.
    pub fn new(size: usize, min: f64, max: f64) -> Result<PlaneMapper, FractalError> {
        if size == 0 {
            return Err(FractalError::InvalidSize);
        }
        if !size_fits(size) {
            return Err(FractalError::SizeTooLarge(size));
        }
        // Written this way round so that NaN bounds are refused too.
        if !(min < max) {
            return Err(FractalError::InvalidPlane(min, max));
        }
        Ok(PlaneMapper {
            size,
            min,
            max,
            step: (max - min) / (size as f64),
        })
    }

    /// The usual square, -2 to 2 on both axes.
    pub fn square(size: usize) -> Result<PlaneMapper, FractalError> {
        PlaneMapper::new(size, X_MIN, X_MAX)
    }

    /// The distance between neighbouring pixels on the complex plane.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// on the complex plane it samples.  Computed from the indices
    /// alone, so a pixel's point never depends on who asks for it.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.min + (pixel.0 as f64) * self.step,
            self.min + (pixel.1 as f64) * self.step,
        )
    }
}
