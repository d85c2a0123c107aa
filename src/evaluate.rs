// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Runs Newton's method from a single starting point until it either
//! lands within `ERROR_MARGIN` of a root, or reaches a value from which
//! it cannot recover: too close to the origin, where the update step
//! divides by zero, or so far out that it is running off to infinity.

use num::Complex;

use crate::polynomial::Polynomial;

/// How close a point must be to a root to count as converged, and how
/// close to the origin it may get before it counts as diverged.
pub const ERROR_MARGIN: f64 = 0.001;

/// Either part of a point exceeding this means it has diverged.
pub const OUT_OF_BOUNDS: f64 = 10_000_000_000.0;

/// Reported iteration counts are clamped to this.
pub const MAX_ITERATIONS: u8 = 50;

/// The outcome of iterating one sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Convergence {
    /// Which root the sample converged to, in the polynomial's root
    /// order, or `None` if it diverged.
    pub root: Option<u8>,
    /// How many steps it took, clamped to `MAX_ITERATIONS`.
    pub iterations: u8,
}

impl Convergence {
    /// The palette slot for this result: zero for divergence, `root + 1`
    /// otherwise.
    pub fn palette_index(&self) -> usize {
        self.root.map_or(0, |r| usize::from(r) + 1)
    }
}

/// True when `x` has nowhere useful left to go.
#[inline]
pub fn illegal_value(x: Complex<f64>) -> bool {
    x.norm() < ERROR_MARGIN || x.re.abs() > OUT_OF_BOUNDS || x.im.abs() > OUT_OF_BOUNDS
}

/// The first root, in order, within `ERROR_MARGIN` of `x`.
#[inline]
pub fn nearby_root(roots: &[Complex<f64>], x: Complex<f64>) -> Option<u8> {
    roots
        .iter()
        .position(|root| (x - root).norm() < ERROR_MARGIN)
        .map(|i| i as u8)
}

/// Iterates Newton's method from `start`.  There is no cap on the
/// number of steps taken; only the reported count is clamped.  A start
/// that neither converges nor diverges will never return.
pub fn newton(polynomial: &Polynomial, start: Complex<f64>) -> Convergence {
    let mut x = start;
    let mut steps: usize = 0;
    let root = loop {
        if illegal_value(x) {
            break None;
        }
        if let Some(root) = nearby_root(polynomial.roots(), x) {
            break Some(root);
        }
        x = polynomial.next(x);
        steps += 1;
    };
    Convergence {
        root,
        iterations: steps.min(usize::from(MAX_ITERATIONS)) as u8,
    }
}
