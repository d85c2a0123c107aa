// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-interleaved partitioning of a square grid.  Worker `k` of `W`
//! owns rows `k, k + W, k + 2W, ...`, so the expensive rows near basin
//! boundaries are dealt out round-robin instead of landing in one
//! worker's contiguous block.

use std::iter::StepBy;
use std::ops::Range;

use crate::error::FractalError;

/// Deals the rows of a `size` × `size` grid out to `workers` workers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowPartition {
    size: usize,
    workers: usize,
}

impl RowPartition {
    /// A partition over `workers` workers.  An empty grid is fine, but
    /// there must be someone to deal to.
    pub fn new(size: usize, workers: usize) -> Result<RowPartition, FractalError> {
        if workers == 0 {
            return Err(FractalError::InvalidWorkers);
        }
        Ok(RowPartition { size, workers })
    }

    /// The number of workers rows are dealt to.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The rows worker `k` owns, in ascending order.  Empty when there
    /// are more workers than rows and `k` is one of the extras.
    pub fn rows_for(&self, worker: usize) -> StepBy<Range<usize>> {
        (worker..self.size).step_by(self.workers)
    }

    /// The worker that owns `row`.
    pub fn owner(&self, row: usize) -> usize {
        row % self.workers
    }
}
