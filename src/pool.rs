// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The worker pool.  Each render spawns a fixed number of scoped
//! threads, deals each one its rows of the result grid, and waits for
//! all of them before handing the grid back.  Nothing is shared between
//! the workers but read-only references to the polynomial and the
//! plane, so there is nothing to lock.

use log::{debug, info};

use crate::error::FractalError;
use crate::evaluate::{newton, Convergence};
use crate::grid::{ResultGrid, RowSlot};
use crate::partition::RowPartition;
use crate::planes::{Pixel, PlaneMapper};
use crate::polynomial::Polynomial;

/// Fills in every row a worker owns.  Each row is computed into a
/// private buffer, then copied into the grid in one go.
fn fill_rows(worker: usize, rows: Vec<RowSlot<'_>>, polynomial: &Polynomial, plane: &PlaneMapper) {
    debug!("worker {} starting on {} rows", worker, rows.len());
    let mut buffer = vec![Convergence::default(); plane.size];
    for (row, slot) in rows {
        for (col, cell) in buffer.iter_mut().enumerate() {
            *cell = newton(polynomial, plane.pixel_to_point(&Pixel(col, row)));
        }
        slot.copy_from_slice(&buffer);
    }
    debug!("worker {} finished", worker);
}

/// A fixed number of workers, spawned afresh for every render.
#[derive(Copy, Clone, Debug)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// A pool of `workers` threads.  Zero is refused.
    pub fn new(workers: usize) -> Result<WorkerPool, FractalError> {
        if workers == 0 {
            return Err(FractalError::InvalidWorkers);
        }
        Ok(WorkerPool { workers })
    }

    /// The number of threads each render spawns.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Evaluates every pixel of `plane` against `polynomial`.  Returns
    /// only once every worker has finished; if any worker could not be
    /// started, or died, no grid is returned at all.
    pub fn render(
        &self,
        polynomial: &Polynomial,
        plane: &PlaneMapper,
    ) -> Result<ResultGrid, FractalError> {
        self.render_with(polynomial, plane, fill_rows)
    }

    /// `render`, with the per-worker row filler supplied by the caller.
    pub(crate) fn render_with<F>(
        &self,
        polynomial: &Polynomial,
        plane: &PlaneMapper,
        fill: F,
    ) -> Result<ResultGrid, FractalError>
    where
        F: Fn(usize, Vec<RowSlot<'_>>, &Polynomial, &PlaneMapper) + Sync,
    {
        let partition = RowPartition::new(plane.size, self.workers)?;
        let mut grid = ResultGrid::new(plane.size)?;
        let slots = grid.deal_rows(&partition);
        let fill = &fill;

        let spawned = crossbeam::scope(|spawner| -> Result<(), FractalError> {
            for (worker, rows) in slots.into_iter().enumerate() {
                spawner
                    .builder()
                    .name(format!("newton-{}", worker))
                    .spawn(move |_| fill(worker, rows, polynomial, plane))
                    .map_err(|e| FractalError::Spawn(worker, e))?;
            }
            Ok(())
        });

        match spawned {
            Ok(result) => result?,
            Err(_) => return Err(FractalError::WorkerPanicked),
        }

        info!(
            "rendered {}x{} with {} workers, {} points diverged",
            plane.size,
            plane.size,
            self.workers,
            grid.cells().filter(|c| c.root.is_none()).count()
        );
        Ok(grid)
    }
}
