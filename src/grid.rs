// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The square grid of results a render fills in.  It is sized once,
//! before any worker starts, and is only ever handed out for writing as
//! whole rows, each row to exactly one worker.

use itertools::iproduct;

use crate::config::size_fits;
use crate::error::FractalError;
use crate::evaluate::Convergence;
use crate::partition::RowPartition;

/// A row a worker owns for the duration of a render: its index in the
/// grid, and the grid's storage for it.
pub type RowSlot<'a> = (usize, &'a mut [Convergence]);

/// An N × N grid of results, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultGrid {
    size: usize,
    cells: Vec<Convergence>,
}

impl ResultGrid {
    /// A `size` × `size` grid with every cell at its default.  Sizes
    /// whose cell count would overflow are refused.
    pub fn new(size: usize) -> Result<ResultGrid, FractalError> {
        if !size_fits(size) {
            return Err(FractalError::SizeTooLarge(size));
        }
        Ok(ResultGrid {
            size,
            cells: vec![Convergence::default(); size * size],
        })
    }

    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The result at `row`, `col`, if that lies inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Convergence> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// One complete row, if it lies inside the grid.
    pub fn row(&self, row: usize) -> Option<&[Convergence]> {
        if row < self.size {
            Some(&self.cells[row * self.size..(row + 1) * self.size])
        } else {
            None
        }
    }

    /// Every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Convergence]> {
        // chunks() refuses a zero chunk size, and an empty grid has no rows.
        self.cells.chunks(self.size.max(1))
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Convergence> {
        self.cells.iter()
    }

    /// Every cell with its `(row, col)`, row-major.
    pub fn indexed(&self) -> impl Iterator<Item = ((usize, usize), &Convergence)> {
        iproduct!(0..self.size, 0..self.size).zip(self.cells.iter())
    }

    /// Splits the grid into mutable rows and deals them to the workers
    /// of `partition`.  Entry `k` holds exactly the rows
    /// `partition.rows_for(k)` yields, in the same order.  The borrows
    /// are disjoint, so the workers can fill them without any locking.
    pub fn deal_rows(&mut self, partition: &RowPartition) -> Vec<Vec<RowSlot<'_>>> {
        let mut slots: Vec<Vec<RowSlot<'_>>> =
            (0..partition.workers()).map(|_| vec![]).collect();
        for (index, row) in self.cells.chunks_mut(self.size.max(1)).enumerate() {
            slots[partition.owner(index)].push((index, row));
        }
        slots
    }
}
