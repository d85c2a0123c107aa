// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a finished result grid into the two output images: an
//! attractor map, colored by which root each pixel converged to, and a
//! convergence map, shaded by how many steps it took.  Both are ASCII
//! PNM files, rows top to bottom in grid order.

use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use itertools::Itertools;
use log::info;

use crate::error::FractalError;
use crate::evaluate::MAX_ITERATIONS;
use crate::grid::ResultGrid;

/// Attractor colors, indexed by `root + 1`.  Slot zero is for points
/// that diverged.
pub static PALETTE: [[u8; 3]; 10] = [
    [181, 181, 181],
    [204, 51, 46],
    [208, 106, 47],
    [208, 152, 47],
    [208, 200, 47],
    [119, 208, 47],
    [51, 177, 209],
    [51, 83, 209],
    [175, 51, 209],
    [208, 47, 149],
];

/// The attractor map file name for a given degree.
pub fn attractors_filename(degree: u32) -> String {
    format!("newton_attractors_x{}.ppm", degree)
}

/// The convergence map file name for a given degree.
pub fn convergence_filename(degree: u32) -> String {
    format!("newton_convergence_x{}.ppm", degree)
}

/// RGB bytes for the attractor map, row-major.
pub fn attractor_pixels(grid: &ResultGrid) -> Vec<u8> {
    grid.cells()
        .flat_map(|cell| PALETTE[cell.palette_index()].iter().cloned())
        .collect()
}

/// Grey bytes for the convergence map, row-major.  Each is the clamped
/// iteration count itself.
pub fn convergence_pixels(grid: &ResultGrid) -> Vec<u8> {
    grid.cells().map(|cell| cell.iterations).collect()
}

/// The grid's side as an image dimension.
fn image_side(grid: &ResultGrid) -> Result<u32, FractalError> {
    u32::try_from(grid.size()).map_err(|_| FractalError::SizeTooLarge(grid.size()))
}

/// Writes the attractor map as a color pixmap.
pub fn write_attractors(path: &Path, grid: &ResultGrid) -> Result<(), FractalError> {
    let side = image_side(grid)?;
    let failed = |e| FractalError::Io(path.display().to_string(), e);
    let output = File::create(path).map_err(failed)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Ascii));
    encoder
        .encode(&attractor_pixels(grid)[..], side, side, ColorType::RGB(8))
        .map_err(failed)?;
    Ok(())
}

/// Writes the convergence map as an ASCII graymap whose white is the
/// iteration cap, one grid row per line.
///
/// image 0.22 rejects any chosen graymap header whose maxval is below
/// 255 when every sample fits under it, so this one is written out
/// directly.
pub fn write_convergence(path: &Path, grid: &ResultGrid) -> Result<(), FractalError> {
    let side = image_side(grid)?;
    let failed = |e| FractalError::Io(path.display().to_string(), e);
    let mut output = BufWriter::new(File::create(path).map_err(failed)?);
    writeln!(output, "P2\n{} {}\n{}", side, side, MAX_ITERATIONS).map_err(failed)?;
    for row in convergence_pixels(grid).chunks(grid.size().max(1)) {
        writeln!(output, "{}", row.iter().join(" ")).map_err(failed)?;
    }
    output.flush().map_err(failed)?;
    Ok(())
}

/// Writes both maps into `dir` under their standard names, and returns
/// where they went.
pub fn write_images(
    dir: &Path,
    degree: u32,
    grid: &ResultGrid,
) -> Result<(PathBuf, PathBuf), FractalError> {
    let attractors = dir.join(attractors_filename(degree));
    let convergence = dir.join(convergence_filename(degree));
    write_attractors(&attractors, grid)?;
    info!("wrote {}", attractors.display());
    write_convergence(&convergence, grid)?;
    info!("wrote {}", convergence.display());
    Ok((attractors, convergence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Convergence;
    use crate::partition::RowPartition;

    fn sample_grid() -> ResultGrid {
        let mut grid = ResultGrid::new(2).unwrap();
        let outcomes = [
            Convergence { root: None, iterations: 0 },
            Convergence { root: Some(0), iterations: 7 },
            Convergence { root: Some(2), iterations: 50 },
            Convergence { root: Some(8), iterations: 1 },
        ];
        for rows in grid.deal_rows(&RowPartition::new(2, 1).unwrap()) {
            for (index, row) in rows {
                row.copy_from_slice(&outcomes[index * 2..index * 2 + 2]);
            }
        }
        grid
    }

    #[test]
    fn attractors_are_looked_up_by_root() {
        let pixels = attractor_pixels(&sample_grid());
        assert_eq!(
            pixels,
            vec![181, 181, 181, 204, 51, 46, 208, 152, 47, 208, 47, 149]
        );
    }

    #[test]
    fn convergence_is_the_iteration_count() {
        assert_eq!(convergence_pixels(&sample_grid()), vec![0, 7, 50, 1]);
    }

    #[test]
    fn filenames_carry_the_degree() {
        assert_eq!(attractors_filename(3), "newton_attractors_x3.ppm");
        assert_eq!(convergence_filename(7), "newton_convergence_x7.ppm");
    }

    #[test]
    fn writes_both_images() {
        let dir = tempfile::tempdir().unwrap();
        let (attractors, convergence) = write_images(dir.path(), 4, &sample_grid()).unwrap();
        let a = std::fs::read_to_string(&attractors).unwrap();
        let c = std::fs::read_to_string(&convergence).unwrap();
        assert!(a.starts_with("P3"));
        assert!(c.starts_with("P2"));
        assert!(a.contains("208"));
        assert!(c.contains("50"));
    }

    #[test]
    fn convergence_white_is_the_iteration_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convergence.ppm");
        write_convergence(&path, &sample_grid()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let tokens: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(&tokens[..4], &["P2", "2", "2", "50"]);
        assert_eq!(&tokens[4..], &["0", "7", "50", "1"]);
    }

    #[test]
    fn attractor_header_is_a_byte_pixmap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attractors.ppm");
        write_attractors(&path, &sample_grid()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let tokens: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(&tokens[..4], &["P3", "2", "2", "255"]);
        assert_eq!(tokens.len(), 4 + 2 * 2 * 3);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_images(&dir.path().join("nope"), 2, &sample_grid());
        match result {
            Err(FractalError::Io(_, _)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
