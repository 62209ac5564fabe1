//! The accumulator: runs the de Jong map from the origin and counts
//! how often the orbit falls into each cell of the grid.

use log::debug;

use crate::params::Parameters;
use crate::planes::{Pixel, PlaneMapper};

/// A histogram of visits over the integral plane.  The grid is one
/// row and one column wider than the canvas it was made for; the
/// extra boundary row and column are never written by a pass and
/// never rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl DensityGrid {
    /// Allocate a zeroed grid for a canvas of width x height.
    pub fn new(width: usize, height: usize) -> Self {
        DensityGrid {
            width,
            height,
            cells: vec![0 as u32; (width + 1) * (height + 1)],
        }
    }

    /// Width of the canvas this grid serves.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the canvas this grid serves.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Zero every cell without giving back the allocation.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = 0;
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * (self.width + 1) + x
    }

    /// The count at column x, row y.  Both may reach the inclusive
    /// boundary (x == width, y == height).
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[self.offset(x, y)]
    }

    #[inline]
    fn increment(&mut self, pixel: Pixel) {
        let offset = self.offset(pixel.0, pixel.1);
        self.cells[offset] += 1;
    }

    /// Sum of every cell: the number of samples that landed.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(*c)).sum()
    }

    /// The busiest cell's count.
    pub fn max(&self) -> u32 {
        self.cells.iter().cloned().max().unwrap_or(0)
    }

    /// Every cell, row-major, including the boundary row and column.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Fold another grid of the same shape into this one.  Partial
    /// grids built separately must be combined this way, never by
    /// sharing one grid between writers.
    pub fn merge(&mut self, other: &DensityGrid) {
        assert!(
            self.width == other.width && self.height == other.height,
            "cannot merge a {}x{} grid into a {}x{} grid",
            other.width,
            other.height,
            self.width,
            self.height
        );
        for (cell, count) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell += count;
        }
    }
}

/// What happened to the samples of one pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PassStats {
    /// Samples that incremented a cell.
    pub plotted: usize,
    /// Samples that fell off the plane.
    pub discarded: usize,
}

/// One step of the map.  The trigonometry runs at double precision;
/// the caller decides what precision to carry forward.
#[inline]
pub fn step(params: &Parameters, x: f32, y: f32) -> (f64, f64) {
    let (x, y) = (f64::from(x), f64::from(y));
    let nx = (f64::from(params.a) * y).sin() - (f64::from(params.b) * x).cos();
    let ny = (f64::from(params.c) * x).sin() - (f64::from(params.d) * y).cos();
    (nx, ny)
}

/// Run a full pass into an existing grid.  The orbit starts at the
/// origin.  After each step the new point is narrowed back to single
/// precision before it is fed to the next step; the rounding noise
/// that reinjects is part of the picture, so it stays.
pub fn accumulate(grid: &mut DensityGrid, params: &Parameters, iterations: usize) -> PassStats {
    let plane = PlaneMapper::new(grid.width(), grid.height());
    let mut stats = PassStats::default();
    let (mut x, mut y) = (0.0_f32, 0.0_f32);
    for _ in 0..iterations {
        let (nx, ny) = step(params, x, y);
        match plane.point_to_pixel(nx, ny) {
            Some(pixel) => {
                grid.increment(pixel);
                stats.plotted += 1;
            }
            None => stats.discarded += 1,
        }
        x = nx as f32;
        y = ny as f32;
    }
    debug!(
        "pass {}: {} plotted, {} discarded",
        params, stats.plotted, stats.discarded
    );
    stats
}

/// Allocate a fresh grid and run a full pass into it.
pub fn run_pass(
    params: &Parameters,
    iterations: usize,
    grid_width: usize,
    grid_height: usize,
) -> DensityGrid {
    let mut grid = DensityGrid::new(grid_width, grid_height);
    accumulate(&mut grid, params, iterations);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_is_inclusive_of_the_boundary() {
        let grid = DensityGrid::new(4, 3);
        assert_eq!(grid.cells().len(), 5 * 4);
        assert_eq!(grid.get(4, 3), 0);
    }

    #[test]
    fn counts_add_up_to_plotted_samples() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..8 {
            let params = Parameters::random(&mut rng, 3.0);
            let mut grid = DensityGrid::new(64, 64);
            let stats = accumulate(&mut grid, &params, 20_000);
            assert_eq!(stats.plotted + stats.discarded, 20_000);
            assert_eq!(grid.total(), stats.plotted as u64);
            assert!(grid.max() as usize <= 20_000);
        }
    }

    #[test]
    fn boundary_row_and_column_stay_empty() {
        let params = Parameters::new(1.4, -2.3, 2.4, -2.1);
        let grid = run_pass(&params, 50_000, 32, 32);
        for i in 0..=32 {
            assert_eq!(grid.get(32, i), 0);
            assert_eq!(grid.get(i, 32), 0);
        }
    }

    #[test]
    fn passes_are_deterministic() {
        let params = Parameters::new(-2.7, -0.09, -0.86, -2.2);
        let g1 = run_pass(&params, 100_000, 128, 128);
        let g2 = run_pass(&params, 100_000, 128, 128);
        assert_eq!(g1, g2);
    }

    #[test]
    fn zero_parameters_collapse_to_a_fixed_point() {
        // sin(0) - cos(0) = -1 on both axes, every step.
        let params = Parameters::new(0.0, 0.0, 0.0, 0.0);
        let grid = run_pass(&params, 1000, 640, 640);
        assert_eq!(grid.get(160, 160), 1000);
        assert_eq!(grid.total(), 1000);
    }

    #[test]
    fn zero_iterations_leave_an_empty_grid() {
        let params = Parameters::new(1.0, 2.0, -1.0, -2.0);
        let grid = run_pass(&params, 0, 16, 16);
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn reset_zeroes_in_place() {
        let params = Parameters::new(1.0, 2.0, -1.0, -2.0);
        let mut grid = run_pass(&params, 1000, 16, 16);
        assert!(grid.total() > 0);
        grid.reset();
        assert_eq!(grid, DensityGrid::new(16, 16));
    }

    #[test]
    fn merged_partials_match_their_sum() {
        let p1 = Parameters::new(1.0, 2.0, -1.0, -2.0);
        let p2 = Parameters::new(-1.5, 0.5, 2.5, 1.0);
        let mut merged = run_pass(&p1, 5000, 32, 32);
        let other = run_pass(&p2, 5000, 32, 32);
        let expected = merged.total() + other.total();
        merged.merge(&other);
        assert_eq!(merged.total(), expected);
    }

    #[test]
    #[should_panic]
    fn merging_mismatched_grids_panics() {
        let mut a = DensityGrid::new(4, 4);
        a.merge(&DensityGrid::new(5, 4));
    }

    #[test]
    fn state_is_narrowed_between_steps() {
        // Replay the orbit by hand at single precision and compare.
        let params = Parameters::new(2.01, -2.53, 1.61, -0.33);
        let plane = PlaneMapper::new(100, 100);
        let mut expected = DensityGrid::new(100, 100);
        let (mut x, mut y) = (0.0_f32, 0.0_f32);
        for _ in 0..10_000 {
            let (nx, ny) = step(&params, x, y);
            if let Some(p) = plane.point_to_pixel(nx, ny) {
                expected.increment(p);
            }
            x = nx as f32;
            y = ny as f32;
        }
        assert_eq!(run_pass(&params, 10_000, 100, 100), expected);
    }
}
