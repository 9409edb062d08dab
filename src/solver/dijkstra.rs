use crate::{solver::GridSolver, Point};

/// Uniform-cost search: expands road cells in order of their distance from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    /// No guidance; every cell at a given distance is expanded before any farther one.
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
