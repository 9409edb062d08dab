use crate::{solver::GridSolver, Point, ROAD_STEP_COST};

/// A* search guided by the Manhattan distance to the goal. On a unit-cost 4-connected grid the
/// heuristic is admissible and consistent, so paths are as short as those of
/// [DijkstraSolver](crate::solver::dijkstra::DijkstraSolver).
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        i32::try_from(p1.manhattan_distance(p2))
            .unwrap_or(i32::MAX)
            .saturating_mul(ROAD_STEP_COST)
    }
}
