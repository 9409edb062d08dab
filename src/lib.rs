//! # road_pathfinding
//!
//! Shortest paths over the road cells of a land-use grid. Every cell of a [CityGrid] carries a
//! [Category]; only [Category::Road] cells can be travelled, moving one step west, east, north or
//! south at a time. Paths are computed with either
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry). Both break ties
//! deterministically, so the same query always yields the same path.
//!
//! Every search can report the cells it pushes onto its frontier to an [ExplorationTracer], which
//! is enough to replay the search step by step. When a destination cannot be reached,
//! [nearest_reachable_road] finds a path to the closest road cell that can.
mod category;
mod city_grid;
pub mod diagnostics;
mod error;
mod planner;
mod point;
mod road_set;
mod search;
pub mod solver;
mod trace;

pub use crate::category::Category;
pub use crate::city_grid::{AxisOrder, CellRecord, CityGrid};
pub use crate::diagnostics::{compare_algorithms, CategoryCounts, CoordinateSurvey};
pub use crate::error::{MapError, Result};
pub use crate::planner::{Route, RoutePlanner};
pub use crate::point::Point;
pub use crate::road_set::{RoadComponents, RoadSet};
pub use crate::solver::fallback::FallbackStrategy;
pub use crate::solver::{Algorithm, GridSolver};
pub use crate::trace::ExplorationTracer;

/// Cost of a single step between two adjacent road cells.
pub const ROAD_STEP_COST: i32 = 1;
/// Inline capacity of neighbor lists; a cell has at most four road neighbors.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Ordered sequence of road cells from start to end, each adjacent to the next.
pub type Path = Vec<Point>;

/// Computes a shortest road path from `start` to `end` with the given [Algorithm].
///
/// Returns [None] if either endpoint is not a road cell (including coordinates outside the grid)
/// or if `end` cannot be reached from `start`.
pub fn shortest_path(grid: &CityGrid, start: Point, end: Point, algorithm: Algorithm) -> Option<Path> {
    shortest_path_traced(grid, start, end, algorithm, &mut ())
}

/// Same as [shortest_path], additionally reporting the exploration trace to `tracer`: the start
/// once, then every frontier push in order.
pub fn shortest_path_traced<T: ExplorationTracer + ?Sized>(
    grid: &CityGrid,
    start: Point,
    end: Point,
    algorithm: Algorithm,
    tracer: &mut T,
) -> Option<Path> {
    let roads = grid.road_set();
    algorithm.solve_traced(&roads, start, end, tracer)
}

/// Computes a path from `start` to the road cell closest to `target` that `start` can reach.
/// See [solver::fallback::nearest_reachable_road] for the selection rules.
pub fn nearest_reachable_road(
    grid: &CityGrid,
    start: Point,
    target: Point,
    algorithm: Algorithm,
) -> Option<Path> {
    nearest_reachable_road_traced(grid, start, target, algorithm, &mut ())
}

/// Same as [nearest_reachable_road]. Every candidate search is reported to `tracer`, one after
/// the other.
pub fn nearest_reachable_road_traced<T: ExplorationTracer + ?Sized>(
    grid: &CityGrid,
    start: Point,
    target: Point,
    algorithm: Algorithm,
    tracer: &mut T,
) -> Option<Path> {
    let roads = grid.road_set();
    solver::fallback::nearest_reachable_road(
        &roads,
        start,
        target,
        algorithm,
        FallbackStrategy::Exhaustive,
        tracer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocked_center() -> CityGrid {
        "RRR\nRBR\nRRR".parse().unwrap()
    }

    #[test]
    fn routes_around_building() {
        let grid = blocked_center();
        for algorithm in Algorithm::ALL {
            let path = shortest_path(&grid, Point::new(0, 0), Point::new(2, 2), algorithm).unwrap();
            assert_eq!(path.len(), 5);
            assert_eq!(path.first(), Some(&Point::new(0, 0)));
            assert_eq!(path.last(), Some(&Point::new(2, 2)));
            assert!(grid.road_set().is_traversable_path(&path));
        }
    }

    #[test]
    fn start_equals_end() {
        let grid = blocked_center();
        let start = Point::new(2, 1);
        for algorithm in Algorithm::ALL {
            let mut trace = Vec::new();
            let path = shortest_path_traced(&grid, start, start, algorithm, &mut trace);
            assert_eq!(path, Some(vec![start]));
            assert_eq!(trace, vec![start]);
        }
    }

    #[test]
    fn endpoints_off_the_road() {
        let grid = blocked_center();
        for algorithm in Algorithm::ALL {
            assert!(shortest_path(&grid, Point::new(1, 1), Point::new(0, 0), algorithm).is_none());
            assert!(shortest_path(&grid, Point::new(0, 0), Point::new(1, 1), algorithm).is_none());
            assert!(shortest_path(&grid, Point::new(-1, 0), Point::new(0, 0), algorithm).is_none());
            assert!(shortest_path(&grid, Point::new(0, 0), Point::new(3, 3), algorithm).is_none());
        }
    }

    #[test]
    fn grid_without_roads() {
        let grid = CityGrid::new(4, 4, Category::Other);
        for algorithm in Algorithm::ALL {
            assert!(shortest_path(&grid, Point::new(0, 0), Point::new(3, 3), algorithm).is_none());
            assert!(
                nearest_reachable_road(&grid, Point::new(0, 0), Point::new(3, 3), algorithm)
                    .is_none()
            );
        }
    }

    #[test]
    fn park_surrounded_by_roads() {
        //  ___
        // |RRR|
        // |RPR|
        // |RRR|
        //  ___
        let grid: CityGrid = "RRR\nRPR\nRRR".parse().unwrap();
        let start = Point::new(0, 2);
        let park = Point::new(1, 1);
        for algorithm in Algorithm::ALL {
            assert!(shortest_path(&grid, start, park, algorithm).is_none());
            let path = nearest_reachable_road(&grid, start, park, algorithm).unwrap();
            let end = *path.last().unwrap();
            assert_eq!(end.manhattan_distance(&park), 1);
            // (1, 0) is the first adjacent road in row-major order
            assert_eq!(end, Point::new(1, 0));
            assert_eq!(path.len(), 4);
        }
    }

    #[test]
    fn traced_fallback_records_each_candidate_search() {
        let grid: CityGrid = "RRR\nRPR\nRRR".parse().unwrap();
        let start = Point::new(0, 0);
        let mut trace = Vec::new();
        nearest_reachable_road_traced(
            &grid,
            start,
            Point::new(1, 1),
            Algorithm::UniformCost,
            &mut trace,
        )
        .unwrap();
        let searches = trace.iter().filter(|p| **p == start).count();
        assert_eq!(searches, 8);
    }

    #[test]
    fn optional_tracer() {
        let grid = blocked_center();
        let mut tracer: Option<Vec<Point>> = None;
        let path = shortest_path_traced(
            &grid,
            Point::new(0, 0),
            Point::new(2, 0),
            Algorithm::Heuristic,
            &mut tracer,
        );
        assert_eq!(path.map(|p| p.len()), Some(3));
        assert!(tracer.is_none());
    }
}
