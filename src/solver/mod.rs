use core::fmt;
use std::str::FromStr;

use log::debug;
use smallvec::SmallVec;

use crate::error::MapError;
use crate::road_set::RoadSet;
use crate::search::best_first_search;
use crate::trace::ExplorationTracer;
use crate::{Path, Point, N_SMALLVEC_SIZE, ROAD_STEP_COST};

pub mod astar;
pub mod dijkstra;
pub mod fallback;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

pub trait GridSolver {
    /// Lower bound on the remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn successors(
        &self,
        roads: &RoadSet,
        node: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        roads
            .neighbors(node)
            .into_iter()
            .map(|p| (p, ROAD_STEP_COST))
            .collect()
    }

    fn get_path_cost(&self, path: &[Point]) -> i32 {
        path.len().saturating_sub(1) as i32 * ROAD_STEP_COST
    }

    /// Computes a shortest path from start to goal over road cells. Returns [None] if either
    /// endpoint is not a road or the goal cannot be reached.
    fn get_path_single_goal(&self, roads: &RoadSet, start: Point, goal: Point) -> Option<Path> {
        self.get_path_single_goal_traced(roads, start, goal, &mut ())
    }

    /// Same as [get_path_single_goal](Self::get_path_single_goal), additionally reporting every
    /// frontier push to `tracer`.
    fn get_path_single_goal_traced<T: ExplorationTracer + ?Sized>(
        &self,
        roads: &RoadSet,
        start: Point,
        goal: Point,
        tracer: &mut T,
    ) -> Option<Path> {
        if !roads.contains(&start) || !roads.contains(&goal) {
            debug!("{} or {} is not a road cell", start, goal);
            return None;
        }
        let result = best_first_search(
            &start,
            |node| self.successors(roads, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            |point| tracer.record(*point),
        );
        if result.is_none() {
            debug!("{} is not reachable from {}", goal, start);
        }
        result.map(|(v, _c)| v)
    }
}

/// Selects which [GridSolver] answers a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Dijkstra's algorithm, see [DijkstraSolver].
    #[default]
    UniformCost,
    /// A* with a Manhattan heuristic, see [AstarSolver].
    Heuristic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::UniformCost, Algorithm::Heuristic];

    pub fn solve(&self, roads: &RoadSet, start: Point, goal: Point) -> Option<Path> {
        self.solve_traced(roads, start, goal, &mut ())
    }

    pub fn solve_traced<T: ExplorationTracer + ?Sized>(
        &self,
        roads: &RoadSet,
        start: Point,
        goal: Point,
        tracer: &mut T,
    ) -> Option<Path> {
        match self {
            Algorithm::UniformCost => {
                DijkstraSolver.get_path_single_goal_traced(roads, start, goal, tracer)
            }
            Algorithm::Heuristic => {
                AstarSolver.get_path_single_goal_traced(roads, start, goal, tracer)
            }
        }
    }

    pub fn get_path_cost(&self, path: &[Point]) -> i32 {
        match self {
            Algorithm::UniformCost => DijkstraSolver.get_path_cost(path),
            Algorithm::Heuristic => AstarSolver.get_path_cost(path),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform_cost" => Ok(Algorithm::UniformCost),
            "astar" | "a_star" | "a*" | "heuristic" => Ok(Algorithm::Heuristic),
            _ => Err(MapError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::UniformCost => f.write_str("dijkstra"),
            Algorithm::Heuristic => f.write_str("a_star"),
        }
    }
}
