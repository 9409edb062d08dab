use log::info;

use crate::city_grid::CityGrid;
use crate::solver::fallback::{nearest_reachable_road, FallbackStrategy};
use crate::solver::Algorithm;
use crate::trace::ExplorationTracer;
use crate::{Path, Point};

/// A resolved route. When the requested end could not be reached directly, `destination` is the
/// substitute road cell chosen by the fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: Path,
    pub requested: Point,
    pub destination: Point,
}

impl Route {
    pub fn substituted(&self) -> bool {
        self.destination != self.requested
    }

    /// Number of steps along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Answers route requests: a direct search first and, if that fails and fallback is enabled, a
/// path to the nearest reachable road instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoutePlanner {
    pub algorithm: Algorithm,
    pub fallback: bool,
    pub fallback_strategy: FallbackStrategy,
}

impl Default for RoutePlanner {
    fn default() -> RoutePlanner {
        RoutePlanner {
            algorithm: Algorithm::UniformCost,
            fallback: true,
            fallback_strategy: FallbackStrategy::Exhaustive,
        }
    }
}

impl RoutePlanner {
    pub fn new() -> RoutePlanner {
        RoutePlanner::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    pub fn with_fallback_strategy(mut self, strategy: FallbackStrategy) -> Self {
        self.fallback_strategy = strategy;
        self
    }

    pub fn plan(&self, grid: &CityGrid, start: Point, end: Point) -> Option<Route> {
        self.plan_traced(grid, start, end, &mut ())
    }

    /// Like [plan](Self::plan); the trace covers the direct search followed by any fallback
    /// searches.
    pub fn plan_traced<T: ExplorationTracer + ?Sized>(
        &self,
        grid: &CityGrid,
        start: Point,
        end: Point,
        tracer: &mut T,
    ) -> Option<Route> {
        let roads = grid.road_set();
        let path = match self.algorithm.solve_traced(&roads, start, end, tracer) {
            Some(path) => Some(path),
            None if self.fallback => {
                info!("No {} path from {} to {}, falling back", self.algorithm, start, end);
                nearest_reachable_road(
                    &roads,
                    start,
                    end,
                    self.algorithm,
                    self.fallback_strategy,
                    tracer,
                )
            }
            None => None,
        }?;
        let destination = *path.last()?;
        Some(Route {
            path,
            requested: end,
            destination,
        })
    }
}
