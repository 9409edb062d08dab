//! Substitute destinations for targets that cannot be routed to directly, for instance a park
//! surrounded by roads or a road on a disconnected street network.
use log::{debug, info};

use crate::road_set::RoadSet;
use crate::solver::Algorithm;
use crate::trace::ExplorationTracer;
use crate::{Path, Point};

/// How [nearest_reachable_road] looks for the substitute road cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FallbackStrategy {
    /// Runs one full search per candidate road and reports all of them to the tracer.
    #[default]
    Exhaustive,
    /// Picks the candidate from the start's road component and searches only once. Selects the
    /// same road as [FallbackStrategy::Exhaustive]; the trace covers that single search.
    ComponentPruned,
}

/// Finds a path from `start` to the road cell closest to `target` (by Manhattan distance)
/// among those reachable from `start`. `target` itself is never chosen. Ties go to the
/// candidate that comes first in row-major order.
///
/// Returns [None] if no road other than `target` is reachable, including when `start` is not
/// a road or there are no roads at all.
pub fn nearest_reachable_road<T: ExplorationTracer + ?Sized>(
    roads: &RoadSet,
    start: Point,
    target: Point,
    algorithm: Algorithm,
    strategy: FallbackStrategy,
    tracer: &mut T,
) -> Option<Path> {
    info!(
        "Looking for the road closest to {} reachable from {} among {} roads",
        target,
        start,
        roads.len()
    );
    let path = match strategy {
        FallbackStrategy::Exhaustive => exhaustive(roads, start, target, algorithm, tracer),
        FallbackStrategy::ComponentPruned => {
            component_pruned(roads, start, target, algorithm, tracer)
        }
    };
    match path.as_ref().and_then(|p| p.last()) {
        Some(substitute) => debug!("Substituting {} for {}", substitute, target),
        None => info!("No road is reachable from {}", start),
    }
    path
}

fn exhaustive<T: ExplorationTracer + ?Sized>(
    roads: &RoadSet,
    start: Point,
    target: Point,
    algorithm: Algorithm,
    tracer: &mut T,
) -> Option<Path> {
    let mut best: Option<(u64, Path)> = None;
    for candidate in roads.iter().filter(|p| **p != target) {
        if let Some(path) = algorithm.solve_traced(roads, start, *candidate, tracer) {
            let distance = candidate.manhattan_distance(&target);
            if best.as_ref().map_or(true, |(d, _)| distance < *d) {
                best = Some((distance, path));
            }
        }
    }
    best.map(|(_, path)| path)
}

fn component_pruned<T: ExplorationTracer + ?Sized>(
    roads: &RoadSet,
    start: Point,
    target: Point,
    algorithm: Algorithm,
    tracer: &mut T,
) -> Option<Path> {
    let components = roads.components();
    let candidate = components
        .component_of(&start)
        .filter(|p| **p != target)
        .min_by_key(|p| p.manhattan_distance(&target))
        .copied()?;
    algorithm.solve_traced(roads, start, candidate, tracer)
}
