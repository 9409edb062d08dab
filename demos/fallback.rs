use road_pathfinding::{
    Algorithm, CellRecord, Category, CityGrid, CoordinateSurvey, FallbackStrategy, Point,
    RoutePlanner,
};

// A park enclosed by roads cannot be routed to directly. The planner falls back to the closest
// road cell reachable from the start instead.
//  _____
// |RRRRR|
// |RRRRR|
// |RRPRR|
// |RRRRR|
// |RRRRR|
//  _____

fn main() {
    env_logger::init();
    let records: Vec<CellRecord> = (0..5)
        .flat_map(|y| (0..5).map(move |x| (x, y)))
        .map(|(x, y)| {
            let category = if (x, y) == (2, 2) {
                Category::Park
            } else {
                Category::Road
            };
            CellRecord::new(x, y, category)
        })
        .collect();
    print!("{}", CoordinateSurvey::of(5, 5, &records));
    let grid = CityGrid::from_records(5, 5, records, Default::default()).unwrap();
    print!("{}", grid.category_counts());

    let start = Point::new(0, 0);
    let park = Point::new(2, 2);
    for strategy in [FallbackStrategy::Exhaustive, FallbackStrategy::ComponentPruned] {
        let planner = RoutePlanner::new()
            .with_algorithm(Algorithm::Heuristic)
            .with_fallback_strategy(strategy);
        let mut trace = Vec::new();
        match planner.plan_traced(&grid, start, park, &mut trace) {
            Some(route) => println!(
                "{:?}: {} -> {} instead of {} in {} hops, {} cells explored",
                strategy,
                start,
                route.destination,
                route.requested,
                route.hops(),
                trace.len()
            ),
            None => println!("{:?}: no route", strategy),
        }
    }
}
