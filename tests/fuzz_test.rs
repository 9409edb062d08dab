/// Fuzzes the road pathfinding by checking on many random grids that both algorithms agree with
/// a plain breadth-first search, that a path is found exactly when start and end share a road
/// component, and that both fallback strategies pick the same substitute road.
use rand::prelude::*;
use road_pathfinding::solver::fallback;
use road_pathfinding::{
    shortest_path, shortest_path_traced, Algorithm, Category, CityGrid, FallbackStrategy, Point,
    RoadSet,
};
use std::collections::{HashMap, VecDeque};

const N: usize = 8;
const N_GRIDS: usize = 2000;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> CityGrid {
    let mut grid = CityGrid::new(w, h, Category::Road);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if !rng.gen_bool(0.6) {
                let category = *[Category::Building, Category::Park, Category::Water, Category::Other]
                    .choose(rng)
                    .unwrap();
                grid.set(Point::new(x, y), category).unwrap();
            }
        }
    }
    grid
}

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32))
}

fn visualize_grid(grid: &CityGrid, start: &Point, end: &Point) {
    for (p, category) in grid.cells() {
        if *start == p {
            print!("S");
        } else if *end == p {
            print!("G");
        } else {
            print!("{}", category.symbol());
        }
        if p.x as usize == grid.width() - 1 {
            println!();
        }
    }
}

/// Hop distances from `start` to every reachable road cell.
fn bfs_distances(roads: &RoadSet, start: Point) -> HashMap<Point, usize> {
    let mut distances = HashMap::new();
    if !roads.contains(&start) {
        return distances;
    }
    distances.insert(start, 0);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = distances[&p];
        for n in roads.neighbors(&p) {
            if !distances.contains_key(&n) {
                distances.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    distances
}

#[test]
fn fuzz() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let roads = grid.road_set();
        let components = roads.components();
        let start = random_point(&mut rng);
        let end = random_point(&mut rng);
        let distances = bfs_distances(&roads, start);
        let reachable = components.connected(&start, &end);
        assert_eq!(reachable, distances.contains_key(&end));
        for algorithm in Algorithm::ALL {
            let mut trace = Vec::new();
            let path = shortest_path_traced(&grid, start, end, algorithm, &mut trace);
            // Recording the trace must not change the outcome
            assert_eq!(path, shortest_path(&grid, start, end, algorithm));
            // Show the grid if the result is wrong
            if path.is_some() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(path.is_some(), reachable);
            if let Some(path) = path {
                assert_eq!(path.len(), distances[&end] + 1);
                assert_eq!(path[0], start);
                assert_eq!(*path.last().unwrap(), end);
                assert!(roads.is_traversable_path(&path));
                assert_eq!(trace[0], start);
                assert_eq!(trace.iter().filter(|p| **p == start).count(), 1);
                assert!(trace.iter().all(|p| roads.contains(p)));
            }
        }
    }
}

#[test]
fn fuzz_same_start_end() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let p = random_point(&mut rng);
        for algorithm in Algorithm::ALL {
            let path = shortest_path(&grid, p, p, algorithm);
            if grid.get(p) == Some(Category::Road) {
                assert_eq!(path, Some(vec![p]));
            } else {
                assert!(path.is_none());
            }
        }
    }
}

#[test]
fn fuzz_fallback() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS / 4 {
        let grid = random_grid(N, N, &mut rng);
        let roads = grid.road_set();
        let start = random_point(&mut rng);
        let target = random_point(&mut rng);
        let distances = bfs_distances(&roads, start);
        let best = distances
            .keys()
            .filter(|p| **p != target)
            .map(|p| p.manhattan_distance(&target))
            .min();
        for algorithm in Algorithm::ALL {
            let exhaustive = fallback::nearest_reachable_road(
                &roads,
                start,
                target,
                algorithm,
                FallbackStrategy::Exhaustive,
                &mut (),
            );
            let pruned = fallback::nearest_reachable_road(
                &roads,
                start,
                target,
                algorithm,
                FallbackStrategy::ComponentPruned,
                &mut (),
            );
            if exhaustive != pruned {
                visualize_grid(&grid, &start, &target);
            }
            assert_eq!(exhaustive, pruned);
            match exhaustive {
                Some(path) => {
                    let end = *path.last().unwrap();
                    assert_ne!(end, target);
                    assert_eq!(Some(end.manhattan_distance(&target)), best);
                    assert_eq!(path.len(), distances[&end] + 1);
                    assert!(roads.is_traversable_path(&path));
                }
                None => assert!(best.is_none()),
            }
        }
    }
}

#[test]
fn concurrent_queries_share_a_grid() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = random_grid(32, 32, &mut rng);
    let queries: Vec<(Point, Point)> = (0..64)
        .map(|_| {
            (
                Point::new(rng.gen_range(0..32), rng.gen_range(0..32)),
                Point::new(rng.gen_range(0..32), rng.gen_range(0..32)),
            )
        })
        .collect();
    let serial: Vec<_> = queries
        .iter()
        .map(|(s, e)| shortest_path(&grid, *s, *e, Algorithm::Heuristic))
        .collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .chunks(16)
            .map(|chunk| {
                let grid = &grid;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|(s, e)| shortest_path(grid, *s, *e, Algorithm::Heuristic))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });
    assert_eq!(serial, parallel);
}
