use road_pathfinding::{shortest_path_traced, Algorithm, Category, CityGrid, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | B |
// |  E|
//  ___
// where
// - B marks a building
// - S marks the start
// - E marks the end
//
// and every other cell is a road.

fn main() {
    env_logger::init();
    let mut grid = CityGrid::new(3, 3, Category::Road);
    grid.set(Point::new(1, 1), Category::Building).unwrap();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let mut trace = Vec::new();
    let path = shortest_path_traced(&grid, start, end, Algorithm::UniformCost, &mut trace).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
    println!("Explored {} cells: {:?}", trace.len(), trace);
}
