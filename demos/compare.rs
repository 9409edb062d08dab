use road_pathfinding::{compare_algorithms, CityGrid, Point};

// Compares both search algorithms on a small district:
// R road, B building, P park, W water, . other

const DISTRICT: &str = "
RRRRRRRRRR
RBBRPPRBBR
RBBRPPRBBR
RRRRRRRRRR
RWWWRBBBBR
RWWWRBBBBR
RRRRRR..RR
BBBBBBBBBB
";

fn main() {
    env_logger::init();
    let grid: CityGrid = DISTRICT.parse().unwrap();
    println!("{}", grid);
    let queries = [
        (Point::new(0, 0), Point::new(9, 6)),
        (Point::new(9, 6), Point::new(0, 6)),
        (Point::new(0, 0), Point::new(4, 1)),
    ];
    for (start, end) in queries {
        println!("{}", compare_algorithms(&grid, start, end));
    }
}
