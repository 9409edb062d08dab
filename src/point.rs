use core::fmt;

/// A cell coordinate. `x` is the first axis (column), `y` the second (row), with `y` growing
/// southwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Widened so that any pair of points, in the grid or not, has a distance.
    pub fn manhattan_distance(&self, other: &Point) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// True if the two points differ by exactly one in exactly one axis.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The 4-neighbourhood in the order west, east, north, south. Searches rely on this order
    /// for tie-breaking, so it must not change. Neighbors beyond the range of `i32` are left out.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Point> {
        let Point { x, y } = *self;
        [
            x.checked_sub(1).map(|x| Point::new(x, y)),
            x.checked_add(1).map(|x| Point::new(x, y)),
            y.checked_sub(1).map(|y| Point::new(x, y)),
            y.checked_add(1).map(|y| Point::new(x, y)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
