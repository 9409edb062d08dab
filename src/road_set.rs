use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::city_grid::CityGrid;
use crate::point::Point;
use crate::N_SMALLVEC_SIZE;

/// The traversable cells of a [CityGrid], extracted once per query.
///
/// Membership is a dense mask over the grid; iteration yields roads in row-major `(y, x)` order.
#[derive(Clone, Debug, Default)]
pub struct RoadSet {
    width: usize,
    height: usize,
    mask: Vec<bool>,
    roads: Vec<Point>,
}

impl RoadSet {
    pub fn from_grid(grid: &CityGrid) -> RoadSet {
        let mut mask = Vec::with_capacity(grid.width() * grid.height());
        let mut roads = Vec::new();
        for (point, category) in grid.cells() {
            let road = category.is_traversable();
            mask.push(road);
            if road {
                roads.push(point);
            }
        }
        RoadSet {
            width: grid.width(),
            height: grid.height(),
            mask,
            roads,
        }
    }

    fn index(&self, point: &Point) -> Option<usize> {
        if point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
        {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    /// Out-of-bounds points are never members.
    pub fn contains(&self, point: &Point) -> bool {
        self.index(point).is_some_and(|ix| self.mask[ix])
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.roads.iter()
    }

    /// Orthogonally adjacent road cells of `point`, in the order west, east, north, south.
    pub fn neighbors(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        point
            .neumann_neighborhood()
            .filter(|p| self.contains(p))
            .collect()
    }

    /// Links up adjacent road cells into connected components.
    pub fn components(&self) -> RoadComponents {
        let mut components = UnionFind::new(self.width * self.height);
        for road in &self.roads {
            let parent_ix = road.y as usize * self.width + road.x as usize;
            // Linking east and south covers every edge once
            for n in [Point::new(road.x + 1, road.y), Point::new(road.x, road.y + 1)] {
                if let Some(ix) = self.index(&n).filter(|ix| self.mask[*ix]) {
                    components.union(parent_ix, ix);
                }
            }
        }
        RoadComponents {
            roads: self,
            components,
        }
    }

    /// Checks that `path` is a non-empty walk over road cells in which consecutive points are
    /// 4-adjacent.
    pub fn is_traversable_path(&self, path: &[Point]) -> bool {
        !path.is_empty()
            && path.iter().all(|p| self.contains(p))
            && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }
}

impl<'a> IntoIterator for &'a RoadSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Connected components of a [RoadSet] under 4-connectivity.
#[derive(Debug)]
pub struct RoadComponents<'a> {
    roads: &'a RoadSet,
    components: UnionFind<usize>,
}

impl RoadComponents<'_> {
    /// True if both points are roads and one can be reached from the other.
    pub fn connected(&self, a: &Point, b: &Point) -> bool {
        match (self.roads.index(a), self.roads.index(b)) {
            (Some(a_ix), Some(b_ix)) => {
                self.roads.mask[a_ix] && self.roads.mask[b_ix] && self.components.equiv(a_ix, b_ix)
            }
            _ => false,
        }
    }

    /// Roads in the same component as `point`, in row-major order.
    pub fn component_of<'b>(&'b self, point: &'b Point) -> impl Iterator<Item = &'b Point> + 'b {
        self.roads.iter().filter(move |p| self.connected(point, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    /// Corresponds to the following grid, R marking roads:
    ///  ___
    /// |RBR|
    /// |RBR|
    ///  ___
    fn split_grid() -> CityGrid {
        "RBR\nRBR".parse().unwrap()
    }

    #[test]
    fn extracts_roads_in_row_major_order() {
        let roads = split_grid().road_set();
        let points: Vec<Point> = roads.iter().copied().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
        assert!(!roads.contains(&Point::new(1, 0)));
        assert!(!roads.contains(&Point::new(-1, 0)));
        assert!(!roads.contains(&Point::new(0, 2)));
    }

    #[test]
    fn no_roads() {
        let roads = CityGrid::new(4, 4, Category::Park).road_set();
        assert!(roads.is_empty());
        assert!(roads.neighbors(&Point::new(1, 1)).is_empty());
    }

    #[test]
    fn neighbors_far_outside_the_grid() {
        let roads = CityGrid::new(3, 3, Category::Road).road_set();
        assert!(roads.neighbors(&Point::new(i32::MIN, i32::MAX)).is_empty());
        assert!(roads.neighbors(&Point::new(i32::MAX, i32::MIN)).is_empty());
        assert_eq!(
            roads.neighbors(&Point::new(-1, 0)).as_slice(),
            &[Point::new(0, 0)]
        );
    }

    #[test]
    fn neighbors_are_bounded_and_ordered() {
        let grid = CityGrid::new(3, 3, Category::Road);
        let roads = grid.road_set();
        assert_eq!(
            roads.neighbors(&Point::new(1, 1)).as_slice(),
            &[
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
        assert_eq!(
            roads.neighbors(&Point::new(0, 0)).as_slice(),
            &[Point::new(1, 0), Point::new(0, 1)]
        );
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        let roads = split_grid().road_set();
        let components = roads.components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(!components.connected(&p1, &p2));
        assert!(components.connected(&p1, &p3));
        assert!(!components.connected(&p1, &p4));
        assert_eq!(components.component_of(&p4).count(), 2);
    }

    #[test]
    fn diagonal_roads_are_not_connected() {
        let roads = "RB\nBR".parse::<CityGrid>().unwrap().road_set();
        assert!(!roads
            .components()
            .connected(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn path_checks() {
        let roads = CityGrid::new(3, 1, Category::Road).road_set();
        let ok = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let gap = [Point::new(0, 0), Point::new(2, 0)];
        assert!(roads.is_traversable_path(&ok));
        assert!(!roads.is_traversable_path(&gap));
        assert!(!roads.is_traversable_path(&[]));
    }
}
