use core::fmt;
use std::str::FromStr;

use log::debug;

use crate::category::Category;
use crate::diagnostics::CategoryCounts;
use crate::error::{MapError, Result};
use crate::point::Point;
use crate::road_set::RoadSet;

/// A persisted cell as handed over by the storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    pub category: Category,
}

impl CellRecord {
    pub fn new(x: i32, y: i32, category: Category) -> CellRecord {
        CellRecord { x, y, category }
    }
}

/// Axis convention of incoming [CellRecord]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrder {
    /// `x` is the column and `y` the row, matching [Point].
    #[default]
    ColumnMajor,
    /// Records were stored with the axes swapped; `x` and `y` are exchanged on load.
    RowMajor,
}

/// Read-only snapshot of a land-use grid: its dimensions and the [Category] of every cell.
///
/// Cells are stored row-major. Every in-bounds coordinate has exactly one category; searches
/// borrow the snapshot immutably and never modify it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityGrid {
    width: usize,
    height: usize,
    cells: Vec<Category>,
}

impl Default for CityGrid {
    fn default() -> CityGrid {
        CityGrid::new(0, 0, Category::Other)
    }
}

impl CityGrid {
    pub fn new(width: usize, height: usize, fill: Category) -> CityGrid {
        CityGrid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Builds a grid from text rows, one row per `y` and one [Category::symbol] per `x`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<CityGrid> {
        let width = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(MapError::EmptyMap),
        };
        if width == 0 {
            return Err(MapError::EmptyMap);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let category =
                    Category::from_symbol(symbol).ok_or(MapError::UnknownSymbol { symbol, x, y })?;
                cells.push(category);
            }
        }
        Ok(CityGrid {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Materializes a snapshot from stored cell records. Cells without a record are
    /// [Category::Other], the category new grids are initialized with.
    pub fn from_records<I>(width: usize, height: usize, records: I, axes: AxisOrder) -> Result<CityGrid>
    where
        I: IntoIterator<Item = CellRecord>,
    {
        let mut grid = CityGrid::new(width, height, Category::Other);
        let mut seen = vec![false; width * height];
        for record in records {
            let point = match axes {
                AxisOrder::ColumnMajor => Point::new(record.x, record.y),
                AxisOrder::RowMajor => Point::new(record.y, record.x),
            };
            let ix = grid.index(point).ok_or(MapError::OutOfBounds {
                x: point.x,
                y: point.y,
                width,
                height,
            })?;
            if seen[ix] {
                return Err(MapError::DuplicateCell {
                    x: point.x,
                    y: point.y,
                });
            }
            seen[ix] = true;
            grid.cells[ix] = record.category;
        }
        debug!(
            "Loaded {}x{} grid, {} of {} cells had records",
            width,
            height,
            seen.iter().filter(|s| **s).count(),
            seen.len()
        );
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    /// The category of `point`, or [None] if it lies outside the grid.
    pub fn get(&self, point: Point) -> Option<Category> {
        self.index(point).map(|ix| self.cells[ix])
    }

    pub fn set(&mut self, point: Point, category: Category) -> Result<()> {
        let ix = self.index(point).ok_or(MapError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[ix] = category;
        Ok(())
    }

    /// Sets every cell of the rectangle with top-left corner `(x, y)`; parts outside the grid
    /// are ignored.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, category: Category) {
        let clip = |start: i32, len: i32, size: usize| {
            let end = start.saturating_add(len).min(i32::try_from(size).unwrap_or(i32::MAX));
            start.max(0)..end
        };
        for cy in clip(y, h, self.height) {
            for cx in clip(x, w, self.width) {
                if let Some(ix) = self.index(Point::new(cx, cy)) {
                    self.cells[ix] = category;
                }
            }
        }
    }

    /// All cells in row-major `(y, x)` order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Category)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(ix, c)| {
            (
                Point::new((ix % width) as i32, (ix / width) as i32),
                *c,
            )
        })
    }

    /// Extracts the traversable road cells of this snapshot.
    pub fn road_set(&self) -> RoadSet {
        RoadSet::from_grid(self)
    }

    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts::from_categories(self.cells.iter().copied())
    }
}

impl fmt::Display for CityGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(Category::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for CityGrid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        CityGrid::from_rows(&rows)
    }
}
