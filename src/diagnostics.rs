//! Reports about grids and queries: category census, coordinate sanity checks for stored cell
//! records and side-by-side runs of both search algorithms.
use core::fmt;

use crate::category::Category;
use crate::city_grid::{CellRecord, CityGrid};
use crate::solver::Algorithm;
use crate::{Path, Point};

/// Number of cells per [Category].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub road: usize,
    pub building: usize,
    pub park: usize,
    pub water: usize,
    pub other: usize,
}

impl CategoryCounts {
    pub fn from_categories<I: IntoIterator<Item = Category>>(categories: I) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for c in categories {
            *counts.get_mut(c) += 1;
        }
        counts
    }

    fn get_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Road => &mut self.road,
            Category::Building => &mut self.building,
            Category::Park => &mut self.park,
            Category::Water => &mut self.water,
            Category::Other => &mut self.other,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Road => self.road,
            Category::Building => self.building,
            Category::Park => self.park,
            Category::Water => self.water,
            Category::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total cells: {}", self.total())?;
        for c in Category::ALL {
            writeln!(f, "  {}: {}", c, self.get(c))?;
        }
        Ok(())
    }
}

/// Compares stored cell records against the dimensions they are supposed to fit in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateSurvey {
    pub width: usize,
    pub height: usize,
    pub records: usize,
    /// Largest coordinates seen, [None] when there are no records.
    pub max_x: Option<i32>,
    pub max_y: Option<i32>,
    pub out_of_bounds: usize,
}

impl CoordinateSurvey {
    pub fn of<'a, I>(width: usize, height: usize, records: I) -> CoordinateSurvey
    where
        I: IntoIterator<Item = &'a CellRecord>,
    {
        let mut survey = CoordinateSurvey {
            width,
            height,
            records: 0,
            max_x: None,
            max_y: None,
            out_of_bounds: 0,
        };
        for r in records {
            survey.records += 1;
            survey.max_x = survey.max_x.max(Some(r.x));
            survey.max_y = survey.max_y.max(Some(r.y));
            let inside = r.x >= 0
                && r.y >= 0
                && (r.x as usize) < width
                && (r.y as usize) < height;
            if !inside {
                survey.out_of_bounds += 1;
            }
        }
        survey
    }

    /// True if some record lies beyond the far edge of the declared dimensions, which usually
    /// means the dimensions are too small or the axes were swapped.
    pub fn dimensions_suspect(&self) -> bool {
        let (w, h) = self.suggested_dimensions();
        w != self.width || h != self.height
    }

    /// The declared dimensions grown just enough to hold every record.
    pub fn suggested_dimensions(&self) -> (usize, usize) {
        let fit = |declared: usize, max: Option<i32>| match max {
            Some(m) if m >= 0 => declared.max(m as usize + 1),
            _ => declared,
        };
        (fit(self.width, self.max_x), fit(self.height, self.max_y))
    }
}

impl fmt::Display for CoordinateSurvey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |m: Option<i32>| m.map_or_else(|| "-".to_owned(), |v| v.to_string());
        writeln!(f, "Records: {}", self.records)?;
        writeln!(f, "Dimensions: {}x{}", self.width, self.height)?;
        writeln!(f, "Max coords in data: ({}, {})", show(self.max_x), show(self.max_y))?;
        writeln!(f, "Records outside bounds: {}", self.out_of_bounds)?;
        if self.dimensions_suspect() {
            let (w, h) = self.suggested_dimensions();
            writeln!(f, "Dimensions may be incorrect, data fits {}x{}", w, h)?;
        }
        Ok(())
    }
}

/// Outcome of one algorithm in an [AlgorithmComparison].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub path: Option<Path>,
    /// Total step cost of `path`.
    pub cost: Option<i32>,
    /// Length of the exploration trace.
    pub explored: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmComparison {
    pub start: Point,
    pub end: Point,
    pub road_count: usize,
    pub start_is_road: bool,
    pub end_is_road: bool,
    pub runs: Vec<AlgorithmRun>,
}

/// Runs every [Algorithm] on the same query and records path and exploration effort.
pub fn compare_algorithms(grid: &CityGrid, start: Point, end: Point) -> AlgorithmComparison {
    let roads = grid.road_set();
    let runs = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let mut trace = Vec::new();
            let path = algorithm.solve_traced(&roads, start, end, &mut trace);
            AlgorithmRun {
                algorithm,
                cost: path.as_ref().map(|p| algorithm.get_path_cost(p)),
                path,
                explored: trace.len(),
            }
        })
        .collect();
    AlgorithmComparison {
        start,
        end,
        road_count: roads.len(),
        start_is_road: roads.contains(&start),
        end_is_road: roads.contains(&end),
        runs,
    }
}

impl fmt::Display for AlgorithmComparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let road = |is_road: bool| if is_road { "is a road" } else { "is not a road" };
        writeln!(f, "Found {} road cells", self.road_count)?;
        writeln!(f, "Start {} {}", self.start, road(self.start_is_road))?;
        writeln!(f, "End {} {}", self.end, road(self.end_is_road))?;
        for run in &self.runs {
            match &run.path {
                Some(path) => {
                    let points: Vec<String> = path.iter().map(Point::to_string).collect();
                    writeln!(f, "{}: {}", run.algorithm, points.join(" -> "))?;
                    writeln!(f, "  path length: {}", path.len())?;
                    if let Some(cost) = run.cost {
                        writeln!(f, "  path cost: {}", cost)?;
                    }
                }
                None => writeln!(f, "{}: no path found", run.algorithm)?,
            }
            writeln!(f, "  nodes explored: {}", run.explored)?;
        }
        Ok(())
    }
}
