//! Loads city maps and routing scenarios stored next to this crate.
//!
//! Maps live in `maps/<group>/<name>.map`: a short header (`type`, `height`, `width`, `map`)
//! followed by one row of land-use symbols per line. Scenarios live in
//! `scenarios/<group>/<name>.map.scen`: a `version` line followed by tab-separated records.
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One routing query against a map. `hops` is the number of steps of a shortest road path, or
/// `-1` if no path exists.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub id: u32,
    pub map: String,
    pub width: usize,
    pub height: usize,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub hops: i64,
}

impl Scenario {
    pub fn start(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    pub fn goal(&self) -> (i32, i32) {
        (self.x2, self.y2)
    }

    /// Expected path length in steps, [None] when the goal is unreachable.
    pub fn expected_hops(&self) -> Option<usize> {
        usize::try_from(self.hops).ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityMap {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub map: CityMap,
    pub scenarios: Vec<Scenario>,
}

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn parse_map(map_str: &str) -> CityMap {
    let mut lines = map_str.lines();
    let mut width = None;
    let mut height = None;
    for line in lines.by_ref() {
        let line = line.trim();
        if line == "map" {
            break;
        }
        let (key, value) = line.split_once(' ').expect("Malformed map header line");
        match key {
            "width" => width = Some(value.parse::<usize>().expect("Could not parse width")),
            "height" => height = Some(value.parse::<usize>().expect("Could not parse height")),
            _ => {}
        }
    }
    let rows: Vec<String> = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect();
    let width = width.expect("Map header has no width");
    let height = height.expect("Map header has no height");
    assert_eq!(rows.len(), height, "Map has the wrong number of rows");
    assert!(
        rows.iter().all(|r| r.chars().count() == width),
        "Map rows do not match the declared width"
    );
    CityMap {
        width,
        height,
        rows,
    }
}

fn parse_scenarios(scen_str: &str) -> Vec<Scenario> {
    // Skip the version line
    let data = scen_str.lines().skip(1).collect::<Vec<_>>().join("\n");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(data.as_bytes());
    csv_reader
        .deserialize()
        .map(|result| result.expect("Could not parse scenario record"))
        .collect()
}

fn load_fixture(name: &str) -> Fixture {
    let root = fixture_root();
    let map_str = fs::read_to_string(root.join(format!("maps/{}.map", name)))
        .expect("Could not read map file");
    let scen_str = fs::read_to_string(root.join(format!("scenarios/{}.map.scen", name)))
        .expect("Could not read scenario file");
    let map = parse_map(&map_str);
    let scenarios = parse_scenarios(&scen_str);
    for s in &scenarios {
        assert_eq!(
            (s.width, s.height),
            (map.width, map.height),
            "Scenario {} of {} disagrees with the map size",
            s.id,
            name
        );
    }
    Fixture {
        name: name.to_owned(),
        map,
        scenarios,
    }
}

/// Names of all available fixtures, such as `city/downtown`, in sorted order.
pub fn get_fixture_names() -> Vec<String> {
    let root = fixture_root().join("maps");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let rel_path = entry
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of the map directory");
        if rel_path.components().count() >= 2 {
            let parts: Vec<String> = rel_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            let joined = parts.join("/");
            if let Some(name) = joined.strip_suffix(".map") {
                names.push(name.to_owned());
            }
        }
    }
    names
}

pub fn get_fixture(name: &str) -> Fixture {
    let names = get_fixture_names();
    if names.iter().any(|n| n == name) {
        load_fixture(name)
    } else {
        panic!("Could not load fixture {}!", name);
    }
}
