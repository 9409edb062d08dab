use core::fmt;
use std::str::FromStr;

use log::warn;

use crate::error::MapError;

/// Land-use category of a single grid cell. Only [Category::Road] can be travelled over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Road,
    Building,
    Park,
    Water,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Road,
        Category::Building,
        Category::Park,
        Category::Water,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Road => "road",
            Category::Building => "building",
            Category::Park => "park",
            Category::Water => "water",
            Category::Other => "other",
        }
    }

    /// Single character used in text maps.
    pub fn symbol(&self) -> char {
        match self {
            Category::Road => 'R',
            Category::Building => 'B',
            Category::Park => 'P',
            Category::Water => 'W',
            Category::Other => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Category> {
        match symbol {
            'R' => Some(Category::Road),
            'B' => Some(Category::Building),
            'P' => Some(Category::Park),
            'W' => Some(Category::Water),
            '.' => Some(Category::Other),
            _ => None,
        }
    }

    /// Parses a stored label, falling back to [Category::Other] for anything unrecognised.
    pub fn from_label_lossy(label: &str) -> Category {
        label.parse().unwrap_or_else(|_| {
            warn!("Invalid category '{}', defaulting to 'other'", label);
            Category::Other
        })
    }

    pub fn is_traversable(&self) -> bool {
        matches!(self, Category::Road)
    }
}

impl FromStr for Category {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| MapError::UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
