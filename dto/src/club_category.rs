use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ClubCategory {
    RoadRunner,
    Womens,
    Trail,
    Endurance,
    City,
}

#[derive(Debug, Error, PartialEq)]
pub enum CategoryError {
    #[error("No category matches this index [index: {0}]")]
    UnknownIndex(i32),
    #[error("No category matches this name [name: {0}]")]
    UnknownName(String),
}

impl ClubCategory {
    /// Every category, ordered by index.
    pub const ALL: [ClubCategory; 5] = [
        ClubCategory::RoadRunner,
        ClubCategory::Womens,
        ClubCategory::Trail,
        ClubCategory::Endurance,
        ClubCategory::City,
    ];

    /// Position of the category, as used by listing filters.
    pub fn index(&self) -> i32 {
        match self {
            ClubCategory::RoadRunner => 0,
            ClubCategory::Womens => 1,
            ClubCategory::Trail => 2,
            ClubCategory::Endurance => 3,
            ClubCategory::City => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClubCategory::RoadRunner => "Road runner",
            ClubCategory::Womens => "Women's",
            ClubCategory::Trail => "Trail",
            ClubCategory::Endurance => "Endurance",
            ClubCategory::City => "City",
        }
    }
}

impl Display for ClubCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<i32> for ClubCategory {
    type Error = CategoryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ClubCategory::ALL
            .into_iter()
            .find(|category| category.index() == value)
            .ok_or(CategoryError::UnknownIndex(value))
    }
}

impl FromStr for ClubCategory {
    type Err = CategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ClubCategory::ALL
            .into_iter()
            .find(|category| category.to_string() == value)
            .ok_or_else(|| CategoryError::UnknownName(value.to_owned()))
    }
}
