use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, Setting};
use crate::geo::{self, Coordinate};

/// Method used to turn two coordinates into a distance in meters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Formula {
    #[default]
    Vincenty,
    Haversine,
}

impl Formula {
    pub const ALL: [Formula; 2] = [Formula::Vincenty, Formula::Haversine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Formula::Vincenty => "vincenty",
            Formula::Haversine => "haversine",
        }
    }

    /// Whole meters between `a` and `b`, truncated toward zero.
    pub fn distance_meters(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Formula::Vincenty => geo::vincenty_meters(a, b),
            Formula::Haversine => geo::haversine_meters(a, b),
        }
    }
}

impl FromStr for Formula {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::ALL
            .into_iter()
            .find(|formula| formula.as_str() == s)
            .ok_or_else(|| DistanceError::invalid(Setting::Formula, s))
    }
}

impl TryFrom<String> for Formula {
    type Error = DistanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Formula> for &'static str {
    fn from(formula: Formula) -> Self {
        formula.as_str()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
