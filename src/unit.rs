use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, Setting};

/// Unit of length a distance is reported in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Unit {
    Centimetres,
    Inches,
    Feet,
    Metres,
    #[default]
    Kilometres,
    Miles,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Centimetres,
        Unit::Inches,
        Unit::Feet,
        Unit::Metres,
        Unit::Kilometres,
        Unit::Miles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Centimetres => "cm",
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Metres => "m",
            Unit::Kilometres => "km",
            Unit::Miles => "mi",
        }
    }

    pub fn multiplier_from_metres(&self) -> f64 {
        match self {
            Unit::Centimetres => 100.0,
            Unit::Inches => 39.3700787,
            Unit::Feet => 3.2808399,
            Unit::Metres => 1.0,
            Unit::Kilometres => 0.001,
            Unit::Miles => 0.000621371192,
        }
    }

    pub fn convert(&self, metres: f64) -> f64 {
        metres * self.multiplier_from_metres()
    }
}

impl FromStr for Unit {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| DistanceError::invalid(Setting::Unit, s))
    }
}

impl TryFrom<String> for Unit {
    type Error = DistanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for &'static str {
    fn from(unit: Unit) -> Self {
        unit.as_str()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_recognised_names() {
        let names = ["cm", "in", "ft", "m", "km", "mi"];
        for (name, unit) in names.iter().zip(Unit::ALL) {
            assert_eq!(name.parse::<Unit>(), Ok(unit));
            assert_eq!(unit.to_string(), *name);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["", "KM", "metres", "yd", "nmi"] {
            assert_eq!(
                name.parse::<Unit>(),
                Err(DistanceError::InvalidConfiguration {
                    setting: Setting::Unit,
                    value: name.to_string(),
                })
            );
        }
    }

    #[test]
    fn default_is_kilometres() {
        assert_eq!(Unit::default(), Unit::Kilometres);
    }

    #[test]
    fn metres_is_identity() {
        assert_eq!(Unit::Metres.convert(12345.0), 12345.0);
    }

    #[test]
    fn conversions_agree_with_each_other() {
        // 1 ft = 12 in, 1 mi = 5280 ft
        let metres = 1609.344;
        assert_relative_eq!(Unit::Inches.convert(metres), 12.0 * Unit::Feet.convert(metres), max_relative = 1e-7);
        assert_relative_eq!(Unit::Feet.convert(metres), 5280.0 * Unit::Miles.convert(metres), max_relative = 1e-7);
        assert_relative_eq!(Unit::Centimetres.convert(metres), 160934.4, max_relative = 1e-12);
        assert_relative_eq!(Unit::Kilometres.convert(metres), 1.609344, max_relative = 1e-12);
    }
}
