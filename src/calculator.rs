use tracing::{debug, trace, warn};

use crate::config::DistanceConfig;
use crate::error::{DistanceError, Result};
use crate::formula::Formula;
use crate::geo::Coordinate;
use crate::unit::Unit;

/// Calculates the distance between GPS coordinates using the configured
/// formula, reported in the configured unit.
///
/// Setters take `&mut self`; share an instance across threads only behind
/// a lock, or give each task its own calculator.
///
/// ```
/// use gps_distance::{DistanceCalculator, Formula, Unit};
///
/// let mut distance = DistanceCalculator::new();
/// distance.set_formula(Formula::Haversine).set_unit(Unit::Metres);
/// let meters = distance.between(37.331741, -122.030333, 37.422546, -122.084250);
/// assert_eq!(meters, 11164.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceCalculator {
    formula: Formula,
    unit: Unit,
}

impl DistanceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DistanceConfig) -> Self {
        debug!(formula = %config.formula, unit = %config.unit, "loaded distance config");
        Self {
            formula: config.formula,
            unit: config.unit,
        }
    }

    pub fn config(&self) -> DistanceConfig {
        DistanceConfig {
            formula: self.formula,
            unit: self.unit,
        }
    }

    pub fn with_formula(mut self, formula: Formula) -> Self {
        self.set_formula(formula);
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.set_unit(unit);
        self
    }

    pub fn formula(&self) -> Formula {
        self.formula
    }

    pub fn set_formula(&mut self, formula: Formula) -> &mut Self {
        debug!(%formula, "distance formula set");
        self.formula = formula;
        self
    }

    /// Sets the formula from its name (`"vincenty"` or `"haversine"`).
    /// On error the current formula is kept.
    pub fn set_formula_by_name(&mut self, name: &str) -> Result<&mut Self> {
        let formula = name.parse::<Formula>().inspect_err(|_| {
            warn!(name, "rejected distance formula");
        })?;
        Ok(self.set_formula(formula))
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: Unit) -> &mut Self {
        debug!(%unit, "distance unit set");
        self.unit = unit;
        self
    }

    /// Sets the unit from its symbol (`"cm"`, `"in"`, `"ft"`, `"m"`, `"km"`, `"mi"`).
    /// On error the current unit is kept.
    pub fn set_unit_by_name(&mut self, name: &str) -> Result<&mut Self> {
        let unit = name.parse::<Unit>().inspect_err(|_| {
            warn!(name, "rejected distance unit");
        })?;
        Ok(self.set_unit(unit))
    }

    /// Distance between point A and point B, in decimal degrees, in the current unit.
    ///
    /// The formula result is truncated to whole meters before conversion.
    pub fn between(&self, lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
        self.between_coordinates(Coordinate::new(lat_a, lon_a), Coordinate::new(lat_b, lon_b))
    }

    pub fn between_coordinates(&self, a: Coordinate, b: Coordinate) -> f64 {
        let meters = self.formula.distance_meters(a, b);
        trace!(formula = %self.formula, unit = %self.unit, meters, "computed distance");
        self.unit.convert(meters)
    }

    /// Like [`between`](Self::between), but rejects NaN and infinite inputs
    /// instead of returning a meaningless number.
    pub fn try_between(&self, lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> Result<f64> {
        let args = [("lat_a", lat_a), ("lon_a", lon_a), ("lat_b", lat_b), ("lon_b", lon_b)];
        if let Some(&(name, value)) = args.iter().find(|(_, value)| !value.is_finite()) {
            warn!(name, value, "rejected coordinate");
            return Err(DistanceError::InvalidArgument { name, value });
        }
        Ok(self.between(lat_a, lon_a, lat_b, lon_b))
    }
}

impl From<DistanceConfig> for DistanceCalculator {
    fn from(config: DistanceConfig) -> Self {
        Self::from_config(&config)
    }
}
