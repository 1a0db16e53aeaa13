//! Calculate the distance between GPS coordinates.
//!
//! A [`DistanceCalculator`] holds a [`Formula`] (default
//! [`Formula::Vincenty`]) and an output [`Unit`] (default
//! [`Unit::Kilometres`]). Both formulas model the Earth as a sphere of radius
//! [`EARTH_RADIUS_METERS`] and truncate to whole meters before converting.
//!
//! ```
//! use gps_distance::{DistanceCalculator, Unit};
//!
//! let distance = DistanceCalculator::new().with_unit(Unit::Miles);
//! assert_eq!(distance.between(37.331741, -122.030333, 37.422546, -122.084250), 6.936987987488);
//! ```

mod calculator;
mod config;
mod error;
mod formula;
mod geo;
mod unit;

pub use calculator::DistanceCalculator;
pub use config::DistanceConfig;
pub use error::{DistanceError, Result, Setting};
pub use formula::Formula;
pub use geo::{haversine_meters, vincenty_meters, Coordinate, EARTH_RADIUS_METERS};
pub use unit::Unit;
