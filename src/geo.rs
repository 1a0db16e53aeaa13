use serde::{Deserialize, Serialize};

/// Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn to_radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Great-circle distance using the atan2 form of the spherical law of cosines.
/// Input lat/lon in degrees. Output in whole meters, truncated.
///
/// Goes by "vincenty" but is not the iterative ellipsoidal method.
pub fn vincenty_meters(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();
    let dlon = lon2 - lon1;

    let p = (lat2.cos() * dlon.sin()).powi(2)
        + (lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos()).powi(2);
    let q = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    let angle = p.sqrt().atan2(q);

    (angle * EARTH_RADIUS_METERS).floor()
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in whole meters, truncated.
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let angle = 2.0 * h.sqrt().asin();

    (angle * EARTH_RADIUS_METERS).floor()
}
