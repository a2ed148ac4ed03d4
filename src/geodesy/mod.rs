use crate::coord::{Coordinate, coordinates_of};
use crate::error::{PathStep, Result, Side};
use crate::index::constants::{
    BEARING_ROUNDING, EARTH_CIRCUMFERENCE_KM, EARTH_RADIUS_KM, KM_TO_MILES,
};
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A distance in whole kilometres and whole miles.
///
/// Both values are integral. Miles are derived from the already rounded
/// kilometre value, not from the raw great-circle length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub km: f64,
    pub miles: f64,
}

impl Distance {
    /// Rounds `km` up and derives miles from the rounded figure.
    pub fn from_km(km: f64) -> Self {
        let km = km.ceil();
        Self {
            km,
            miles: (km * KM_TO_MILES).ceil(),
        }
    }
}

fn round_bearing(degrees: f64) -> f64 {
    (degrees * BEARING_ROUNDING).round() / BEARING_ROUNDING
}

/// Initial great-circle bearing from one point to another.
///
/// All angles are in degrees. The result is in `[0, 360)` rounded to 0.1°.
/// Coincident points give 0.
///
/// # Example
/// ```
/// use maidenhead_rs::bearing;
///
/// // London to New York
/// let b = bearing(51.5074, -0.1278, 40.7128, -74.0060);
/// assert!((b - 288.3).abs() < 1.0);
/// ```
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let mut degrees = y.atan2(x).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }

    // 359.96 and up rounds to 360.0, which is 0.0 on the compass
    round_bearing(degrees) % 360.0
}

/// [`bearing`] for any pair of [`Coordinate`]s.
pub fn bearing_between<C: Coordinate>(from: &C, to: &C) -> f64 {
    bearing(from.lat(), from.lon(), to.lat(), to.lon())
}

/// Haversine distance between two points on a sphere of `EARTH_RADIUS_KM`.
pub fn haversine_distance<C: Coordinate>(from: &C, to: &C) -> Distance {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.lon() - from.lon()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Distance::from_km(EARTH_RADIUS_KM * c)
}

/// Resolves both locators to their cell centers, tagging failures with the side.
fn endpoints(local: &str, remote: &str) -> Result<(Point<f64>, Point<f64>)> {
    let from = coordinates_of(local).map_err(|e| e.on_side(Side::Local))?;
    let to = coordinates_of(remote).map_err(|e| e.on_side(Side::Remote))?;
    Ok((from, to))
}

/// Short-path bearing from the local locator to the remote one.
///
/// # Errors
///
/// [`MaidenheadError::InvalidSide`](crate::MaidenheadError::InvalidSide) naming
/// which locator was rejected.
pub fn short_path_bearing(local: &str, remote: &str) -> Result<f64> {
    let (from, to) = endpoints(local, remote)?;
    Ok(bearing_between(&from, &to))
}

/// Long-path bearing, the reciprocal of the short-path bearing.
///
/// # Errors
///
/// The short-path failure wrapped in
/// [`MaidenheadError::Calculation`](crate::MaidenheadError::Calculation) for
/// [`PathStep::ShortPathBearing`].
pub fn long_path_bearing(local: &str, remote: &str) -> Result<f64> {
    let short =
        short_path_bearing(local, remote).map_err(|e| e.during(PathStep::ShortPathBearing))?;

    let mut long = (short + 180.0) % 360.0;
    if long < 0.0 {
        long += 360.0;
    }
    Ok(round_bearing(long))
}

/// Short-path great-circle distance between two locators.
///
/// # Example
/// ```
/// use maidenhead_rs::short_path_distance;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let d = short_path_distance("JN58td", "FN31pr")?;
/// assert_eq!(d.miles, (d.km * 0.621371).ceil());
/// # Ok(())
/// # }
/// ```
pub fn short_path_distance(local: &str, remote: &str) -> Result<Distance> {
    let (from, to) = endpoints(local, remote)?;
    Ok(haversine_distance(&from, &to))
}

/// Long-path distance, the rest of the great circle after the short path.
pub fn long_path_distance(local: &str, remote: &str) -> Result<Distance> {
    let short = short_path_distance(local, remote)?;
    Ok(Distance::from_km(EARTH_CIRCUMFERENCE_KM - short.km))
}
