use crate::error::Result;
use crate::index::constants::{
    COORD_ROUNDING, FIELD_HEIGHT, FIELD_WIDTH, LATITUDE_ORIGIN, LONGITUDE_ORIGIN, SQUARE_HEIGHT,
    SQUARE_WIDTH, SUBSQUARE_HEIGHT, SUBSQUARE_WIDTH,
};
use crate::index::canonicalize;
use geo_types::{Point, Rect, coord};
use tracing::trace;

/// Trait for types that can provide longitude/latitude in degrees.
///
/// Implemented for `(f64, f64)` tuples as `(lon, lat)` and `geo_types::Point<f64>`.
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn lon(&self) -> f64;
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

/// One axis of the grid: which characters index it and how big each step is.
struct Axis {
    field: usize,
    square: usize,
    subsquare: usize,
    field_size: f64,
    square_size: f64,
    subsquare_size: f64,
    origin: f64,
}

const LONGITUDE: Axis = Axis {
    field: 0,
    square: 2,
    subsquare: 4,
    field_size: FIELD_WIDTH,
    square_size: SQUARE_WIDTH,
    subsquare_size: SUBSQUARE_WIDTH,
    origin: LONGITUDE_ORIGIN,
};

const LATITUDE: Axis = Axis {
    field: 1,
    square: 3,
    subsquare: 5,
    field_size: FIELD_HEIGHT,
    square_size: SQUARE_HEIGHT,
    subsquare_size: SUBSQUARE_HEIGHT,
    origin: LATITUDE_ORIGIN,
};

impl Axis {
    /// South-west corner of the subsquare on this axis. `locator` must be canonical.
    fn corner(&self, locator: &[u8]) -> f64 {
        let field = f64::from(locator[self.field] - b'A');
        let square = f64::from(locator[self.square] - b'0');
        let subsquare = f64::from(locator[self.subsquare] - b'a');

        field * self.field_size + square * self.square_size + subsquare * self.subsquare_size
            + self.origin
    }

    fn center(&self, locator: &[u8]) -> f64 {
        round_coord(self.corner(locator) + self.subsquare_size / 2.0)
    }
}

fn round_coord(value: f64) -> f64 {
    (value * COORD_ROUNDING).round() / COORD_ROUNDING
}

/// Latitude of the center of a locator's subsquare, rounded to 5 decimal places.
///
/// Input is case-insensitive.
///
/// # Example
/// ```
/// use maidenhead_rs::latitude_of;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let lat = latitude_of("JN58td")?;
/// assert!((lat - 48.14583).abs() < 1e-4);
/// # Ok(())
/// # }
/// ```
pub fn latitude_of(locator: &str) -> Result<f64> {
    let canonical = canonicalize(locator)?;
    let lat = LATITUDE.center(canonical.as_bytes());
    trace!(locator = %canonical, lat = lat, "derived latitude");
    Ok(lat)
}

/// Longitude of the center of a locator's subsquare, rounded to 5 decimal places.
///
/// Input is case-insensitive.
pub fn longitude_of(locator: &str) -> Result<f64> {
    let canonical = canonicalize(locator)?;
    let lon = LONGITUDE.center(canonical.as_bytes());
    trace!(locator = %canonical, lon = lon, "derived longitude");
    Ok(lon)
}

/// Center of a locator's subsquare as a point (x = longitude, y = latitude).
pub fn coordinates_of(locator: &str) -> Result<Point<f64>> {
    let canonical = canonicalize(locator)?;
    Ok(center_of_canonical(&canonical))
}

/// The subsquare rectangle a locator names, in degrees (unrounded corners).
pub fn cell_bounds(locator: &str) -> Result<Rect<f64>> {
    let canonical = canonicalize(locator)?;
    Ok(bounds_of_canonical(&canonical))
}

/// Cell center of a locator that already passed `canonicalize`.
pub(crate) fn center_of_canonical(canonical: &str) -> Point<f64> {
    let bytes = canonical.as_bytes();
    let center = Point::new(LONGITUDE.center(bytes), LATITUDE.center(bytes));
    trace!(locator = %canonical, lon = center.x(), lat = center.y(), "derived center");
    center
}

/// Cell bounds of a locator that already passed `canonicalize`.
pub(crate) fn bounds_of_canonical(canonical: &str) -> Rect<f64> {
    let bytes = canonical.as_bytes();
    let min_lon = LONGITUDE.corner(bytes);
    let min_lat = LATITUDE.corner(bytes);

    Rect::new(
        coord! { x: min_lon, y: min_lat },
        coord! { x: min_lon + SUBSQUARE_WIDTH, y: min_lat + SUBSQUARE_HEIGHT },
    )
}
