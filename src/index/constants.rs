/// Rounding scale for derived coordinates (5 decimal places, roughly 1.1 m)
pub(crate) const COORD_ROUNDING: f64 = 100_000.0;

/// Rounding scale for bearings (0.1 degree)
pub(crate) const BEARING_ROUNDING: f64 = 10.0;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres to statute miles
pub const KM_TO_MILES: f64 = 0.621371;

/// Length of a Maidenhead locator
pub const LOCATOR_LENGTH: usize = 6;

/// Field size in degrees (longitude, latitude)
pub const FIELD_WIDTH: f64 = 20.0;
pub const FIELD_HEIGHT: f64 = 10.0;

/// Square size in degrees (longitude, latitude)
pub const SQUARE_WIDTH: f64 = 2.0;
pub const SQUARE_HEIGHT: f64 = 1.0;

/// Subsquare size in degrees (5 by 2.5 arc minutes)
pub const SUBSQUARE_WIDTH: f64 = 5.0 / 60.0;
pub const SUBSQUARE_HEIGHT: f64 = 2.5 / 60.0;

/// Origin of the grid, south-west corner of field AA
pub const LONGITUDE_ORIGIN: f64 = -180.0;
pub const LATITUDE_ORIGIN: f64 = -90.0;

/// Great-circle circumference on a sphere of `EARTH_RADIUS_KM`
pub const EARTH_CIRCUMFERENCE_KM: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KM;
