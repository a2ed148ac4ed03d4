pub mod constants;
mod locator;

pub use constants::{
    EARTH_CIRCUMFERENCE_KM, EARTH_RADIUS_KM, FIELD_HEIGHT, FIELD_WIDTH, KM_TO_MILES,
    LATITUDE_ORIGIN, LOCATOR_LENGTH, LONGITUDE_ORIGIN, SQUARE_HEIGHT, SQUARE_WIDTH,
    SUBSQUARE_HEIGHT, SUBSQUARE_WIDTH,
};
pub use locator::{canonicalize, normalize, validate};
