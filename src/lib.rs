//! # maidenhead-rs
//!
//! Maidenhead grid square locators (`AA99aa`) to coordinates, and great-circle
//! bearing and distance between two locators, both short and long path.
//!
//! There are currently three main entry points.
//!
//! ### 1. `get_location` - Everything Between Two Stations
//!
//! ```
//! use maidenhead_rs::get_location;
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let loc = get_location("JN58td", "FN31pr")?;
//! println!(
//!     "SP {:.1}° {} km, LP {:.1}° {} km",
//!     loc.short_path_bearing,
//!     loc.short_path_distance_km,
//!     loc.long_path_bearing,
//!     loc.long_path_distance_km,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Locator Functions - One Figure at a Time
//!
//! ```
//! use maidenhead_rs::{latitude_of, longitude_of, short_path_distance};
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let lat = latitude_of("jn58TD")?;
//! let lon = longitude_of("jn58TD")?;
//! assert!((lat - 48.14583).abs() < 1e-4);
//! assert!((lon - 11.625).abs() < 1e-4);
//!
//! let d = short_path_distance("JN58td", "FN31pr")?;
//! println!("{} km / {} mi", d.km, d.miles);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GridSquare` - A Parsed Locator
//!
//! ```
//! use maidenhead_rs::GridSquare;
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let square: GridSquare = "JN58td".parse()?;
//! let rect = square.to_rect();
//! assert!(rect.min().x < square.longitude());
//! # Ok(())
//! # }
//! ```
//!
//! Invalid locators report the first grammar rule they break, and two-locator
//! queries say which side was at fault:
//!
//! ```
//! use maidenhead_rs::{Side, ValidationRule, short_path_bearing};
//!
//! let err = short_path_bearing("JN58td", "JN5xtd").unwrap_err();
//! assert_eq!(err.side(), Some(Side::Remote));
//! assert_eq!(err.rule(), ValidationRule::FourthChar);
//! ```

pub mod coord;
pub mod error;
pub mod geodesy;
pub mod grid_square;
pub mod index;
pub mod location;

pub use coord::{Coordinate, cell_bounds, coordinates_of, latitude_of, longitude_of};
pub use error::{MaidenheadError, PathStep, Result, Side, ValidationRule};
pub use geodesy::{
    Distance, bearing, bearing_between, haversine_distance, long_path_bearing,
    long_path_distance, short_path_bearing, short_path_distance,
};
pub use grid_square::GridSquare;
pub use index::{
    EARTH_CIRCUMFERENCE_KM, EARTH_RADIUS_KM, KM_TO_MILES, canonicalize, normalize, validate,
};
pub use location::{Location, get_location};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_workflow() -> Result<()> {
        let loc = get_location("JN58TD", "FN31pr")?;

        assert_eq!(loc.local_grid_square, "JN58TD");
        assert_eq!(loc.remote_grid_square, "FN31pr");

        let local = GridSquare::parse(&loc.local_grid_square)?;
        let remote = GridSquare::parse(&loc.remote_grid_square)?;
        assert_eq!(local.bearing_to(&remote), loc.short_path_bearing);
        assert_eq!(local.distance_to(&remote).km as i64, loc.short_path_distance_km);
        Ok(())
    }

    #[test]
    fn test_bearing_reciprocity_across_locators() -> Result<()> {
        let pairs = [
            ("JN58td", "FN31pr"),
            ("AA00aa", "RR99xx"),
            ("IO91wm", "QF56od"),
            ("JJ00aa", "JJ00ab"),
            ("PM95vq", "CM87wj"),
        ];

        for (local, remote) in pairs {
            let sp = short_path_bearing(local, remote)?;
            let lp = long_path_bearing(local, remote)?;
            assert!(((sp + 180.0) % 360.0 - lp).abs() <= 0.1 + 1e-9, "{local}->{remote}");
            assert!((0.0..360.0).contains(&lp));
        }
        Ok(())
    }

    #[test]
    fn test_distance_complementarity_across_locators() -> Result<()> {
        let pairs = [
            ("JN58td", "FN31pr"),
            ("IO91wm", "QF56od"),
            ("JJ00aa", "JJ00ab"),
            ("PM95vq", "CM87wj"),
        ];

        for (local, remote) in pairs {
            let sp = short_path_distance(local, remote)?;
            let lp = long_path_distance(local, remote)?;
            assert!(sp.km > 0.0, "{local}->{remote}");
            assert!(((sp.km + lp.km) - EARTH_CIRCUMFERENCE_KM.ceil()).abs() <= 2.0);
            assert_eq!(sp.miles, (sp.km * KM_TO_MILES).ceil());
            assert_eq!(lp.miles, (lp.km * KM_TO_MILES).ceil());
        }
        Ok(())
    }

    #[test]
    fn test_normalize_then_validate() -> Result<()> {
        assert!(validate("an58td").is_err());
        validate(&normalize("an58td"))?;
        Ok(())
    }
}
