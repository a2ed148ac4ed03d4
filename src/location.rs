use crate::error::{PathStep, Result};
use crate::geodesy::{
    long_path_bearing, long_path_distance, short_path_bearing, short_path_distance,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bearing and distance between two stations, both the short and the long way round.
///
/// The locators are echoed exactly as they were passed in, not normalized.
///
/// # Example
///
/// ```
/// use maidenhead_rs::get_location;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let loc = get_location("JN58TD", "FN31pr")?;
/// assert_eq!(loc.local_grid_square, "JN58TD");
/// println!("{:.1}° {} km", loc.short_path_bearing, loc.short_path_distance_km);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "localGridSquare")]
    pub local_grid_square: String,
    #[serde(rename = "remoteGridSquare")]
    pub remote_grid_square: String,
    /// Degrees in `[0, 360)`, 0.1° precision
    pub short_path_bearing: f64,
    /// Degrees in `[0, 360)`, 0.1° precision
    pub long_path_bearing: f64,
    pub short_path_distance_km: i64,
    pub short_path_distance_miles: i64,
    pub long_path_distance_km: i64,
    pub long_path_distance_miles: i64,
}

/// Computes every path figure between a local and a remote locator.
///
/// Steps run in a fixed order: short path bearing, short path distance, long
/// path bearing, long path distance. The first failure is returned wrapped in
/// [`MaidenheadError::Calculation`](crate::MaidenheadError::Calculation) naming
/// the step; no partial result is produced.
pub fn get_location(local: &str, remote: &str) -> Result<Location> {
    let sp_bearing =
        short_path_bearing(local, remote).map_err(|e| e.during(PathStep::ShortPathBearing))?;
    let sp_distance =
        short_path_distance(local, remote).map_err(|e| e.during(PathStep::ShortPathDistance))?;
    let lp_bearing =
        long_path_bearing(local, remote).map_err(|e| e.during(PathStep::LongPathBearing))?;
    let lp_distance =
        long_path_distance(local, remote).map_err(|e| e.during(PathStep::LongPathDistance))?;

    let location = Location {
        local_grid_square: local.to_string(),
        remote_grid_square: remote.to_string(),
        short_path_bearing: sp_bearing,
        long_path_bearing: lp_bearing,
        short_path_distance_km: sp_distance.km as i64,
        short_path_distance_miles: sp_distance.miles as i64,
        long_path_distance_km: lp_distance.km as i64,
        long_path_distance_miles: lp_distance.miles as i64,
    };

    debug!(
        local = %local,
        remote = %remote,
        short_path_bearing = location.short_path_bearing,
        short_path_km = location.short_path_distance_km,
        "computed location"
    );

    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MaidenheadError, Side};
    use crate::index::EARTH_CIRCUMFERENCE_KM;

    #[test]
    fn test_get_location() -> Result<()> {
        let loc = get_location("JN58TD", "FN31pr")?;

        assert_eq!(loc.local_grid_square, "JN58TD");
        assert_eq!(loc.remote_grid_square, "FN31pr");
        assert!((0.0..360.0).contains(&loc.short_path_bearing));
        assert!((0.0..360.0).contains(&loc.long_path_bearing));
        assert!(loc.short_path_distance_km > 0);
        assert!(loc.long_path_distance_km > 0);
        assert!(loc.short_path_distance_miles > 0);
        assert!(loc.long_path_distance_miles > 0);
        Ok(())
    }

    #[test]
    fn test_get_location_matches_sub_computations() -> Result<()> {
        let loc = get_location("JN58td", "FN31pr")?;
        let sp = short_path_distance("JN58td", "FN31pr")?;
        let lp = long_path_distance("JN58td", "FN31pr")?;

        assert_eq!(loc.short_path_bearing, short_path_bearing("JN58td", "FN31pr")?);
        assert_eq!(loc.long_path_bearing, long_path_bearing("JN58td", "FN31pr")?);
        assert_eq!(loc.short_path_distance_km, sp.km as i64);
        assert_eq!(loc.long_path_distance_miles, lp.miles as i64);

        let total = loc.short_path_distance_km + loc.long_path_distance_km;
        assert!((total as f64 - EARTH_CIRCUMFERENCE_KM.ceil()).abs() <= 2.0);
        Ok(())
    }

    #[test]
    fn test_get_location_error_propagation() {
        let err = get_location("BADGRID", "FN31pr").unwrap_err();
        assert_eq!(err.step(), Some(PathStep::ShortPathBearing));
        assert_eq!(err.side(), Some(Side::Local));
        assert!(err.to_string().starts_with("failed to calculate short path bearing"));

        let err = get_location("JN58td", "BADGRID").unwrap_err();
        assert_eq!(err.side(), Some(Side::Remote));
        assert!(matches!(err, MaidenheadError::Calculation { .. }));
    }

    #[test]
    fn test_location_json_field_names() -> Result<()> {
        let loc = get_location("JN58td", "FN31pr")?;
        let json = serde_json::to_value(&loc).unwrap();

        assert_eq!(json["localGridSquare"], "JN58td");
        assert_eq!(json["remoteGridSquare"], "FN31pr");
        assert_eq!(json["short_path_distance_km"], loc.short_path_distance_km);
        assert_eq!(json["long_path_distance_miles"], loc.long_path_distance_miles);

        let back: Location = serde_json::from_value(json).unwrap();
        assert_eq!(back.local_grid_square, loc.local_grid_square);
        assert_eq!(back.long_path_distance_km, loc.long_path_distance_km);
        assert!((back.short_path_bearing - loc.short_path_bearing).abs() < 1e-9);
        Ok(())
    }
}
