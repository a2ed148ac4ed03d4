use crate::coord::{bounds_of_canonical, center_of_canonical};
use crate::error::{MaidenheadError, Result};
use crate::geodesy::{Distance, bearing_between, haversine_distance};
use crate::index::canonicalize;
use geo_types::{Point, Rect};
use std::fmt;
use std::str::FromStr;

/// A validated six-character Maidenhead locator.
///
/// Holds the canonical `AA99aa` text and the center of the subsquare it names.
///
/// # Example
///
/// ```
/// use maidenhead_rs::GridSquare;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let munich: GridSquare = "jn58TD".parse()?;
/// let new_haven = GridSquare::parse("FN31pr")?;
///
/// assert_eq!(munich.to_string(), "JN58td");
/// println!("{:.1}°", munich.bearing_to(&new_haven));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridSquare {
    /// Canonical locator text
    pub locator: String,
    /// Center of the subsquare, x = longitude, y = latitude (degrees)
    pub center: Point<f64>,
    bounds: Rect<f64>,
}

impl GridSquare {
    /// Parse a locator, accepting any letter case.
    pub fn parse(input: &str) -> Result<Self> {
        let locator = canonicalize(input)?;
        let center = center_of_canonical(&locator);
        let bounds = bounds_of_canonical(&locator);
        Ok(Self {
            locator,
            center,
            bounds,
        })
    }

    /// Center of the subsquare, x = longitude, y = latitude.
    pub fn center(&self) -> Point<f64> {
        self.center
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// The subsquare this locator names, as a lon/lat rectangle.
    pub fn to_rect(&self) -> Rect<f64> {
        self.bounds
    }

    /// Short-path bearing from this square's center to `other`'s.
    pub fn bearing_to(&self, other: &GridSquare) -> f64 {
        bearing_between(&self.center, &other.center)
    }

    /// Short-path distance from this square's center to `other`'s.
    pub fn distance_to(&self, other: &GridSquare) -> Distance {
        haversine_distance(&self.center, &other.center)
    }
}

impl FromStr for GridSquare {
    type Err = MaidenheadError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GridSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{cell_bounds, coordinates_of};
    use crate::error::ValidationRule;
    use crate::geodesy::{short_path_bearing, short_path_distance};

    #[test]
    fn test_parse() -> Result<()> {
        let square = GridSquare::parse("jn58TD")?;

        assert_eq!(square.locator, "JN58td");
        assert!((square.latitude() - 48.14583).abs() < 1e-9);
        assert!((square.longitude() - 11.625).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_matches_locator_functions() -> Result<()> {
        let square = GridSquare::parse("fn31PR")?;

        assert_eq!(square.center(), coordinates_of("FN31pr")?);
        assert_eq!(square.center().x(), square.longitude());
        assert_eq!(square.center().y(), square.latitude());
        assert_eq!(square.to_rect(), cell_bounds("FN31pr")?);
        Ok(())
    }

    #[test]
    fn test_same_locator_same_square() -> Result<()> {
        let a: GridSquare = "JN58TD".parse()?;
        let b: GridSquare = "jn58td".parse()?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let err = GridSquare::parse("JN58").unwrap_err();
        assert_eq!(err.rule(), ValidationRule::Length);
        assert!("SN58td".parse::<GridSquare>().is_err());
    }

    #[test]
    fn test_agrees_with_locator_functions() -> Result<()> {
        let local = GridSquare::parse("JN58td")?;
        let remote = GridSquare::parse("FN31pr")?;

        assert_eq!(local.bearing_to(&remote), short_path_bearing("JN58td", "FN31pr")?);
        assert_eq!(local.distance_to(&remote), short_path_distance("JN58td", "FN31pr")?);
        Ok(())
    }

    #[test]
    fn test_rect_surrounds_center() -> Result<()> {
        let square = GridSquare::parse("AA00aa")?;
        let rect = square.to_rect();

        assert_eq!(rect.min().x, -180.0);
        assert_eq!(rect.min().y, -90.0);
        assert!(rect.min().x < square.longitude() && square.longitude() < rect.max().x);
        assert!(rect.min().y < square.latitude() && square.latitude() < rect.max().y);
        Ok(())
    }
}
