use std::fmt;
use std::fmt::{Display, Formatter};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64` in decimal degrees.
///
/// # Examples
///
/// ```
/// use nrel_solar::LatLon;
///
/// let golden = LatLon(39.74, -105.18);
/// assert_eq!(golden.0, 39.74); // Latitude
/// assert_eq!(golden.1, -105.18); // Longitude
/// assert_eq!(golden.to_string(), "39.74°N, 105.18°W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }
}

/// Formats as hemisphere-suffixed degrees, e.g. `40°N, 105°W`.
impl Display for LatLon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ns = if self.0 < 0.0 { 'S' } else { 'N' };
        let ew = if self.1 < 0.0 { 'W' } else { 'E' };
        write!(f, "{}°{}, {}°{}", self.0.abs(), ns, self.1.abs(), ew)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hemispheres() {
        assert_eq!(LatLon(40.0, -105.0).to_string(), "40°N, 105°W");
        assert_eq!(LatLon(-33.87, 151.21).to_string(), "33.87°S, 151.21°E");
        assert_eq!(LatLon(0.0, 0.0).to_string(), "0°N, 0°E");
    }
}
