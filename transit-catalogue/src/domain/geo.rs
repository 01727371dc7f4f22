//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Uses the spherical law of cosines. Identical coordinates are exactly 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_catalogue::domain::Coordinates;
    ///
    /// let a = Coordinates::new(0.0, 0.0);
    /// let b = Coordinates::new(0.0, 1.0);
    /// let d = a.distance_to(&b);
    /// assert!((d - 111_194.93).abs() < 0.01);
    /// assert_eq!(a.distance_to(&a), 0.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }

        let (from_lat, to_lat) = (self.lat.to_radians(), other.lat.to_radians());
        let delta_lng = (self.lng - other.lng).abs().to_radians();

        // Rounding can push the cosine just outside [-1, 1] for near-identical points
        let cos_angle = from_lat.sin() * to_lat.sin()
            + from_lat.cos() * to_lat.cos() * delta_lng.cos();

        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}
