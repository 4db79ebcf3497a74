//! Geodetic value types: validated coordinates and bounding boxes.
//!
//! Both types are immutable once built. Construction validates the geodetic
//! domain (`lat` in ±90°, `lon` in ±180°) and, for boxes, the corner
//! ordering, so downstream code never re-checks.

use crate::coords::{parse_coordinate, Axis};
use crate::error::{ReliefError, Result};

/// A validated latitude/longitude pair in decimal degrees (WGS84 datum).
///
/// When built from free-form text via [`GeodeticCoordinate::parse`], the
/// original strings are preserved so callers can echo back exactly what was
/// submitted.
///
/// # Example
///
/// ```
/// use relief::GeodeticCoordinate;
///
/// let summit = GeodeticCoordinate::new(27.9881, 86.925)?;
/// assert_eq!(summit.lat(), 27.9881);
///
/// let parsed = GeodeticCoordinate::parse("N27 59 17.2", "E86 55 30")?;
/// assert_eq!(parsed.lat_text(), Some("N27 59 17.2"));
/// # Ok::<(), relief::ReliefError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticCoordinate {
    lat: f64,
    lon: f64,
    lat_text: Option<String>,
    lon_text: Option<String>,
}

impl GeodeticCoordinate {
    /// Create a coordinate from decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::CoordinateOutOfRange`] if `lat` is outside
    /// ±90° or `lon` is outside ±180°.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ReliefError::CoordinateOutOfRange { lat, lon });
        }
        Ok(Self {
            lat,
            lon,
            lat_text: None,
            lon_text: None,
        })
    }

    /// Parse a coordinate from two free-form strings, preserving the
    /// original text.
    ///
    /// Accepts everything [`parse_coordinate`] accepts: decimal degrees,
    /// packed DMS, delimited DMS with hemisphere letters.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::Parse`] carrying the specific
    /// [`CoordParseError`](crate::CoordParseError) for the failing axis.
    pub fn parse(lat_text: &str, lon_text: &str) -> Result<Self> {
        let lat = parse_coordinate(lat_text, Axis::Latitude)?;
        let lon = parse_coordinate(lon_text, Axis::Longitude)?;
        Ok(Self {
            lat,
            lon,
            lat_text: Some(lat_text.to_string()),
            lon_text: Some(lon_text.to_string()),
        })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Original latitude string, if this coordinate was parsed from text.
    pub fn lat_text(&self) -> Option<&str> {
        self.lat_text.as_deref()
    }

    /// Original longitude string, if this coordinate was parsed from text.
    pub fn lon_text(&self) -> Option<&str> {
        self.lon_text.as_deref()
    }
}

/// An axis-aligned rectangle in latitude/longitude space.
///
/// Only two corners are stored: `lower_left` (south-west) and `upper_right`
/// (north-east). The other corners are derived, never aliased, and the
/// south-west-of-north-east ordering is enforced at construction.
///
/// # Example
///
/// ```
/// use relief::{BoundingBox, GeodeticCoordinate};
///
/// let a = BoundingBox::new(
///     GeodeticCoordinate::new(-5.0, -5.0)?,
///     GeodeticCoordinate::new(5.0, 5.0)?,
/// )?;
/// let b = BoundingBox::new(
///     GeodeticCoordinate::new(-1.0, -1.0)?,
///     GeodeticCoordinate::new(10.0, 10.0)?,
/// )?;
///
/// let clip = a.intersection(&b).unwrap();
/// assert_eq!(clip.min_lat(), -1.0);
/// assert_eq!(clip.max_lon(), 5.0);
/// # Ok::<(), relief::ReliefError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    lower_left: GeodeticCoordinate,
    upper_right: GeodeticCoordinate,
}

impl BoundingBox {
    /// Create a bounding box from its south-west and north-east corners.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::InvalidBoundingBox`] if `lower_left` is not
    /// south-west of (or equal to) `upper_right` on both axes.
    pub fn new(lower_left: GeodeticCoordinate, upper_right: GeodeticCoordinate) -> Result<Self> {
        if lower_left.lat() > upper_right.lat() || lower_left.lon() > upper_right.lon() {
            return Err(ReliefError::InvalidBoundingBox);
        }
        Ok(Self {
            lower_left,
            upper_right,
        })
    }

    /// Create a bounding box from bare decimal-degree bounds.
    pub fn from_degrees(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Result<Self> {
        Self::new(
            GeodeticCoordinate::new(min_lat, min_lon)?,
            GeodeticCoordinate::new(max_lat, max_lon)?,
        )
    }

    /// Parse a bounding box from four free-form corner strings, south-west
    /// corner first. Accepts the same coordinate formats as
    /// [`GeodeticCoordinate::parse`].
    pub fn parse(sw_lat: &str, sw_lon: &str, ne_lat: &str, ne_lon: &str) -> Result<Self> {
        Self::new(
            GeodeticCoordinate::parse(sw_lat, sw_lon)?,
            GeodeticCoordinate::parse(ne_lat, ne_lon)?,
        )
    }

    /// South-west corner.
    pub fn lower_left(&self) -> &GeodeticCoordinate {
        &self.lower_left
    }

    /// North-east corner.
    pub fn upper_right(&self) -> &GeodeticCoordinate {
        &self.upper_right
    }

    /// Southern boundary latitude.
    pub fn min_lat(&self) -> f64 {
        self.lower_left.lat()
    }

    /// Northern boundary latitude.
    pub fn max_lat(&self) -> f64 {
        self.upper_right.lat()
    }

    /// Western boundary longitude.
    pub fn min_lon(&self) -> f64 {
        self.lower_left.lon()
    }

    /// Eastern boundary longitude.
    pub fn max_lon(&self) -> f64 {
        self.upper_right.lon()
    }

    /// Whether a point falls inside the box, boundaries included.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat()
            && lat <= self.max_lat()
            && lon >= self.min_lon()
            && lon <= self.max_lon()
    }

    /// Clip this box against another.
    ///
    /// Boxes that merely touch along an edge do not overlap. When they do
    /// overlap, the intersection takes the per-axis maximum of the
    /// lower-left corners and minimum of the upper-right corners.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if other.min_lon() >= self.max_lon()
            || other.min_lat() >= self.max_lat()
            || other.max_lon() <= self.min_lon()
            || other.max_lat() <= self.min_lat()
        {
            return None;
        }

        // Corner values come from two valid boxes, so they stay in domain.
        Some(BoundingBox {
            lower_left: GeodeticCoordinate {
                lat: self.min_lat().max(other.min_lat()),
                lon: self.min_lon().max(other.min_lon()),
                lat_text: None,
                lon_text: None,
            },
            upper_right: GeodeticCoordinate {
                lat: self.max_lat().min(other.max_lat()),
                lon: self.max_lon().min(other.max_lon()),
                lat_text: None,
                lon_text: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validation() {
        assert!(GeodeticCoordinate::new(45.0, 120.0).is_ok());
        assert!(GeodeticCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeodeticCoordinate::new(-90.0, -180.0).is_ok());

        assert!(GeodeticCoordinate::new(90.1, 0.0).is_err());
        assert!(GeodeticCoordinate::new(-90.1, 0.0).is_err());
        assert!(GeodeticCoordinate::new(0.0, 180.1).is_err());
        assert!(GeodeticCoordinate::new(0.0, -180.1).is_err());
    }

    #[test]
    fn test_parse_preserves_text() {
        let coord = GeodeticCoordinate::parse("N23 01 25.2", "-122.41").unwrap();
        assert!((coord.lat() - 23.023668).abs() < 1e-9);
        assert_eq!(coord.lon(), -122.41);
        assert_eq!(coord.lat_text(), Some("N23 01 25.2"));
        assert_eq!(coord.lon_text(), Some("-122.41"));

        let coord = GeodeticCoordinate::new(1.0, 2.0).unwrap();
        assert_eq!(coord.lat_text(), None);
    }

    #[test]
    fn test_parse_propagates_axis_error() {
        let err = GeodeticCoordinate::parse("E23", "10").unwrap_err();
        assert!(matches!(err, ReliefError::Parse(_)));
    }

    #[test]
    fn test_bounding_box_ordering_enforced() {
        let sw = GeodeticCoordinate::new(-5.0, -5.0).unwrap();
        let ne = GeodeticCoordinate::new(5.0, 5.0).unwrap();
        assert!(BoundingBox::new(sw.clone(), ne.clone()).is_ok());

        // Swapped corners are rejected, not silently accepted.
        assert!(matches!(
            BoundingBox::new(ne, sw),
            Err(ReliefError::InvalidBoundingBox)
        ));
    }

    #[test]
    fn test_bounding_box_parse() {
        let bbox = BoundingBox::parse("S5", "W5", "N5 30", "E5 30").unwrap();
        assert_eq!(bbox.min_lat(), -5.0);
        assert_eq!(bbox.min_lon(), -5.0);
        assert_eq!(bbox.max_lat(), 5.5);
        assert_eq!(bbox.max_lon(), 5.5);

        // Corner ordering still applies to parsed boxes.
        assert!(BoundingBox::parse("N5", "E5", "S5", "W5").is_err());
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox::from_degrees(-5.0, -5.0, 5.0, 5.0).unwrap();

        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(-5.0, -5.0)); // boundary inclusive
        assert!(bbox.contains(5.0, 5.0));
        assert!(!bbox.contains(5.1, 0.0));
        assert!(!bbox.contains(0.0, -5.1));
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = BoundingBox::from_degrees(-10.0, -10.0, -5.0, -5.0).unwrap();
        let b = BoundingBox::from_degrees(0.0, 0.0, 5.0, 5.0).unwrap();

        assert_eq!(a.intersection(&b), None);
        assert_eq!(b.intersection(&a), None);
    }

    #[test]
    fn test_intersection_touching_edges() {
        // Boxes sharing only an edge do not overlap.
        let a = BoundingBox::from_degrees(0.0, 0.0, 5.0, 5.0).unwrap();
        let b = BoundingBox::from_degrees(0.0, 5.0, 5.0, 10.0).unwrap();
        assert_eq!(a.intersection(&b), None);

        let c = BoundingBox::from_degrees(5.0, 0.0, 10.0, 5.0).unwrap();
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_intersection_overlap() {
        let a = BoundingBox::from_degrees(-5.0, -5.0, 5.0, 5.0).unwrap();
        let b = BoundingBox::from_degrees(-1.0, -1.0, 10.0, 10.0).unwrap();

        let clip = a.intersection(&b).unwrap();
        assert_eq!(clip.min_lat(), -1.0);
        assert_eq!(clip.min_lon(), -1.0);
        assert_eq!(clip.max_lat(), 5.0);
        assert_eq!(clip.max_lon(), 5.0);

        // Intersection is symmetric.
        assert_eq!(b.intersection(&a).unwrap(), clip);
    }

    #[test]
    fn test_intersection_contained() {
        let outer = BoundingBox::from_degrees(-10.0, -10.0, 10.0, 10.0).unwrap();
        let inner = BoundingBox::from_degrees(-1.0, -1.0, 1.0, 1.0).unwrap();

        assert_eq!(outer.intersection(&inner).unwrap(), inner);
    }

    #[test]
    fn test_derived_corner_accessors() {
        let bbox = BoundingBox::from_degrees(1.0, 2.0, 3.0, 4.0).unwrap();
        // Each named bound resolves to its own stored field.
        assert_eq!(bbox.min_lat(), 1.0);
        assert_eq!(bbox.min_lon(), 2.0);
        assert_eq!(bbox.max_lat(), 3.0);
        assert_eq!(bbox.max_lon(), 4.0);
    }
}
