//! GeoJSON region masks.
//!
//! This module converts GeoJSON geometries into [`RegionMask`]s for the
//! extremes scanner. Enable the `geojson` feature to use this module.
//!
//! # Example
//!
//! ```
//! use relief::geojson::mask_from_geometry;
//! use geojson::Geometry;
//!
//! let geometry: Geometry = r#"{
//!     "type": "Polygon",
//!     "coordinates": [[[138.0, 35.0], [139.0, 35.0], [138.5, 36.0], [138.0, 35.0]]]
//! }"#.parse().unwrap();
//!
//! let mask = mask_from_geometry(&geometry)?;
//! assert!(mask.contains(35.3, 138.5));
//! # Ok::<(), relief::ReliefError>(())
//! ```

use geojson::{Geometry, Value as GeoJsonValue};

use crate::error::{ReliefError, Result};
use crate::extremes::{PolygonMask, RegionMask};
use crate::geodetic::{BoundingBox, GeodeticCoordinate};

/// Build a scan mask from a GeoJSON geometry.
///
/// Only `Polygon` geometries are accepted, and only the exterior ring is
/// used. Coordinates follow GeoJSON order: `[longitude, latitude]`. An
/// axis-aligned rectangular ring is reduced to a [`RegionMask::Box`] so the
/// scanner can use the cheaper containment test; anything else becomes a
/// [`RegionMask::Polygon`].
///
/// # Errors
///
/// Returns an error if:
/// - The geometry is not a `Polygon`
/// - The polygon has interior rings (holes)
/// - A vertex has fewer than 2 elements or is out of geodetic range
/// - The exterior ring has fewer than three distinct vertices
pub fn mask_from_geometry(geometry: &Geometry) -> Result<RegionMask> {
    let rings = match &geometry.value {
        GeoJsonValue::Polygon(rings) => rings,
        other => {
            return Err(ReliefError::UnsupportedMaskGeometry {
                geometry: geojson_type_name(other).to_string(),
            })
        }
    };

    if rings.len() != 1 {
        return Err(ReliefError::UnsupportedMaskGeometry {
            geometry: "Polygon with interior rings".to_string(),
        });
    }

    let vertices = ring_to_coordinates(&rings[0])?;
    if let Some(bbox) = rectangle_of(&vertices) {
        return Ok(RegionMask::Box(bbox));
    }
    Ok(RegionMask::Polygon(PolygonMask::new(vertices)?))
}

/// Validate a GeoJSON ring into geodetic coordinates, lat/lon order.
fn ring_to_coordinates(ring: &[Vec<f64>]) -> Result<Vec<GeodeticCoordinate>> {
    ring.iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(ReliefError::UnsupportedMaskGeometry {
                    geometry: "position with fewer than 2 elements".to_string(),
                });
            }
            GeodeticCoordinate::new(position[1], position[0])
        })
        .collect()
}

/// Recognize an axis-aligned rectangle so it can scan as a box.
///
/// The ring must have exactly four distinct vertices (a duplicated closing
/// vertex is tolerated) and every vertex must sit on a corner of the ring's
/// own envelope.
fn rectangle_of(vertices: &[GeodeticCoordinate]) -> Option<BoundingBox> {
    let mut corners: Vec<(f64, f64)> = vertices.iter().map(|c| (c.lat(), c.lon())).collect();
    if corners.len() > 1 && corners.first() == corners.last() {
        corners.pop();
    }
    if corners.len() != 4 {
        return None;
    }

    let min_lat = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
    let max_lat = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
    let min_lon = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
    let max_lon = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

    let on_corner = |&(lat, lon): &(f64, f64)| {
        (lat == min_lat || lat == max_lat) && (lon == min_lon || lon == max_lon)
    };
    if !corners.iter().all(on_corner) {
        return None;
    }

    // All four envelope corners must be present, not e.g. a degenerate
    // ring that repeats two corners.
    let distinct = |a: &(f64, f64)| corners.iter().filter(|c| *c == a).count() == 1;
    if !corners.iter().all(distinct) {
        return None;
    }

    BoundingBox::from_degrees(min_lat, min_lon, max_lat, max_lon).ok()
}

/// GeoJSON type name for error messages.
fn geojson_type_name(value: &GeoJsonValue) -> &'static str {
    match value {
        GeoJsonValue::Point(_) => "Point",
        GeoJsonValue::MultiPoint(_) => "MultiPoint",
        GeoJsonValue::LineString(_) => "LineString",
        GeoJsonValue::MultiLineString(_) => "MultiLineString",
        GeoJsonValue::Polygon(_) => "Polygon",
        GeoJsonValue::MultiPolygon(_) => "MultiPolygon",
        GeoJsonValue::GeometryCollection(_) => "GeometryCollection",
    }
}
