//! Minimum/maximum elevation scans over terrain frames.
//!
//! [`scan_extremes`] walks every post of a [`TerrainFrame`] in row-major
//! order, optionally filtered by a [`RegionMask`], applies per-post geoid
//! correction when the caller asks for WGS84 heights, and reports the lowest
//! and highest posts as fully-decorated [`ElevationDataPoint`]s.
//!
//! The scan is pure computation over caller-owned inputs: no I/O, no shared
//! state, and identical results on repeated invocations.

use crate::geodetic::{BoundingBox, GeodeticCoordinate};
use crate::geoid::GeoidHeightGrid;
use crate::error::{ReliefError, Result};
use crate::frame::TerrainFrame;
use crate::point::{EarthModel, ElevationDataPoint, LengthUnit, MinMaxElevation, NO_DATA_VALUE};

/// A polygonal query region on the lat/lon plane.
///
/// Vertices are stored as an open ring; a duplicated closing vertex in the
/// input is dropped. Containment uses the even-odd (ray casting) rule, so
/// convex and concave rings both work.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMask {
    /// Open ring of (lat, lon) vertices.
    vertices: Vec<(f64, f64)>,
}

impl PolygonMask {
    /// Build a polygon mask from its boundary vertices.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::DegeneratePolygon`] for rings with fewer
    /// than three distinct vertices.
    pub fn new(ring: Vec<GeodeticCoordinate>) -> Result<Self> {
        let mut vertices: Vec<(f64, f64)> =
            ring.iter().map(|c| (c.lat(), c.lon())).collect();

        // Accept both open and explicitly closed rings.
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(ReliefError::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }

        Ok(Self { vertices })
    }

    /// Even-odd containment test; boundary points count as inside on the
    /// lower/left edges per the usual crossing convention.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let (lat_i, lon_i) = self.vertices[i];
            let (lat_j, lon_j) = self.vertices[j];
            if ((lat_i > lat) != (lat_j > lat))
                && lon < (lon_j - lon_i) * (lat - lat_i) / (lat_j - lat_i) + lon_i
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Smallest axis-aligned box enclosing the ring.
    pub fn envelope(&self) -> BoundingBox {
        let mut min_lat = f64::INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        for &(lat, lon) in &self.vertices {
            min_lat = min_lat.min(lat);
            min_lon = min_lon.min(lon);
            max_lat = max_lat.max(lat);
            max_lon = max_lon.max(lon);
        }
        // Vertices are validated coordinates, so the envelope is valid too.
        BoundingBox::from_degrees(min_lat, min_lon, max_lat, max_lon)
            .expect("envelope of validated vertices")
    }
}

/// Spatial filter applied to a scan.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionMask {
    /// Axis-aligned box; containment is four comparisons.
    Box(BoundingBox),
    /// Arbitrary polygon; containment is a point-in-polygon test.
    Polygon(PolygonMask),
}

impl RegionMask {
    /// Whether a point passes the filter.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        match self {
            RegionMask::Box(bbox) => bbox.contains(lat, lon),
            RegionMask::Polygon(poly) => poly.contains(lat, lon),
        }
    }

    /// Axis-aligned envelope of the mask, used for frame clipping.
    pub fn envelope(&self) -> BoundingBox {
        match self {
            RegionMask::Box(bbox) => bbox.clone(),
            RegionMask::Polygon(poly) => poly.envelope(),
        }
    }
}

/// Find the extreme elevations of a frame, optionally restricted to a mask.
///
/// Posts are visited in row-major scan order (south to north, west to
/// east). A post is skipped when it carries the no-data sentinel or falls
/// outside the mask. With `earth_model` = [`EarthModel::Wgs84`] each
/// surviving post is shifted by the rounded local geoid height; a failed
/// geoid lookup is logged and the post is compared unadjusted.
///
/// Ties keep the first post encountered: comparisons are strict, so a
/// later post with an equal value never displaces the running extreme.
///
/// Returns `None` when the mask does not overlap the frame or no valid
/// post exists. That is distinguishable from a region whose posts all
/// share one elevation, which yields `Some` with `min == max`.
///
/// # Example
///
/// ```no_run
/// use relief::{scan_extremes, EarthModel, LengthUnit};
/// # let frame: relief::TerrainFrame = unimplemented!();
/// # let geoid: relief::GeoidHeightGrid = unimplemented!();
///
/// let result = scan_extremes(&frame, None, EarthModel::Egm96, LengthUnit::Meters, &geoid);
/// if let Some(extremes) = result {
///     println!("low {} high {}", extremes.min().elevation(), extremes.max().elevation());
/// }
/// ```
pub fn scan_extremes(
    frame: &TerrainFrame,
    mask: Option<&RegionMask>,
    earth_model: EarthModel,
    units: LengthUnit,
    geoid: &GeoidHeightGrid,
) -> Option<MinMaxElevation> {
    // A mask that misses the frame entirely is a region mismatch: empty.
    if let Some(mask) = mask {
        mask.envelope().intersection(frame.bounds())?;
    }

    let mut min: Option<(i32, usize, usize)> = None;
    let mut max: Option<(i32, usize, usize)> = None;

    for row in 0..frame.rows() {
        for col in 0..frame.cols() {
            let raw = frame.post(row, col);
            if raw == NO_DATA_VALUE {
                continue;
            }

            let (lat, lon) = frame.post_position(row, col);
            if let Some(mask) = mask {
                if !mask.contains(lat, lon) {
                    continue;
                }
            }

            let value = adjusted_value(raw, lat, lon, earth_model, geoid);

            // Strict comparisons: the first post of a tie is retained.
            if min.is_none() || value < min.map(|(v, _, _)| v).unwrap_or(i32::MAX) {
                min = Some((value, row, col));
            }
            if max.is_none() || value > max.map(|(v, _, _)| v).unwrap_or(i32::MIN) {
                max = Some((value, row, col));
            }
        }
    }

    let (min, max) = (min?, max?);
    Some(MinMaxElevation::new(
        build_point(frame, min, earth_model, units)?,
        build_point(frame, max, earth_model, units)?,
    ))
}

/// Shift a raw post onto the requested vertical reference.
fn adjusted_value(
    raw: i16,
    lat: f64,
    lon: f64,
    earth_model: EarthModel,
    geoid: &GeoidHeightGrid,
) -> i32 {
    if earth_model == EarthModel::Egm96 {
        return raw as i32;
    }
    match geoid.height(lat, lon) {
        Ok(offset) => raw as i32 + offset.round() as i32,
        Err(e) => {
            // Leave the post unadjusted rather than dropping it.
            log::warn!("geoid lookup failed at ({}, {}): {}", lat, lon, e);
            raw as i32
        }
    }
}

/// Decorate one extreme post with the frame's metadata.
fn build_point(
    frame: &TerrainFrame,
    (value, row, col): (i32, usize, usize),
    earth_model: EarthModel,
    units: LengthUnit,
) -> Option<ElevationDataPoint> {
    let (lat, lon) = frame.post_position(row, col);
    // Positions inside validated frame bounds stay in domain.
    let coordinate = GeodeticCoordinate::new(lat, lon).ok()?;

    let elevation = match units {
        LengthUnit::Meters => value,
        LengthUnit::Feet => units.from_meters(value as f64).round() as i32,
    };

    Some(ElevationDataPoint::new(
        elevation,
        coordinate,
        frame.accuracy().converted_to(units),
        units,
        frame.source(),
        earth_model,
        frame.classification_marking().to_string(),
        frame.producer_code().trim().to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DemFrameAccuracy;
    use crate::point::TerrainSource;

    /// Flat zero geoid over the whole globe.
    fn zero_geoid() -> GeoidHeightGrid {
        GeoidHeightGrid::from_parts(-90.0, 90.0, 0.0, 360.0, 90.0, 90.0, vec![0.0; 15]).unwrap()
    }

    /// Constant 10 m geoid separation everywhere.
    fn offset_geoid() -> GeoidHeightGrid {
        GeoidHeightGrid::from_parts(-90.0, 90.0, 0.0, 360.0, 90.0, 90.0, vec![10.0; 15]).unwrap()
    }

    /// 3x3 frame at 35N 138E, 0.5° spacing, posts supplied row-major
    /// starting at the south-west corner.
    fn test_frame(posts: Vec<i16>) -> TerrainFrame {
        TerrainFrame::new(
            posts,
            3,
            3,
            GeodeticCoordinate::new(35.0, 138.0).unwrap(),
            0.5,
            0.5,
            DemFrameAccuracy::new(10, 5, 8, 4, LengthUnit::Meters).unwrap(),
            TerrainSource::Dted1,
            "USGS  ".to_string(),
            "UNCLASSIFIED".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_scan_basic_extremes() {
        let frame = test_frame(vec![500, 200, 300, 400, 900, 100, 700, 800, 600]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 100);
        assert_eq!(result.max().elevation(), 900);

        // Post (1, 2) holds the minimum: 35.5N, 139.0E.
        assert_eq!(result.min().coordinate().lat(), 35.5);
        assert_eq!(result.min().coordinate().lon(), 139.0);
        assert_eq!(result.max().coordinate().lat(), 35.5);
        assert_eq!(result.max().coordinate().lon(), 138.5);
    }

    #[test]
    fn test_scan_metadata_carried() {
        let frame = test_frame(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        let min = result.min();
        assert_eq!(min.source(), TerrainSource::Dted1);
        assert_eq!(min.earth_model(), EarthModel::Egm96);
        assert_eq!(min.classification_marking(), "UNCLASSIFIED");
        // Padding is stripped from the producer code.
        assert_eq!(min.producer_code(), "USGS");
        assert_eq!(min.accuracy().abs_horz(), 10);
    }

    #[test]
    fn test_scan_all_no_data_is_empty() {
        let frame = test_frame(vec![NO_DATA_VALUE; 9]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_scan_skips_no_data_posts() {
        let frame = test_frame(vec![
            NO_DATA_VALUE,
            200,
            NO_DATA_VALUE,
            400,
            NO_DATA_VALUE,
            100,
            700,
            NO_DATA_VALUE,
            600,
        ]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 100);
        assert_eq!(result.max().elevation(), 700);
    }

    #[test]
    fn test_scan_uniform_frame_distinct_from_empty() {
        // All posts equal: min == max, but the result is present.
        let frame = test_frame(vec![42; 9]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 42);
        assert_eq!(result.max().elevation(), 42);
    }

    #[test]
    fn test_scan_ties_keep_first_in_scan_order() {
        // The minimum 100 appears twice; the south-west one is first in
        // row-major order and must win. Same for the maximum 900.
        let frame = test_frame(vec![500, 100, 300, 900, 100, 900, 700, 800, 600]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().coordinate().lat(), 35.0);
        assert_eq!(result.min().coordinate().lon(), 138.5);
        assert_eq!(result.max().coordinate().lat(), 35.5);
        assert_eq!(result.max().coordinate().lon(), 138.0);
    }

    #[test]
    fn test_scan_box_mask() {
        let frame = test_frame(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        // Only the north row (lat 36.0) passes the mask.
        let mask = RegionMask::Box(BoundingBox::from_degrees(35.9, 137.0, 36.1, 140.0).unwrap());

        let result = scan_extremes(
            &frame,
            Some(&mask),
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 7);
        assert_eq!(result.max().elevation(), 9);
    }

    #[test]
    fn test_scan_disjoint_mask_is_empty() {
        let frame = test_frame(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let mask = RegionMask::Box(BoundingBox::from_degrees(0.0, 0.0, 5.0, 5.0).unwrap());

        let result = scan_extremes(
            &frame,
            Some(&mask),
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_scan_polygon_mask() {
        let frame = test_frame(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        // Triangle around the center post (35.5, 138.5) only.
        let ring = vec![
            GeodeticCoordinate::new(35.3, 138.3).unwrap(),
            GeodeticCoordinate::new(35.3, 138.7).unwrap(),
            GeodeticCoordinate::new(35.7, 138.5).unwrap(),
        ];
        let mask = RegionMask::Polygon(PolygonMask::new(ring).unwrap());

        let result = scan_extremes(
            &frame,
            Some(&mask),
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 5);
        assert_eq!(result.max().elevation(), 5);
    }

    #[test]
    fn test_scan_wgs84_applies_geoid_offset() {
        let frame = test_frame(vec![500, 200, 300, 400, 900, 100, 700, 800, 600]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Wgs84,
            LengthUnit::Meters,
            &offset_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 110);
        assert_eq!(result.max().elevation(), 910);
        assert_eq!(result.min().earth_model(), EarthModel::Wgs84);
    }

    #[test]
    fn test_scan_egm96_ignores_geoid() {
        let frame = test_frame(vec![500, 200, 300, 400, 900, 100, 700, 800, 600]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &offset_geoid(),
        )
        .unwrap();

        assert_eq!(result.min().elevation(), 100);
        assert_eq!(result.max().elevation(), 900);
    }

    #[test]
    fn test_scan_feet_output() {
        let frame = test_frame(vec![500, 200, 300, 400, 900, 100, 700, 800, 600]);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Feet,
            &zero_geoid(),
        )
        .unwrap();

        // 100 m = 328 ft, 900 m = 2953 ft.
        assert_eq!(result.min().elevation(), 328);
        assert_eq!(result.max().elevation(), 2953);
        assert_eq!(result.min().units(), LengthUnit::Feet);
        // Accuracy converts with the same unit: 10 m -> 33 ft.
        assert_eq!(result.min().accuracy().abs_horz(), 33);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let frame = test_frame(vec![500, 200, 300, 400, 900, 100, 700, 800, 600]);
        let mask = RegionMask::Box(BoundingBox::from_degrees(35.0, 138.0, 36.0, 139.0).unwrap());

        let first = scan_extremes(
            &frame,
            Some(&mask),
            EarthModel::Wgs84,
            LengthUnit::Meters,
            &offset_geoid(),
        );
        let second = scan_extremes(
            &frame,
            Some(&mask),
            EarthModel::Wgs84,
            LengthUnit::Meters,
            &offset_geoid(),
        );
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_scan_min_never_exceeds_max() {
        let posts: Vec<i16> = (0..9).map(|i| ((i * 37) % 11 - 5) as i16 * 100).collect();
        let frame = test_frame(posts);
        let result = scan_extremes(
            &frame,
            None,
            EarthModel::Egm96,
            LengthUnit::Meters,
            &zero_geoid(),
        )
        .unwrap();
        assert!(result.min().elevation() <= result.max().elevation());
    }

    #[test]
    fn test_polygon_mask_validation() {
        let a = GeodeticCoordinate::new(0.0, 0.0).unwrap();
        let b = GeodeticCoordinate::new(1.0, 0.0).unwrap();

        assert!(matches!(
            PolygonMask::new(vec![a.clone(), b.clone()]),
            Err(ReliefError::DegeneratePolygon { vertices: 2 })
        ));

        // A closed pair is still degenerate after dropping the closer.
        assert!(matches!(
            PolygonMask::new(vec![a.clone(), b, a.clone()]),
            Err(ReliefError::DegeneratePolygon { vertices: 2 })
        ));
    }

    #[test]
    fn test_polygon_contains() {
        let ring = vec![
            GeodeticCoordinate::new(0.0, 0.0).unwrap(),
            GeodeticCoordinate::new(0.0, 10.0).unwrap(),
            GeodeticCoordinate::new(10.0, 10.0).unwrap(),
            GeodeticCoordinate::new(10.0, 0.0).unwrap(),
        ];
        let poly = PolygonMask::new(ring).unwrap();

        assert!(poly.contains(5.0, 5.0));
        assert!(!poly.contains(11.0, 5.0));
        assert!(!poly.contains(5.0, -1.0));
        assert!(!poly.contains(-5.0, 5.0));
    }

    #[test]
    fn test_polygon_concave() {
        // L-shaped ring; the notch is outside.
        let ring = vec![
            GeodeticCoordinate::new(0.0, 0.0).unwrap(),
            GeodeticCoordinate::new(0.0, 10.0).unwrap(),
            GeodeticCoordinate::new(4.0, 10.0).unwrap(),
            GeodeticCoordinate::new(4.0, 4.0).unwrap(),
            GeodeticCoordinate::new(10.0, 4.0).unwrap(),
            GeodeticCoordinate::new(10.0, 0.0).unwrap(),
        ];
        let poly = PolygonMask::new(ring).unwrap();

        assert!(poly.contains(2.0, 8.0)); // in the wide arm
        assert!(poly.contains(8.0, 2.0)); // in the tall arm
        assert!(!poly.contains(8.0, 8.0)); // in the notch
    }

    #[test]
    fn test_polygon_envelope() {
        let ring = vec![
            GeodeticCoordinate::new(-3.0, 2.0).unwrap(),
            GeodeticCoordinate::new(4.0, 7.0).unwrap(),
            GeodeticCoordinate::new(1.0, -5.0).unwrap(),
        ];
        let poly = PolygonMask::new(ring).unwrap();
        let envelope = poly.envelope();

        assert_eq!(envelope.min_lat(), -3.0);
        assert_eq!(envelope.max_lat(), 4.0);
        assert_eq!(envelope.min_lon(), -5.0);
        assert_eq!(envelope.max_lon(), 7.0);
    }
}
