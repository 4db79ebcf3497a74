//! Terrain frames: rectangular DEM post grids with accuracy and provenance.
//!
//! A [`TerrainFrame`] is the unit of data handed to the extremes scanner.
//! Frames are produced by an external terrain-file decoder behind the
//! [`TerrainFrameReader`] trait; this crate never touches the DTED/SRTM
//! binary formats itself.

use std::path::Path;

use crate::error::{ReliefError, Result};
use crate::geodetic::{BoundingBox, GeodeticCoordinate};
use crate::point::{LengthUnit, TerrainSource};

/// Accuracy value meaning "not available".
pub const ACCURACY_NOT_AVAILABLE: i32 = -1;

/// Largest representable accuracy figure.
const ACCURACY_MAX: i32 = 9999;

/// Absolute/relative, horizontal/vertical error bounds reported for a DEM
/// frame.
///
/// Values are supplied in meters and converted into the requested unit once
/// at construction; the struct is immutable afterwards.
/// [`ACCURACY_NOT_AVAILABLE`] (`-1`) passes through conversion unchanged.
///
/// # Example
///
/// ```
/// use relief::{DemFrameAccuracy, LengthUnit};
///
/// let acc = DemFrameAccuracy::new(10, 5, -1, 5, LengthUnit::Feet)?;
/// assert_eq!(acc.abs_horz(), 33); // 10 m
/// assert_eq!(acc.rel_horz(), -1); // still "not available"
/// # Ok::<(), relief::ReliefError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemFrameAccuracy {
    abs_horz: i32,
    abs_vert: i32,
    rel_horz: i32,
    rel_vert: i32,
    units: LengthUnit,
}

impl DemFrameAccuracy {
    /// Build an accuracy record from meter values, converting into `units`.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::AccuracyOutOfRange`] if any input is outside
    /// `[-1, 9999]`.
    pub fn new(
        abs_horz: i32,
        abs_vert: i32,
        rel_horz: i32,
        rel_vert: i32,
        units: LengthUnit,
    ) -> Result<Self> {
        for value in [abs_horz, abs_vert, rel_horz, rel_vert] {
            if !(ACCURACY_NOT_AVAILABLE..=ACCURACY_MAX).contains(&value) {
                return Err(ReliefError::AccuracyOutOfRange { value });
            }
        }
        Ok(Self {
            abs_horz: convert(abs_horz, units),
            abs_vert: convert(abs_vert, units),
            rel_horz: convert(rel_horz, units),
            rel_vert: convert(rel_vert, units),
            units,
        })
    }

    /// Re-express this record in another unit.
    ///
    /// Values were converted from meters at construction; converting a
    /// meters record is exact, while feet-to-feet returns a clone.
    pub fn converted_to(&self, units: LengthUnit) -> Self {
        if units == self.units {
            return self.clone();
        }
        match self.units {
            // Stored values are meters, so the constructor's conversion
            // applies directly.
            LengthUnit::Meters => Self {
                abs_horz: convert(self.abs_horz, units),
                abs_vert: convert(self.abs_vert, units),
                rel_horz: convert(self.rel_horz, units),
                rel_vert: convert(self.rel_vert, units),
                units,
            },
            // Feet back to meters inverts the factor.
            LengthUnit::Feet => {
                let back = |v: i32| {
                    if v == ACCURACY_NOT_AVAILABLE {
                        v
                    } else {
                        (v as f64 / crate::point::FEET_PER_METER).round() as i32
                    }
                };
                Self {
                    abs_horz: back(self.abs_horz),
                    abs_vert: back(self.abs_vert),
                    rel_horz: back(self.rel_horz),
                    rel_vert: back(self.rel_vert),
                    units,
                }
            }
        }
    }

    /// Absolute horizontal error bound.
    pub fn abs_horz(&self) -> i32 {
        self.abs_horz
    }

    /// Absolute vertical error bound.
    pub fn abs_vert(&self) -> i32 {
        self.abs_vert
    }

    /// Relative horizontal error bound.
    pub fn rel_horz(&self) -> i32 {
        self.rel_horz
    }

    /// Relative vertical error bound.
    pub fn rel_vert(&self) -> i32 {
        self.rel_vert
    }

    /// Unit the four values are expressed in.
    pub fn units(&self) -> LengthUnit {
        self.units
    }
}

/// Convert a meter figure into `units`, rounding to the nearest integer
/// and capping at the accuracy domain ceiling.
fn convert(meters: i32, units: LengthUnit) -> i32 {
    if meters == ACCURACY_NOT_AVAILABLE {
        return meters;
    }
    let converted = units.from_meters(meters as f64).round() as i32;
    converted.min(ACCURACY_MAX)
}

/// A rectangular grid of elevation posts with its geographic placement.
///
/// Posts are `i16` meters above the EGM96 geoid, stored row-major with
/// row 0 at the southern edge and column 0 at the western edge.
/// [`NO_DATA_VALUE`](crate::NO_DATA_VALUE) marks voids.
pub struct TerrainFrame {
    posts: Vec<i16>,
    rows: usize,
    cols: usize,
    origin: GeodeticCoordinate,
    lat_step: f64,
    lon_step: f64,
    bounds: BoundingBox,
    accuracy: DemFrameAccuracy,
    source: TerrainSource,
    producer_code: String,
    classification_marking: String,
}

impl TerrainFrame {
    /// Assemble a frame from decoded posts and metadata.
    ///
    /// `origin` is the geographic position of post `(0, 0)` (the
    /// south-west corner); `lat_step`/`lon_step` are the per-axis post
    /// spacings in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::FrameShapeMismatch`] when `posts` does not
    /// hold `rows * cols` samples, [`ReliefError::InvalidGridResource`]
    /// for degenerate shape or spacing, and a range error if the frame
    /// extends past the geodetic domain.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        posts: Vec<i16>,
        rows: usize,
        cols: usize,
        origin: GeodeticCoordinate,
        lat_step: f64,
        lon_step: f64,
        accuracy: DemFrameAccuracy,
        source: TerrainSource,
        producer_code: String,
        classification_marking: String,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 || lat_step <= 0.0 || lon_step <= 0.0 {
            return Err(ReliefError::InvalidGridResource {
                reason: format!(
                    "degenerate frame: {}x{} posts at {}°/{}° spacing",
                    rows, cols, lat_step, lon_step
                ),
            });
        }
        if posts.len() != rows * cols {
            return Err(ReliefError::FrameShapeMismatch {
                rows,
                cols,
                posts: posts.len(),
            });
        }

        let upper_right = GeodeticCoordinate::new(
            origin.lat() + (rows - 1) as f64 * lat_step,
            origin.lon() + (cols - 1) as f64 * lon_step,
        )?;
        let bounds = BoundingBox::new(origin.clone(), upper_right)?;

        Ok(Self {
            posts,
            rows,
            cols,
            origin,
            lat_step,
            lon_step,
            bounds,
            accuracy,
            source,
            producer_code,
            classification_marking,
        })
    }

    /// Raw post value at a grid index.
    pub fn post(&self, row: usize, col: usize) -> i16 {
        self.posts[row * self.cols + col]
    }

    /// Geographic position of a post as `(lat, lon)`.
    pub fn post_position(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin.lat() + row as f64 * self.lat_step,
            self.origin.lon() + col as f64 * self.lon_step,
        )
    }

    /// Number of south-to-north rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of west-to-east columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Geographic extent of the frame, post centers at the corners.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Per-axis post spacing in degrees as `(lat_step, lon_step)`.
    pub fn spacing(&self) -> (f64, f64) {
        (self.lat_step, self.lon_step)
    }

    /// Frame accuracy metadata (in meters as decoded).
    pub fn accuracy(&self) -> &DemFrameAccuracy {
        &self.accuracy
    }

    /// Terrain model family.
    pub fn source(&self) -> TerrainSource {
        self.source
    }

    /// Producing agency code as decoded, padding included.
    pub fn producer_code(&self) -> &str {
        &self.producer_code
    }

    /// Security classification marking.
    pub fn classification_marking(&self) -> &str {
        &self.classification_marking
    }
}

/// Narrow interface to the external terrain-file decoder.
///
/// Implementations decode one DTED/SRTM-style file into a [`TerrainFrame`];
/// which file covers a given cell is the calling layer's concern.
pub trait TerrainFrameReader {
    /// Decode the terrain file at `path` into a frame.
    fn read_frame(&self, path: &Path) -> Result<TerrainFrame>;
}
