//! EGM96 geoid-height grid with bilinear interpolation.
//!
//! The geoid height at a point is the separation between the EGM96 geoid and
//! the WGS84 ellipsoid. [`GeoidHeightGrid`] holds the full global grid of
//! sampled separations in memory and interpolates between the four
//! surrounding grid nodes for any query point.
//!
//! The grid is loaded eagerly, exactly once, and is immutable afterwards, so
//! a single instance can be shared freely across concurrent readers.
//!
//! # Resource Format
//!
//! The on-disk resource is a header of six big-endian `f64` values
//! (`min_lat`, `max_lat`, `min_lon`, `max_lon`, `lat_spacing`, `lon_spacing`)
//! followed by the grid values as big-endian `f64`, row-major, rows ordered
//! south to north and columns west to east. Longitude runs `[0, 360]` with
//! the closing column duplicated so interpolation never walks off the
//! dateline. A `.zip`-wrapped resource is accepted and decompressed in
//! memory.
//!
//! The standard EGM96 15-arc-minute grid is 721 × 1441 samples (~8 MB).

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{ReliefError, Result};

/// Byte length of the six-f64 resource header.
const HEADER_LEN: usize = 48;

/// Immutable global grid of geoid-height offsets in meters.
///
/// # Example
///
/// ```
/// use relief::GeoidHeightGrid;
///
/// // 3 x 5 global grid: 90° spacing on both axes, all offsets zero.
/// let grid = GeoidHeightGrid::from_parts(
///     -90.0, 90.0, 0.0, 360.0, 90.0, 90.0,
///     vec![0.0; 15],
/// )?;
/// assert_eq!(grid.height(12.0, -45.0)?, 0.0);
/// # Ok::<(), relief::ReliefError>(())
/// ```
pub struct GeoidHeightGrid {
    /// Row-major offsets, south-to-north rows, west-to-east columns.
    values: Vec<f64>,
    rows: usize,
    cols: usize,
    min_lat: f64,
    min_lon: f64,
    lat_spacing: f64,
    lon_spacing: f64,
}

impl GeoidHeightGrid {
    /// Build a grid from already-deserialized parts.
    ///
    /// The declared bounds must cover the whole query domain (latitude
    /// ±90°, longitude `[0, 360]` including the closing column).
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::InvalidGridResource`] for non-positive
    /// spacing or bounds that do not cover the globe, and
    /// [`ReliefError::GridSizeMismatch`] when `values` does not hold
    /// exactly `rows * cols` samples.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
        lat_spacing: f64,
        lon_spacing: f64,
        values: Vec<f64>,
    ) -> Result<Self> {
        if lat_spacing <= 0.0 || lon_spacing <= 0.0 {
            return Err(ReliefError::InvalidGridResource {
                reason: format!(
                    "non-positive spacing: lat {} lon {}",
                    lat_spacing, lon_spacing
                ),
            });
        }
        if min_lat > -90.0 || max_lat < 90.0 || min_lon > 0.0 || max_lon < 360.0 {
            return Err(ReliefError::InvalidGridResource {
                reason: format!(
                    "grid does not cover the globe: lat [{}, {}], lon [{}, {}]",
                    min_lat, max_lat, min_lon, max_lon
                ),
            });
        }

        let rows = ((max_lat - min_lat) / lat_spacing).round() as usize + 1;
        let cols = ((max_lon - min_lon) / lon_spacing).round() as usize + 1;
        if rows < 2 || cols < 2 {
            return Err(ReliefError::InvalidGridResource {
                reason: format!("grid too small: {} rows x {} cols", rows, cols),
            });
        }
        if values.len() != rows * cols {
            return Err(ReliefError::GridSizeMismatch {
                expected: rows * cols,
                actual: values.len(),
            });
        }

        Ok(Self {
            values,
            rows,
            cols,
            min_lat,
            min_lon,
            lat_spacing,
            lon_spacing,
        })
    }

    /// Load a grid resource from a file, memory-mapping the raw form.
    ///
    /// A path ending in `.zip` is treated as a zip archive whose first
    /// entry holds the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped, or if the
    /// resource fails structural validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
        {
            return Self::from_zip(path);
        }

        let file = File::open(path)?;

        // SAFETY: the mapping is read-only and dropped before this function
        // returns; the decoded grid owns its own memory.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Decode a raw resource: 48-byte header plus big-endian f64 samples.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(ReliefError::InvalidGridResource {
                reason: format!("resource truncated at {} bytes", data.len()),
            });
        }

        let min_lat = read_f64(data, 0);
        let max_lat = read_f64(data, 8);
        let min_lon = read_f64(data, 16);
        let max_lon = read_f64(data, 24);
        let lat_spacing = read_f64(data, 32);
        let lon_spacing = read_f64(data, 40);

        let body = &data[HEADER_LEN..];
        if body.len() % 8 != 0 {
            return Err(ReliefError::InvalidGridResource {
                reason: format!("sample section of {} bytes is not f64-aligned", body.len()),
            });
        }

        let values: Vec<f64> = body
            .chunks_exact(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(chunk);
                f64::from_be_bytes(buf)
            })
            .collect();

        Self::from_parts(
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            lat_spacing,
            lon_spacing,
            values,
        )
    }

    /// Extract and decode a zip-wrapped resource.
    fn from_zip(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| ReliefError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        let mut entry = archive
            .by_index(0)
            .map_err(|e| ReliefError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        let mut data = Vec::new();
        std::io::copy(&mut entry, &mut data)?;
        Self::from_bytes(&data)
    }

    /// Geoid height in meters at the given point, bilinearly interpolated
    /// between the four surrounding grid nodes.
    ///
    /// At an exact grid node the interpolation weights collapse and the
    /// stored sample is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::CoordinateOutOfRange`] if `lat` is outside
    /// ±90° or `lon` outside ±180°.
    pub fn height(&self, lat: f64, lon: f64) -> Result<f64> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ReliefError::CoordinateOutOfRange { lat, lon });
        }

        // Shift into grid space: latitude measured from the south edge,
        // longitude wrapped into [0, 360).
        let norm_lat = lat - self.min_lat;
        let norm_lon = (if lon < 0.0 { lon + 360.0 } else { lon }) - self.min_lon;

        let (row, delta_lat) = self.cell(norm_lat, self.lat_spacing, self.rows);
        let (col, delta_lon) = self.cell(norm_lon, self.lon_spacing, self.cols);

        let lower_left = self.node(row, col);
        let lower_right = self.node(row, col + 1);
        let upper_left = self.node(row + 1, col);
        let upper_right = self.node(row + 1, col + 1);

        let frac_lon = delta_lon / self.lon_spacing;
        let frac_lat = delta_lat / self.lat_spacing;

        let r1 = lower_left * (1.0 - frac_lon) + lower_right * frac_lon;
        let r2 = upper_left * (1.0 - frac_lon) + upper_right * frac_lon;
        Ok(r1 * (1.0 - frac_lat) + r2 * frac_lat)
    }

    /// Locate the cell index and intra-cell offset along one axis.
    ///
    /// The index is clamped so `index + 1` stays on the grid; at the
    /// closing row/column the offset grows to the full spacing and the
    /// interpolation weight collapses onto the far node.
    fn cell(&self, normalized: f64, spacing: f64, count: usize) -> (usize, f64) {
        let mut index = (normalized / spacing).floor() as usize;
        if index + 1 >= count {
            index = count - 2;
        }
        let delta = normalized - index as f64 * spacing;
        (index, delta)
    }

    /// Stored sample at a grid node.
    pub fn node(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Number of south-to-north rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of west-to-east columns (closing column included).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid spacing in degrees as `(lat_spacing, lon_spacing)`.
    pub fn spacing(&self) -> (f64, f64) {
        (self.lat_spacing, self.lon_spacing)
    }
}

fn read_f64(data: &[u8], offset: usize) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    f64::from_be_bytes(buf)
}
