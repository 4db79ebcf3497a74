//! # Relief - DEM Elevation Query Library
//!
//! Core building blocks for querying Digital Elevation Model (DEM) data:
//! permissive geodetic coordinate parsing, EGM96 geoid height lookup, and
//! min/max elevation scans over terrain frames.
//!
//! ## Features
//!
//! - **Permissive parsing**: Decimal degrees, packed DMS (`DDMMSS`), and
//!   delimited DMS with hemisphere letters all parse from free text
//! - **Geoid aware**: Elevations convert between the EGM96 geoid and the
//!   WGS84 ellipsoid via a bilinearly interpolated global grid
//! - **Memory efficient**: Geoid grids load via memory-mapped I/O, plain
//!   or zip-compressed
//! - **Deterministic**: Extreme scans visit posts in a fixed order, so
//!   tied elevations always resolve the same way
//!
//! ## Quick Start
//!
//! ```
//! use relief::GeodeticCoordinate;
//!
//! // Free-form coordinate text, any common DMS shape
//! let position = GeodeticCoordinate::parse("N35 21 38", "138 43 38 E")?;
//! assert!((position.lat() - 35.360552).abs() < 1e-9);
//! assert!((position.lon() - 138.727216).abs() < 1e-9);
//! # Ok::<(), relief::ReliefError>(())
//! ```
//!
//! ```no_run
//! use relief::{scan_extremes, EarthModel, GeoidHeightGrid, LengthUnit};
//!
//! # fn load_frame() -> relief::TerrainFrame { unimplemented!() }
//! let geoid = GeoidHeightGrid::from_file("/data/egm96.grd")?;
//! let frame = load_frame();
//!
//! if let Some(extremes) = scan_extremes(&frame, None, EarthModel::Wgs84, LengthUnit::Meters, &geoid) {
//!     println!("lowest: {}m highest: {}m",
//!         extremes.min().elevation(),
//!         extremes.max().elevation());
//! }
//! # Ok::<(), relief::ReliefError>(())
//! ```
//!
//! ## Data Conventions
//!
//! Terrain posts are 16-bit signed elevations in meters against the EGM96
//! geoid, stored row-major with row 0 at the southern edge. The value
//! -32767 marks a void post ([`NO_DATA_VALUE`]). Geoid grids are binary
//! files of big-endian `f64` samples behind a six-value header and must
//! cover the full globe.

pub mod coords;
pub mod error;
pub mod extremes;
pub mod frame;
pub mod geodetic;
pub mod geoid;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod point;

// Re-export main types at crate root for convenience
pub use coords::{parse_coordinate, Axis};
pub use error::{CoordParseError, ReliefError, Result};
pub use extremes::{scan_extremes, PolygonMask, RegionMask};
pub use frame::{DemFrameAccuracy, TerrainFrame, TerrainFrameReader, ACCURACY_NOT_AVAILABLE};
pub use geodetic::{BoundingBox, GeodeticCoordinate};
pub use geoid::GeoidHeightGrid;
pub use point::{
    EarthModel, ElevationDataPoint, LengthUnit, MinMaxElevation, TerrainSource, NO_DATA_VALUE,
};
