//! Elevation result types and the enums that qualify them.

use crate::frame::DemFrameAccuracy;
use crate::geodetic::GeodeticCoordinate;

/// Raw post value reserved for "no data available" in DEM frames.
pub const NO_DATA_VALUE: i16 = -32767;

/// Feet per meter, used wherever lengths convert out of meters.
pub const FEET_PER_METER: f64 = 3.280_839_895;

/// Vertical reference surface for an elevation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarthModel {
    /// EGM96 geoid (mean sea level); the native reference of DEM posts.
    Egm96,
    /// WGS84 ellipsoid; posts are shifted by the local geoid height.
    Wgs84,
}

/// Length unit for elevations and accuracy figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Feet,
}

impl LengthUnit {
    /// Convert a length in meters into this unit.
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            LengthUnit::Meters => meters,
            LengthUnit::Feet => meters * FEET_PER_METER,
        }
    }
}

/// Family of terrain model a frame was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainSource {
    Dted0,
    Dted1,
    Dted2,
    Srtm1,
    Srtm3,
}

/// A single elevation sample decorated with position, accuracy, and
/// provenance.
///
/// Built once by the extremes scanner and immutable afterwards. The
/// elevation domain is `[-32767, 32767]` with [`NO_DATA_VALUE`] reserved;
/// the scanner never emits a no-data point.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationDataPoint {
    elevation: i32,
    coordinate: GeodeticCoordinate,
    accuracy: DemFrameAccuracy,
    units: LengthUnit,
    source: TerrainSource,
    earth_model: EarthModel,
    classification_marking: String,
    producer_code: String,
}

impl ElevationDataPoint {
    /// Assemble a data point from its parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        elevation: i32,
        coordinate: GeodeticCoordinate,
        accuracy: DemFrameAccuracy,
        units: LengthUnit,
        source: TerrainSource,
        earth_model: EarthModel,
        classification_marking: String,
        producer_code: String,
    ) -> Self {
        Self {
            elevation,
            coordinate,
            accuracy,
            units,
            source,
            earth_model,
            classification_marking,
            producer_code,
        }
    }

    /// Elevation value in [`Self::units`].
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    /// Position of the post this value was sampled at.
    pub fn coordinate(&self) -> &GeodeticCoordinate {
        &self.coordinate
    }

    /// Accuracy metadata of the producing frame, in [`Self::units`].
    pub fn accuracy(&self) -> &DemFrameAccuracy {
        &self.accuracy
    }

    /// Unit of the elevation and accuracy values.
    pub fn units(&self) -> LengthUnit {
        self.units
    }

    /// Terrain model family the frame came from.
    pub fn source(&self) -> TerrainSource {
        self.source
    }

    /// Vertical reference the elevation is expressed against.
    pub fn earth_model(&self) -> EarthModel {
        self.earth_model
    }

    /// Security classification marking inherited from the frame.
    pub fn classification_marking(&self) -> &str {
        &self.classification_marking
    }

    /// Producing agency code, stripped of padding.
    pub fn producer_code(&self) -> &str {
        &self.producer_code
    }
}

/// The extreme elevations found in a query region.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxElevation {
    min: ElevationDataPoint,
    max: ElevationDataPoint,
}

impl MinMaxElevation {
    pub fn new(min: ElevationDataPoint, max: ElevationDataPoint) -> Self {
        Self { min, max }
    }

    /// Lowest elevation post in the region.
    pub fn min(&self) -> &ElevationDataPoint {
        &self.min
    }

    /// Highest elevation post in the region.
    pub fn max(&self) -> &ElevationDataPoint {
        &self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(LengthUnit::Meters.from_meters(100.0), 100.0);
        assert_eq!(LengthUnit::Feet.from_meters(100.0).round(), 328.0);
        assert_eq!(LengthUnit::Feet.from_meters(1.0).round(), 3.0);
    }

    #[test]
    fn test_no_data_value() {
        // The sentinel sits one above i16::MIN; -32768 is not the marker.
        assert_eq!(NO_DATA_VALUE, -32767);
        assert_ne!(NO_DATA_VALUE as i32, i16::MIN as i32);
    }
}
