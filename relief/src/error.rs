//! Error types for the relief library.
//!
//! Two error enums cover the crate: [`CoordParseError`] for the free-text
//! coordinate grammar and [`ReliefError`] for everything else (grid resources,
//! value-type validation, I/O).
//!
//! # Legacy error codes
//!
//! The system this library replaces reported parse failures as negative
//! sentinel values below -1000 sharing the numeric channel with successful
//! results. Integrations still key on those numbers, so every
//! [`CoordParseError`] maps to its fixed legacy code via
//! [`CoordParseError::legacy_code`] and back via
//! [`CoordParseError::from_legacy_code`]. The two functions are the complete
//! code table; no other place in the crate mentions these numbers.

use thiserror::Error;

use crate::coords::Axis;

/// A malformed or out-of-range coordinate string.
///
/// Each variant corresponds to one row of the legacy error-code table; see
/// [`CoordParseError::legacy_code`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordParseError {
    /// More than one sign or hemisphere letter in the input.
    #[error("too many direction indicators (sign or hemisphere letter)")]
    TooManyDirectionIndicators,

    /// Hemisphere letter belongs to the other axis (E/W on a latitude,
    /// N/S on a longitude).
    #[error("hemisphere letter does not match a {axis} value")]
    WrongHemisphere { axis: Axis },

    /// A character outside digits, separators, sign, and hemisphere letters.
    #[error("invalid character in {axis} string")]
    InvalidCharacter { axis: Axis },

    /// More than one decimal point in the whole string.
    #[error("more than one decimal point")]
    MultipleDecimalPoints,

    /// Undelimited DMS value with a digit count no layout matches.
    #[error("unsupported digit count for undelimited {axis} value")]
    WrongDigitCount { axis: Axis },

    /// Delimited value with a field count other than 2 or 3.
    #[error("expected degrees minutes [seconds], wrong number of fields")]
    WrongFieldCount,

    /// Degrees field carries a decimal point in delimited form.
    #[error("degrees must be an integer in delimited form")]
    DegreesMustBeInteger,

    /// Minutes field carries a decimal point while seconds are present.
    #[error("minutes must be an integer when seconds are present")]
    MinutesMustBeInteger,

    /// Minutes value of 60 or more.
    #[error("minutes must be less than 60")]
    MinutesOutOfRange,

    /// Seconds value of 60 or more.
    #[error("seconds must be less than 60")]
    SecondsOutOfRange,

    /// Latitude above +90 degrees.
    #[error("latitude exceeds 90 degrees")]
    LatitudeTooHigh,

    /// Latitude below -90 degrees.
    #[error("latitude below -90 degrees")]
    LatitudeTooLow,

    /// Longitude above +180 degrees.
    #[error("longitude exceeds 180 degrees")]
    LongitudeTooHigh,

    /// Longitude below -180 degrees.
    #[error("longitude below -180 degrees")]
    LongitudeTooLow,
}

impl CoordParseError {
    /// The fixed legacy integer code for this condition.
    ///
    /// | Code  | Condition                                   |
    /// |-------|---------------------------------------------|
    /// | -1001 | invalid character (latitude)                |
    /// | -1002 | unsupported digit count (latitude)          |
    /// | -1003 | latitude above +90                          |
    /// | -1004 | latitude below -90                          |
    /// | -1011 | invalid character (longitude)               |
    /// | -1012 | unsupported digit count (longitude)         |
    /// | -1013 | longitude above +180                        |
    /// | -1014 | longitude below -180                        |
    /// | -1021 | too many direction indicators               |
    /// | -1022 | wrong hemisphere letter (latitude)          |
    /// | -1023 | wrong hemisphere letter (longitude)         |
    /// | -1024 | more than one decimal point                 |
    /// | -1025 | wrong field count                           |
    /// | -1026 | non-integer degrees in delimited form       |
    /// | -1027 | non-integer minutes with seconds present    |
    /// | -1028 | minutes >= 60                               |
    /// | -1029 | seconds >= 60                               |
    pub fn legacy_code(&self) -> i32 {
        use Axis::*;
        use CoordParseError::*;
        match self {
            InvalidCharacter { axis: Latitude } => -1001,
            WrongDigitCount { axis: Latitude } => -1002,
            LatitudeTooHigh => -1003,
            LatitudeTooLow => -1004,
            InvalidCharacter { axis: Longitude } => -1011,
            WrongDigitCount { axis: Longitude } => -1012,
            LongitudeTooHigh => -1013,
            LongitudeTooLow => -1014,
            TooManyDirectionIndicators => -1021,
            WrongHemisphere { axis: Latitude } => -1022,
            WrongHemisphere { axis: Longitude } => -1023,
            MultipleDecimalPoints => -1024,
            WrongFieldCount => -1025,
            DegreesMustBeInteger => -1026,
            MinutesMustBeInteger => -1027,
            MinutesOutOfRange => -1028,
            SecondsOutOfRange => -1029,
        }
    }

    /// Look up the condition for a legacy integer code.
    ///
    /// Returns `None` for codes outside the table. Inverse of
    /// [`Self::legacy_code`].
    pub fn from_legacy_code(code: i32) -> Option<Self> {
        use Axis::*;
        use CoordParseError::*;
        Some(match code {
            -1001 => InvalidCharacter { axis: Latitude },
            -1002 => WrongDigitCount { axis: Latitude },
            -1003 => LatitudeTooHigh,
            -1004 => LatitudeTooLow,
            -1011 => InvalidCharacter { axis: Longitude },
            -1012 => WrongDigitCount { axis: Longitude },
            -1013 => LongitudeTooHigh,
            -1014 => LongitudeTooLow,
            -1021 => TooManyDirectionIndicators,
            -1022 => WrongHemisphere { axis: Latitude },
            -1023 => WrongHemisphere { axis: Longitude },
            -1024 => MultipleDecimalPoints,
            -1025 => WrongFieldCount,
            -1026 => DegreesMustBeInteger,
            -1027 => MinutesMustBeInteger,
            -1028 => MinutesOutOfRange,
            -1029 => SecondsOutOfRange,
            _ => return None,
        })
    }
}

/// Errors from grid resources, value-type validation, and scanning.
#[derive(Error, Debug)]
pub enum ReliefError {
    /// IO error when reading a grid resource.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Geoid grid resource failed structural validation.
    #[error("invalid geoid grid resource: {reason}")]
    InvalidGridResource { reason: String },

    /// Geoid grid value count does not match the declared bounds and spacing.
    #[error("geoid grid size mismatch: {actual} values for {expected} grid nodes")]
    GridSizeMismatch { expected: usize, actual: usize },

    /// Coordinate outside the valid geodetic domain.
    #[error("coordinate out of range: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    /// Accuracy value outside the DEM accuracy domain.
    #[error("accuracy value out of range: {value} (valid: -1 to 9999)")]
    AccuracyOutOfRange { value: i32 },

    /// Bounding box corners are not ordered south-west to north-east.
    #[error("bounding box lower-left corner must be south-west of upper-right")]
    InvalidBoundingBox,

    /// Polygon mask with fewer than three distinct vertices.
    #[error("polygon mask needs at least 3 distinct vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },

    /// Frame post count disagrees with the declared grid shape.
    #[error("frame shape mismatch: {rows}x{cols} grid cannot hold {posts} posts")]
    FrameShapeMismatch {
        rows: usize,
        cols: usize,
        posts: usize,
    },

    /// Geometry type that cannot be turned into a region mask.
    #[error("unsupported mask geometry: {geometry}")]
    UnsupportedMaskGeometry { geometry: String },

    /// Malformed coordinate string.
    #[error("malformed coordinate: {0}")]
    Parse(#[from] CoordParseError),
}

/// Result type alias using [`ReliefError`].
pub type Result<T> = std::result::Result<T, ReliefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReliefError::CoordinateOutOfRange {
            lat: 91.0,
            lon: 0.0,
        };
        assert!(err.to_string().contains("91"));

        let err = ReliefError::AccuracyOutOfRange { value: 10000 };
        assert!(err.to_string().contains("10000"));

        let err = CoordParseError::WrongHemisphere {
            axis: Axis::Latitude,
        };
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn test_legacy_codes_below_minus_1000() {
        for code in -1029..=-1001 {
            if let Some(err) = CoordParseError::from_legacy_code(code) {
                assert!(err.legacy_code() <= -1001);
            }
        }
    }

    #[test]
    fn test_legacy_code_round_trip() {
        use Axis::*;
        use CoordParseError::*;
        let all = [
            TooManyDirectionIndicators,
            WrongHemisphere { axis: Latitude },
            WrongHemisphere { axis: Longitude },
            InvalidCharacter { axis: Latitude },
            InvalidCharacter { axis: Longitude },
            MultipleDecimalPoints,
            WrongDigitCount { axis: Latitude },
            WrongDigitCount { axis: Longitude },
            WrongFieldCount,
            DegreesMustBeInteger,
            MinutesMustBeInteger,
            MinutesOutOfRange,
            SecondsOutOfRange,
            LatitudeTooHigh,
            LatitudeTooLow,
            LongitudeTooHigh,
            LongitudeTooLow,
        ];

        let mut seen = std::collections::HashSet::new();
        for err in all {
            let code = err.legacy_code();
            assert!(seen.insert(code), "duplicate legacy code {}", code);
            assert_eq!(CoordParseError::from_legacy_code(code), Some(err));
        }
    }

    #[test]
    fn test_unknown_legacy_code() {
        assert_eq!(CoordParseError::from_legacy_code(-999), None);
        assert_eq!(CoordParseError::from_legacy_code(0), None);
        assert_eq!(CoordParseError::from_legacy_code(-2000), None);
    }
}
