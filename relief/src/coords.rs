//! Free-text geodetic coordinate parsing.
//!
//! This module parses the permissive coordinate grammar accepted by legacy
//! elevation-query integrations: plain decimal degrees, undelimited
//! degrees/minutes/seconds packed into 1–7 digits, and delimited
//! `D M [S]` forms with a hemisphere letter anywhere in the string.
//!
//! # Grammar
//!
//! - Digits, at most one decimal point, one optional leading `+`/`-` sign.
//! - One optional hemisphere letter (`N S E W`, either case) anywhere.
//! - Field separators `- / \ : ; ) ( _` and space, runs collapsed to one.
//!
//! Accepted shapes per axis:
//!
//! | Digits | Latitude | Longitude |
//! |--------|----------|-----------|
//! | 1–2    | D        | D         |
//! | 3      | DMM      | DDD       |
//! | 4      | DDMM     | DDMM      |
//! | 5      | DMMSS    | DDDMM     |
//! | 6      | DDMMSS   | DDMMSS    |
//! | 7      | —        | DDDMMSS   |
//!
//! A trailing decimal fraction attaches to the last packed field. Delimited
//! input takes 2 fields (degrees, minutes) or 3 (degrees, integer minutes,
//! seconds).
//!
//! DMS conversion runs in single precision; see [`parse_coordinate`].
//!
//! # Example
//!
//! ```
//! use relief::coords::{parse_coordinate, Axis};
//!
//! let dd = parse_coordinate("N23 01 25.2", Axis::Latitude).unwrap();
//! assert!((dd - 23.023668).abs() < 1e-9);
//!
//! let dd = parse_coordinate("W123:01:25.2", Axis::Longitude).unwrap();
//! assert!((dd + 123.023664).abs() < 1e-9);
//! ```

use std::fmt;

use crate::error::CoordParseError;

/// Axis a coordinate string is parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute decimal value accepted on this axis.
    pub fn max_degrees(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Threshold below which a bare number is read as decimal degrees
    /// rather than packed DMS. Longitude allows up to 360 here so that
    /// values like `250` fail the range check as decimals instead of
    /// being misread as 2°50'.
    fn decimal_threshold(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 360.0,
        }
    }

    fn hemisphere_letters(&self) -> [char; 2] {
        match self {
            Axis::Latitude => ['N', 'S'],
            Axis::Longitude => ['E', 'W'],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Characters that separate DMS fields. Runs collapse to a single break.
const SEPARATORS: &[char] = &['-', '/', '\\', ':', ';', ')', '(', '_', ' '];

/// Parse a free-form latitude or longitude string into decimal degrees.
///
/// Plain decimal input is returned as-is after a range check. DMS input is
/// converted with `dd = deg + min/60 + sec/3600`, rounded half-up at the
/// sixth decimal, and range-checked against the axis domain. The DMS
/// conversion accumulates in single precision, matching the converters
/// this parser replaces: integrations pin their expectations to those
/// exact outputs, so 23°01'25.2" is 23.023668 rather than the 23.023667 a
/// double-precision combine would give.
///
/// # Errors
///
/// Returns a [`CoordParseError`] describing the first malformed condition
/// encountered; every variant carries a fixed legacy integer code (see
/// [`CoordParseError::legacy_code`]).
///
/// # Example
///
/// ```
/// use relief::coords::{parse_coordinate, Axis};
///
/// assert_eq!(parse_coordinate("-122.41", Axis::Longitude).unwrap(), -122.41);
/// assert!(parse_coordinate("90.1", Axis::Latitude).is_err());
/// ```
pub fn parse_coordinate(input: &str, axis: Axis) -> Result<f64, CoordParseError> {
    let trimmed = input.trim();

    if let Some(value) = try_plain_decimal(trimmed, axis) {
        return check_range(value, axis);
    }

    let value = parse_dms(trimmed, axis)?;
    check_range(value, axis)
}

/// Read a bare number as decimal degrees if it qualifies.
///
/// A string qualifies when it is purely numeric (optional sign, digits, at
/// most one decimal point), its magnitude stays within the axis threshold,
/// and the digits do not start with a `00` pad (packed DMS like `0023`
/// must go through the DMS layouts).
fn try_plain_decimal(trimmed: &str, axis: Axis) -> Option<f64> {
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || digits.starts_with("00") {
        return None;
    }

    let mut dots = 0;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' => dots += 1,
            _ => return None,
        }
    }
    if dots > 1 || !digits.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: f64 = trimmed.parse().ok()?;
    if value.abs() > axis.decimal_threshold() {
        return None;
    }
    Some(value)
}

/// Outcome of scanning the raw string: hemisphere state plus clean
/// numeric tokens with all separators resolved.
struct TokenStream {
    tokens: Vec<String>,
    negative: bool,
}

/// Scan the input into numeric tokens, extracting sign and hemisphere
/// indicators and collapsing separator runs.
///
/// Indicators are extracted and counted across the whole string first;
/// only then are the remaining characters validated. `N1.2.3W` therefore
/// reports the doubled indicator, not the doubled decimal point.
fn tokenize(trimmed: &str, axis: Axis) -> Result<TokenStream, CoordParseError> {
    // A sign is an indicator only in the very first position.
    let mut indicators = 0;
    let mut negative = trimmed.starts_with('-');
    let rest = match trimmed.strip_prefix(['+', '-']) {
        Some(stripped) => {
            indicators += 1;
            stripped
        }
        None => trimmed,
    };

    let own = axis.hemisphere_letters();
    let mut wrong_axis = false;
    for c in rest.chars() {
        let upper = c.to_ascii_uppercase();
        if matches!(upper, 'N' | 'S' | 'E' | 'W') {
            indicators += 1;
            if own.contains(&upper) {
                negative = upper == 'S' || upper == 'W';
            } else {
                wrong_axis = true;
            }
        }
    }
    if indicators > 1 {
        return Err(CoordParseError::TooManyDirectionIndicators);
    }
    if wrong_axis {
        return Err(CoordParseError::WrongHemisphere { axis });
    }

    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut dots = 0;

    for c in rest.chars() {
        match c {
            // Hemisphere letters were consumed above; they are removed
            // from the stream, not treated as field breaks.
            'N' | 'S' | 'E' | 'W' | 'n' | 's' | 'e' | 'w' => {}
            '0'..='9' => current.push(c),
            '.' => {
                dots += 1;
                if dots > 1 {
                    return Err(CoordParseError::MultipleDecimalPoints);
                }
                current.push(c);
            }
            _ if SEPARATORS.contains(&c) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => return Err(CoordParseError::InvalidCharacter { axis }),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(TokenStream { tokens, negative })
}

/// Degrees, minutes, and seconds fields ready for combination.
struct DmsFields {
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

/// Parse a DMS-form string (delimited or packed) into signed decimal degrees.
fn parse_dms(trimmed: &str, axis: Axis) -> Result<f64, CoordParseError> {
    let stream = tokenize(trimmed, axis)?;

    let fields = match stream.tokens.len() {
        0 => return Err(CoordParseError::WrongFieldCount),
        1 => split_packed(&stream.tokens[0], axis)?,
        2 => {
            let degrees = integer_field(&stream.tokens[0], CoordParseError::DegreesMustBeInteger)?;
            let minutes = numeric_field(&stream.tokens[1], axis)?;
            DmsFields {
                degrees,
                minutes,
                seconds: 0.0,
            }
        }
        3 => {
            let degrees = integer_field(&stream.tokens[0], CoordParseError::DegreesMustBeInteger)?;
            let minutes = integer_field(&stream.tokens[1], CoordParseError::MinutesMustBeInteger)?;
            let seconds = numeric_field(&stream.tokens[2], axis)?;
            DmsFields {
                degrees,
                minutes,
                seconds,
            }
        }
        _ => return Err(CoordParseError::WrongFieldCount),
    };

    if fields.minutes >= 60.0 {
        return Err(CoordParseError::MinutesOutOfRange);
    }
    if fields.seconds >= 60.0 {
        return Err(CoordParseError::SecondsOutOfRange);
    }

    // Total seconds accumulated in f32, like the converters this replaces.
    let total =
        fields.degrees as f32 * 3600.0 + fields.minutes as f32 * 60.0 + fields.seconds as f32;
    let dd = round_half_up_6(total / 3600.0);
    Ok(if stream.negative { -dd } else { dd })
}

/// Split an undelimited token into DMS fields by digit count.
///
/// A trailing decimal fraction attaches to the last field of the layout.
fn split_packed(token: &str, axis: Axis) -> Result<DmsFields, CoordParseError> {
    let (int_part, fraction) = match token.find('.') {
        Some(idx) => token.split_at(idx),
        None => (token, ""),
    };

    // Field widths: (degrees, minutes, seconds) digit counts.
    let layout = match (int_part.len(), axis) {
        (0..=2, _) => (int_part.len(), 0, 0),
        (3, Axis::Latitude) => (1, 2, 0),
        (3, Axis::Longitude) => (3, 0, 0),
        (4, _) => (2, 2, 0),
        (5, Axis::Latitude) => (1, 2, 2),
        (5, Axis::Longitude) => (3, 2, 0),
        (6, _) => (2, 2, 2),
        (7, Axis::Longitude) => (3, 2, 2),
        _ => return Err(CoordParseError::WrongDigitCount { axis }),
    };

    let (deg_digits, rest) = int_part.split_at(layout.0);
    let (min_digits, sec_digits) = rest.split_at(layout.1);

    // The fraction belongs to whichever field is last in the layout.
    let mut degrees = deg_digits.to_string();
    let mut minutes = min_digits.to_string();
    let mut seconds = sec_digits.to_string();
    if !fraction.is_empty() {
        if !seconds.is_empty() {
            seconds.push_str(fraction);
        } else if !minutes.is_empty() {
            minutes.push_str(fraction);
        } else {
            degrees.push_str(fraction);
        }
    }

    Ok(DmsFields {
        degrees: numeric_field(&degrees, axis)?,
        minutes: if minutes.is_empty() {
            0.0
        } else {
            numeric_field(&minutes, axis)?
        },
        seconds: if seconds.is_empty() {
            0.0
        } else {
            numeric_field(&seconds, axis)?
        },
    })
}

/// Parse a token that must not contain a decimal point.
fn integer_field(token: &str, on_fraction: CoordParseError) -> Result<f64, CoordParseError> {
    if token.contains('.') {
        return Err(on_fraction);
    }
    // Tokens are all-digit by construction.
    token.parse().map_err(|_| on_fraction)
}

/// Parse a digits-and-dot token as f64.
fn numeric_field(token: &str, axis: Axis) -> Result<f64, CoordParseError> {
    token
        .parse()
        .map_err(|_| CoordParseError::InvalidCharacter { axis })
}

/// Half-up rounding at the sixth decimal place.
///
/// The product is formed in single precision; the legacy outputs depend on
/// that (e.g. 123°01'25.2" rounds to 123.023664, not 123.023667).
fn round_half_up_6(value: f32) -> f64 {
    (value * 1_000_000.0).round() as f64 / 1_000_000.0
}

/// Range-check a decimal-degree value against the axis domain.
fn check_range(value: f64, axis: Axis) -> Result<f64, CoordParseError> {
    let max = axis.max_degrees();
    if value > max {
        return Err(match axis {
            Axis::Latitude => CoordParseError::LatitudeTooHigh,
            Axis::Longitude => CoordParseError::LongitudeTooHigh,
        });
    }
    if value < -max {
        return Err(match axis {
            Axis::Latitude => CoordParseError::LatitudeTooLow,
            Axis::Longitude => CoordParseError::LongitudeTooLow,
        });
    }
    Ok(value)
}
