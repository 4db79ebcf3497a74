use anyhow::Result;
use relief::{GeodeticCoordinate, ReliefError};
use serde::Serialize;

#[derive(Serialize)]
struct ParseResponse<'a> {
    lat_text: &'a str,
    lon_text: &'a str,
    lat: f64,
    lon: f64,
}

pub fn run(lat_text: &str, lon_text: &str, json: bool) -> Result<()> {
    let coord = GeodeticCoordinate::parse(lat_text, lon_text).map_err(|e| match e {
        // Surface the numeric code alongside the message for parse errors
        ReliefError::Parse(p) => anyhow::anyhow!("{} (code {})", p, p.legacy_code()),
        other => anyhow::Error::new(other),
    })?;

    if json {
        let response = ParseResponse {
            lat_text,
            lon_text,
            lat: coord.lat(),
            lon: coord.lon(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{} {}", coord.lat(), coord.lon());
    }

    Ok(())
}
