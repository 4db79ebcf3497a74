use anyhow::{Context, Result};
use relief::{parse_coordinate, Axis, GeoidHeightGrid};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct HeightResponse {
    lat: f64,
    lon: f64,
    geoid_height: f64,
}

pub fn run(geoid: Option<PathBuf>, lat_text: &str, lon_text: &str, json: bool) -> Result<()> {
    let path = geoid
        .context("RELIEF_GEOID environment variable not set. Use --geoid or set RELIEF_GEOID")?;

    let lat = parse_coordinate(lat_text, Axis::Latitude)
        .with_context(|| format!("cannot parse latitude {:?}", lat_text))?;
    let lon = parse_coordinate(lon_text, Axis::Longitude)
        .with_context(|| format!("cannot parse longitude {:?}", lon_text))?;

    let grid = GeoidHeightGrid::from_file(&path)
        .with_context(|| format!("failed to load geoid grid {}", path.display()))?;

    let height = grid
        .height(lat, lon)
        .context("failed to interpolate geoid height")?;

    if json {
        let response = HeightResponse {
            lat,
            lon,
            geoid_height: height,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{:.3}", height);
    }

    Ok(())
}
