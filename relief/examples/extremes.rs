//! Example demonstrating a min/max elevation scan over a terrain frame.
//!
//! Run with: cargo run --example extremes -- /path/to/egm96.grd

use std::env;

use relief::frame::DemFrameAccuracy;
use relief::{
    scan_extremes, BoundingBox, EarthModel, GeodeticCoordinate, GeoidHeightGrid, LengthUnit,
    RegionMask, ReliefError, TerrainFrame, TerrainSource,
};

fn main() -> Result<(), ReliefError> {
    let geoid_path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example extremes -- /path/to/egm96.grd");
        std::process::exit(1);
    });

    let geoid = GeoidHeightGrid::from_file(&geoid_path)?;

    // Synthetic 101x101 frame over one degree with a single peak
    let size = 101usize;
    let posts: Vec<i16> = (0..size * size)
        .map(|i| {
            let row = (i / size) as i32 - 50;
            let col = (i % size) as i32 - 50;
            (3000 - (row * row + col * col) / 2).max(200) as i16
        })
        .collect();
    let frame = TerrainFrame::new(
        posts,
        size,
        size,
        GeodeticCoordinate::new(35.0, 138.0)?,
        0.01,
        0.01,
        DemFrameAccuracy::new(10, 5, 8, 4, LengthUnit::Meters)?,
        TerrainSource::Dted1,
        "USGS".to_string(),
        "UNCLASSIFIED".to_string(),
    )?;

    // Whole frame, geoid-referenced heights
    if let Some(extremes) = scan_extremes(&frame, None, EarthModel::Egm96, LengthUnit::Meters, &geoid)
    {
        let min = extremes.min();
        let max = extremes.max();
        println!("Full frame (EGM96):");
        println!(
            "  lowest:  {}m at ({:.2}, {:.2})",
            min.elevation(),
            min.coordinate().lat(),
            min.coordinate().lon()
        );
        println!(
            "  highest: {}m at ({:.2}, {:.2})",
            max.elevation(),
            max.coordinate().lat(),
            max.coordinate().lon()
        );
    }

    // Same scan restricted to a corner of the frame, ellipsoid heights
    let mask = RegionMask::Box(BoundingBox::from_degrees(35.0, 138.0, 35.25, 138.25)?);
    match scan_extremes(&frame, Some(&mask), EarthModel::Wgs84, LengthUnit::Feet, &geoid) {
        Some(extremes) => {
            println!("\nSouth-west corner (WGS84, feet):");
            println!("  lowest:  {}ft", extremes.min().elevation());
            println!("  highest: {}ft", extremes.max().elevation());
        }
        None => {
            println!("\nSouth-west corner: no valid posts in region");
        }
    }

    Ok(())
}
