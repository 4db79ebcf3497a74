use anyhow::{Context, Result};
use relief::GeoidHeightGrid;
use std::path::PathBuf;

pub fn run(geoid: Option<PathBuf>) -> Result<()> {
    let path = geoid
        .context("RELIEF_GEOID environment variable not set. Use --geoid or set RELIEF_GEOID")?;

    let grid = GeoidHeightGrid::from_file(&path)
        .with_context(|| format!("failed to load geoid grid {}", path.display()))?;

    let metadata = std::fs::metadata(&path)?;
    let (lat_spacing, lon_spacing) = grid.spacing();

    // Sample every node for the grid's value range
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let value = grid.node(row, col);
            min = min.min(value);
            max = max.max(value);
        }
    }

    println!("Grid: {}", path.display());
    println!("File size: {}", format_size(metadata.len()));
    println!();
    println!("Nodes: {}x{} (lat x lon)", grid.rows(), grid.cols());
    println!("Spacing: {}° lat, {}° lon", lat_spacing, lon_spacing);
    println!("Height range: {:.3}m to {:.3}m", min, max);

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
