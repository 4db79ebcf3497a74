//! Basic example demonstrating coordinate parsing.
//!
//! Run with: cargo run --example basic

use relief::GeodeticCoordinate;

fn main() {
    // The parser accepts the common ways people write coordinates
    let inputs = [
        ("Mount Fuji (decimal)", "35.3606", "138.7274"),
        ("Mount Fuji (delimited DMS)", "N35 21 38", "E138 43 39"),
        ("Mount Fuji (packed DMS)", "352138N", "1384339E"),
        ("Denali (trailing hemisphere)", "63 04 10 N", "151 00 27 W"),
        ("Separators collapse", "27:59:17", "86/55/31"),
    ];

    println!("Coordinate parsing:");
    println!("{:-<60}", "");

    for (name, lat_text, lon_text) in &inputs {
        match GeodeticCoordinate::parse(lat_text, lon_text) {
            Ok(coord) => {
                println!(
                    "{}: ({:>11.6}, {:>12.6})  from {:?} {:?}",
                    name,
                    coord.lat(),
                    coord.lon(),
                    lat_text,
                    lon_text
                );
            }
            Err(e) => {
                println!("{}: error - {}", name, e);
            }
        }
    }

    // Malformed input reports which axis failed and why
    println!("\nRejected input:");
    if let Err(e) = GeodeticCoordinate::parse("E23 01 25", "10") {
        println!("  \"E23 01 25\" as latitude: {}", e);
    }
}
