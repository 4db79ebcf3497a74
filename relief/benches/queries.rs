use criterion::{black_box, criterion_group, criterion_main, Criterion};

use relief::frame::DemFrameAccuracy;
use relief::{
    parse_coordinate, scan_extremes, Axis, BoundingBox, EarthModel, GeodeticCoordinate,
    GeoidHeightGrid, LengthUnit, RegionMask, TerrainFrame, TerrainSource,
};

const FRAME_POSTS: usize = 1201;

/// Build a synthetic one-degree frame with a simple elevation gradient.
fn create_frame() -> TerrainFrame {
    let posts: Vec<i16> = (0..FRAME_POSTS * FRAME_POSTS)
        .map(|i| {
            let row = i / FRAME_POSTS;
            let col = i % FRAME_POSTS;
            ((row + col) % 4000) as i16
        })
        .collect();
    let step = 1.0 / (FRAME_POSTS - 1) as f64;
    TerrainFrame::new(
        posts,
        FRAME_POSTS,
        FRAME_POSTS,
        GeodeticCoordinate::new(35.0, 138.0).unwrap(),
        step,
        step,
        DemFrameAccuracy::new(10, 5, 8, 4, LengthUnit::Meters).unwrap(),
        TerrainSource::Srtm3,
        "USGS".to_string(),
        "UNCLASSIFIED".to_string(),
    )
    .unwrap()
}

/// Coarse synthetic geoid grid covering the globe.
fn create_geoid() -> GeoidHeightGrid {
    let rows = 19;
    let cols = 37;
    let values: Vec<f64> = (0..rows * cols).map(|i| (i % 50) as f64 - 25.0).collect();
    GeoidHeightGrid::from_parts(-90.0, 90.0, 0.0, 360.0, 10.0, 10.0, values).unwrap()
}

fn bench_parse_decimal(c: &mut Criterion) {
    c.bench_function("parse_decimal_degrees", |b| {
        b.iter(|| {
            black_box(parse_coordinate(black_box("-123.456789"), Axis::Longitude).unwrap());
        });
    });
}

fn bench_parse_dms(c: &mut Criterion) {
    c.bench_function("parse_delimited_dms", |b| {
        b.iter(|| {
            black_box(parse_coordinate(black_box("N23 01 25.2"), Axis::Latitude).unwrap());
        });
    });
}

fn bench_parse_packed(c: &mut Criterion) {
    c.bench_function("parse_packed_dms", |b| {
        b.iter(|| {
            black_box(parse_coordinate(black_box("1230125W"), Axis::Longitude).unwrap());
        });
    });
}

fn bench_geoid_height(c: &mut Criterion) {
    let geoid = create_geoid();

    c.bench_function("geoid_height_interpolated", |b| {
        b.iter(|| {
            black_box(geoid.height(black_box(35.3606), black_box(138.7274)).unwrap());
        });
    });
}

fn bench_scan_full_frame(c: &mut Criterion) {
    let frame = create_frame();
    let geoid = create_geoid();

    c.bench_function("scan_full_frame_egm96", |b| {
        b.iter(|| {
            black_box(scan_extremes(
                black_box(&frame),
                None,
                EarthModel::Egm96,
                LengthUnit::Meters,
                &geoid,
            ));
        });
    });
}

fn bench_scan_masked(c: &mut Criterion) {
    let frame = create_frame();
    let geoid = create_geoid();
    let mask = RegionMask::Box(BoundingBox::from_degrees(35.25, 138.25, 35.75, 138.75).unwrap());

    c.bench_function("scan_box_masked", |b| {
        b.iter(|| {
            black_box(scan_extremes(
                black_box(&frame),
                Some(&mask),
                EarthModel::Egm96,
                LengthUnit::Meters,
                &geoid,
            ));
        });
    });
}

fn bench_scan_wgs84(c: &mut Criterion) {
    let frame = create_frame();
    let geoid = create_geoid();

    c.bench_function("scan_full_frame_wgs84", |b| {
        b.iter(|| {
            black_box(scan_extremes(
                black_box(&frame),
                None,
                EarthModel::Wgs84,
                LengthUnit::Meters,
                &geoid,
            ));
        });
    });
}

criterion_group!(
    benches,
    bench_parse_decimal,
    bench_parse_dms,
    bench_parse_packed,
    bench_geoid_height,
    bench_scan_full_frame,
    bench_scan_masked,
    bench_scan_wgs84,
);
criterion_main!(benches);
