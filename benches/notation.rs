//! Benchmarks for notation parsing and position lookup.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mjtile::validation::notation_lines;
use mjtile::{map_tile, map_tiles, parse_notation, TileCode};

fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("parse_hand", |b| {
        b.iter(|| parse_notation(black_box("123m35678p12399s")).unwrap())
    });

    group.bench_function("parse_annotated", |b| {
        b.iter(|| parse_notation(black_box("234m 678p 55s y7z o11zo d5p m")).unwrap())
    });

    let fixture = load_fixture("hands.tiles");
    let lines: Vec<&str> = notation_lines(&fixture).map(|(_, l)| l).collect();
    group.bench_function("parse_fixture", |b| {
        b.iter(|| {
            for line in &lines {
                parse_notation(black_box(line)).unwrap();
            }
        })
    });

    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");

    let codes: Vec<String> = TileCode::all().map(|t| t.to_string()).collect();

    group.bench_function("map_tile", |b| b.iter(|| map_tile(black_box("7z")).unwrap()));

    group.bench_function("map_all_codes", |b| {
        b.iter(|| map_tiles(black_box(&codes)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_mapping);
criterion_main!(benches);
