// Copyright 2026 the flatbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of curve flattening.

// Run with `RUSTFLAGS="--cfg nightly" cargo +nightly bench`.
#![cfg(nightly)]
#![feature(test)]
extern crate test;
use test::{black_box, Bencher};

use flatbez::{CubicBez, Path, QuadBez, Tolerance};

const QUAD: QuadBez = QuadBez {
    p0: flatbez::Point::new(0.0, 0.0),
    p1: flatbez::Point::new(50.0, 100.0),
    p2: flatbez::Point::new(100.0, 0.0),
};

const CUBIC: CubicBez = CubicBez {
    p0: flatbez::Point::new(0.0, 0.0),
    p1: flatbez::Point::new(0.0, 100.0),
    p2: flatbez::Point::new(100.0, 100.0),
    p3: flatbez::Point::new(100.0, 0.0),
};

#[bench]
fn bench_quad_flatten(b: &mut Bencher) {
    let tol = Tolerance::from_scale(1.0);
    let mut path = Path::with_capacity(Path::CHUNK_SIZE).unwrap();
    b.iter(|| {
        path.clear();
        black_box(QUAD).flatten(&tol, &mut path).unwrap();
        black_box(path.len())
    });
}

#[bench]
fn bench_cubic_flatten(b: &mut Bencher) {
    let tol = Tolerance::from_scale(1.0);
    let mut path = Path::with_capacity(Path::CHUNK_SIZE).unwrap();
    b.iter(|| {
        path.clear();
        black_box(CUBIC).flatten(&tol, &mut path).unwrap();
        black_box(path.len())
    });
}

#[bench]
fn bench_cubic_flatten_angle(b: &mut Bencher) {
    let tol = Tolerance::from_scale(4.0)
        .with_angle_tolerance(0.1)
        .with_cusp_limit(2.5);
    let mut path = Path::with_capacity(Path::CHUNK_SIZE).unwrap();
    b.iter(|| {
        path.clear();
        black_box(CUBIC).flatten(&tol, &mut path).unwrap();
        black_box(path.len())
    });
}

#[bench]
fn bench_path_flatten(b: &mut Bencher) {
    let mut src = Path::new();
    for i in 0..16 {
        let x = i as f64 * 10.0;
        src.move_to((x, 0.0)).unwrap();
        src.quad_to((x + 5.0, 20.0), (x + 10.0, 0.0)).unwrap();
        src.cubic_to((x + 10.0, -20.0), (x, -20.0), (x, 0.0)).unwrap();
        src.close_path().unwrap();
    }
    let tol = Tolerance::from_scale(2.0);
    b.iter(|| black_box(&src).flatten(&tol).unwrap());
}
