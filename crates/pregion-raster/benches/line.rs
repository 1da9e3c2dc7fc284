use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use pregion_geom::{Column, LatticePoint};
use pregion_raster::{line2, rasterize_line, walk2};

fn bench_line3(c: &mut Criterion) {
    let mut group = c.benchmark_group("line3");
    let a = LatticePoint::new(-512, 60, 300);
    let b = LatticePoint::new(700, 95, -410);
    group.bench_function("long_diagonal", |bch| {
        bch.iter(|| {
            let mut acc = 0i64;
            for p in rasterize_line(black_box(a), black_box(b)) {
                acc += i64::from(p.x ^ p.y ^ p.z);
            }
            black_box(acc);
        })
    });
    group.finish();
}

fn bench_trace2(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace2");
    group.measurement_time(Duration::from_secs(3));
    // Closed ring of edges roughly the size of a town boundary
    let ring = [
        Column::new(0, 0),
        Column::new(420, 35),
        Column::new(510, 380),
        Column::new(90, 460),
        Column::new(-60, 210),
    ];
    group.bench_function("bresenham_ring", |bch| {
        bch.iter(|| {
            let mut n = 0usize;
            for i in 0..ring.len() {
                n += line2(ring[i], ring[(i + 1) % ring.len()]).count();
            }
            black_box(n);
        })
    });
    group.bench_function("four_connected_ring", |bch| {
        bch.iter(|| {
            let mut n = 0usize;
            for i in 0..ring.len() {
                n += walk2(ring[i], ring[(i + 1) % ring.len()]).count();
            }
            black_box(n);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_line3, bench_trace2);
criterion_main!(benches);
