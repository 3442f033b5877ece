//! Benchmark for sector and system generation.
//!
//! TARGET: a 16x16 slab of sectors around Sol in well under a second
//!
//! Run with: cargo bench --package galaxis_procedural --bench sector_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use galaxis_core::SystemPath;
use galaxis_procedural::{Sector, SystemGenerator, Universe, UniverseConfig};

fn benchmark_single_sector(c: &mut Criterion) {
    let universe = Universe::new(UniverseConfig::default());

    c.bench_function("single_sector_generation", |b| {
        let mut coord = 0i32;
        b.iter(|| {
            coord = coord.wrapping_add(1) % 64;
            black_box(Sector::new(&universe, coord, -coord / 2, 0))
        });
    });
}

fn benchmark_sector_slab(c: &mut Criterion) {
    let universe = Universe::new(UniverseConfig::default());

    let mut group = c.benchmark_group("sector_slab");
    group.throughput(Throughput::Elements(16 * 16));
    group.bench_function("16x16_sectors", |b| {
        b.iter(|| {
            for y in -8..8 {
                for x in -8..8 {
                    black_box(Sector::new(&universe, x, y, 0));
                }
            }
        });
    });
    group.finish();
}

fn benchmark_system_generation(c: &mut Criterion) {
    let universe = Universe::new(UniverseConfig::default());
    let sector = Sector::new(&universe, 0, 0, 0);

    c.bench_function("system_from_cached_sector", |b| {
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 1) % sector.len();
            let generator = SystemGenerator::from_sector(&universe, &sector, index).unwrap();
            black_box(generator.generate().unwrap())
        });
    });

    c.bench_function("system_from_path", |b| {
        b.iter(|| {
            let generator =
                SystemGenerator::new(&universe, black_box(SystemPath::system(0, 0, 0, 0)))
                    .unwrap();
            black_box(generator.generate().unwrap())
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_single_sector,
              benchmark_sector_slab,
              benchmark_system_generation
}

criterion_main!(benches);
