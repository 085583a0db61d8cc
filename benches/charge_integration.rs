use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echem_analytics::ingest::RawTable;
use echem_analytics::metadata::ExperimentMetadata;
use echem_analytics::voltammetry::{simpson, CyclicVoltammogram, WrangleConfig};

/// Triangular sweep between -0.5 V and 0.5 V with a capacitive current
/// and a cubic faradaic term
fn synthetic_table(cycles: usize, points_per_sweep: usize) -> RawTable {
    let mut potential = Vec::new();
    let mut current = Vec::new();
    let mut cycle = Vec::new();
    let mut time = Vec::new();

    let step = 1.0 / points_per_sweep as f64;
    let mut t: f64 = 0.0;
    for c in 1..=cycles {
        for i in 0..2 * points_per_sweep {
            let (e, direction) = if i < points_per_sweep {
                (-0.5 + i as f64 * step, 1.0)
            } else {
                (0.5 - (i - points_per_sweep) as f64 * step, -1.0)
            };
            potential.push(e);
            current.push(1e-3 * direction + 4e-3 * e + 2e-3 * e * e * e);
            cycle.push(c as i64);
            time.push(t);
            t += 1.0 + 0.1 * (t * 0.7).sin();
        }
    }

    RawTable::new(potential, current, cycle, time).unwrap()
}

/// Benchmark wrangling a raw table into labelled samples
fn bench_wrangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrangle");

    for cycles in [10, 100] {
        let table = synthetic_table(cycles, 200);
        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}cycles", cycles)),
            &table,
            |b, table| {
                b.iter(|| {
                    CyclicVoltammogram::new(
                        black_box(table),
                        ExperimentMetadata::new(),
                        WrangleConfig::default(),
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

/// Benchmark per-cycle and maximum-section integration on a wrangled run
fn bench_charge_passed(c: &mut Criterion) {
    let mut group = c.benchmark_group("charge_passed");

    for cycles in [10, 100] {
        let cv = CyclicVoltammogram::from_table(&synthetic_table(cycles, 200)).unwrap();
        group.throughput(Throughput::Elements(cv.wrangled_data().len() as u64));

        group.bench_with_input(
            BenchmarkId::new("per_cycle", format!("{}cycles", cycles)),
            &cv,
            |b, cv| b.iter(|| black_box(cv.charge_passed())),
        );
        group.bench_with_input(
            BenchmarkId::new("averaged", format!("{}cycles", cycles)),
            &cv,
            |b, cv| b.iter(|| black_box(cv.averaged_charge_passed())),
        );
        group.bench_with_input(
            BenchmarkId::new("max_sections", format!("{}cycles", cycles)),
            &cv,
            |b, cv| b.iter(|| black_box(cv.get_maximum_charges_passed())),
        );
    }

    group.finish();
}

/// Benchmark the quadrature alone
fn bench_simpson(c: &mut Criterion) {
    let x: Vec<f64> = (0..10_000).map(|i| i as f64 + 0.1 * (i as f64).sin()).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 0.01).cos()).collect();

    c.bench_function("simpson_10k", |b| {
        b.iter(|| simpson(black_box(&y), black_box(&x)))
    });
}

criterion_group!(benches, bench_wrangle, bench_charge_passed, bench_simpson);
criterion_main!(benches);
