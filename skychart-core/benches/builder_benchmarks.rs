//! Criterion benchmarks for the polygon builder.
//!
//! Measures batch build time across region counts (100, 500, 1000) with a
//! mix of valid rings, self-intersecting rings that need repair, and
//! degenerate regions that are skipped.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package skychart-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::f64::consts::TAU;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Coord;
use skychart_core::{NoRepair, PolygonBuilder, RegionGroups, SkipDiagnostic, ZeroBufferRepair};

/// Region counts to benchmark.
const REGION_COUNTS: &[usize] = &[100, 500, 1000];

/// Vertices per generated region.
const VERTICES: usize = 24;

/// Generate a deterministic catalog of star-shaped and bow-tie regions.
fn generate_groups(count: usize) -> RegionGroups {
    let mut groups = RegionGroups::default();
    for region in 0..count {
        let code = format!("R{region:04}");
        let centre_x = (region % 24) as f64 * 15.0;
        let centre_y = (region / 24) as f64 * 4.0 - 80.0;
        match region % 10 {
            // Self-intersecting bow-tie.
            0 => {
                for (dx, dy) in [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)] {
                    groups.push(&code, Coord { x: centre_x + dx, y: centre_y + dy });
                }
            }
            // Degenerate two-point region.
            1 => {
                groups.push(&code, Coord { x: centre_x, y: centre_y });
                groups.push(&code, Coord { x: centre_x + 1.0, y: centre_y });
            }
            _ => {
                for step in 0..VERTICES {
                    let angle = TAU * step as f64 / VERTICES as f64;
                    let radius = if step % 2 == 0 { 1.5 } else { 0.75 };
                    groups.push(
                        &code,
                        Coord {
                            x: centre_x + radius * angle.cos(),
                            y: centre_y + radius * angle.sin(),
                        },
                    );
                }
            }
        }
    }
    groups
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_builder");
    for &count in REGION_COUNTS {
        let groups = generate_groups(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("zero_buffer", count), &groups, |b, groups| {
            let builder = PolygonBuilder::new(ZeroBufferRepair);
            b.iter(|| {
                let mut skipped: Vec<SkipDiagnostic> = Vec::new();
                builder.build(groups, &mut skipped)
            });
        });
        group.bench_with_input(BenchmarkId::new("no_repair", count), &groups, |b, groups| {
            let builder = PolygonBuilder::new(NoRepair);
            b.iter(|| {
                let mut skipped: Vec<SkipDiagnostic> = Vec::new();
                builder.build(groups, &mut skipped)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
