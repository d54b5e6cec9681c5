//! Benchmarks for the parallel volume fill and stride-swept extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec3;
use voxel_mesh::{FixedVolume, PositionVertex, Region, SurfaceExtractor};

const EXTENT: i32 = 65;

/// Rolling-hills density field, enough relief that every stride still
/// crosses the surface in most columns.
fn hills(p: IVec3) -> u8 {
  let height = 24.0 + 8.0 * (p.x as f32 * 0.2).sin() + 6.0 * (p.z as f32 * 0.3).cos();
  if (p.y as f32) <= height {
    255
  } else {
    0
  }
}

fn hills_volume() -> FixedVolume<u8> {
  FixedVolume::new(Region::from_extents(EXTENT, EXTENT, EXTENT), hills).unwrap()
}

fn bench_fill(c: &mut Criterion) {
  c.bench_function("volume_fill (65³ hills)", |b| {
    b.iter(|| black_box(hills_volume()));
  });
}

fn bench_extraction_strides(c: &mut Criterion) {
  let volume = hills_volume();
  let region = *volume.region();

  let mut group = c.benchmark_group("extract_hills");
  for unit_size in [1usize, 2, 4, 8, 16] {
    group.bench_with_input(
      BenchmarkId::from_parameter(unit_size),
      &unit_size,
      |b, &unit_size| {
        let extractor: SurfaceExtractor<'_, u8, PositionVertex> =
          SurfaceExtractor::new(&volume, region, 128, unit_size).unwrap();
        b.iter(|| black_box(extractor.extract()));
      },
    );
  }
  group.finish();
}

criterion_group!(benches, bench_fill, bench_extraction_strides);
criterion_main!(benches);
