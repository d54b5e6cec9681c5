//! Marching-cubes isosurface extraction over a [`FixedVolume`].
//!
//! The extractor walks its region in fixed-size steps, builds a
//! [`GridCell`] per step, classifies the cell's 8 corners against the iso
//! level, and resolves the classification through the lookup tables in
//! [`crate::tables`]:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ For each cell origin (x, y, z), stepping by unit_size:       │
//! │                                                              │
//! │   1. Sample 8 corners from the volume (exact lattice points) │
//! │   2. cube_index: bit i set iff val[i] < iso_level            │
//! │   3. EDGE_TABLE[cube_index] == 0  →  skip (in/out of surface)│
//! │   4. Interpolate a crossing point on each flagged edge       │
//! │   5. TRI_TABLE[cube_index]  →  emit up to 5 triangles        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cells that do not fit a full `unit_size` step before the region's far
//! edge are dropped, not clamped; the visible mesh boundary shrinks at
//! coarse strides. This is intentional stepping behavior, kept so stride
//! changes alter only sampling density, never sampling alignment.
//!
//! Extraction is synchronous and single-threaded; it may hold the caller
//! for a noticeable duration at fine strides on large volumes. The volume
//! is only read, so multiple extractions at different strides can run
//! concurrently over the same volume from separate threads.

use std::marker::PhantomData;

use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::MIN_UNIT_SIZE;
use crate::error::{ExtractError, ExtractResult};
use crate::grid_cell::GridCell;
use crate::region::Region;
use crate::surface::Surface;
use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use crate::triangle::{SurfaceVertex, Triangle};
use crate::volume::FixedVolume;

/// Upper bound on triangles a single cell configuration can emit.
const MAX_CELL_TRIANGLES: usize = 5;

/// Walks a volume region at a fixed stride and emits the triangulated
/// isosurface.
///
/// Generic over the scalar sample type `T` (anything losslessly convertible
/// to `f32`, e.g. `u8` densities or raw `f32` fields) and the emitted
/// vertex type `V`.
pub struct SurfaceExtractor<'a, T, V> {
  volume: &'a FixedVolume<T>,
  region: Region,
  iso_level: f32,
  unit_size: usize,
  _vertex: PhantomData<V>,
}

impl<'a, T, V> SurfaceExtractor<'a, T, V>
where
  T: Copy + Into<f32>,
  V: SurfaceVertex,
{
  /// Create an extractor over `region` of `volume`.
  ///
  /// Fails fast on caller misuse: the region must be contained in the
  /// volume's own region, and `unit_size` must be at least
  /// [`MIN_UNIT_SIZE`]. Neither is recoverable at runtime; both indicate a
  /// bug in the calling code.
  pub fn new(
    volume: &'a FixedVolume<T>,
    region: Region,
    iso_level: T,
    unit_size: usize,
  ) -> ExtractResult<Self> {
    if unit_size < MIN_UNIT_SIZE {
      return Err(ExtractError::InvalidUnitSize(unit_size));
    }
    if !volume.region().contains(&region) {
      return Err(ExtractError::RegionNotContained {
        requested: (region.lower_corner(), region.upper_corner()),
        volume: (
          volume.region().lower_corner(),
          volume.region().upper_corner(),
        ),
      });
    }

    Ok(Self {
      volume,
      region,
      iso_level: iso_level.into(),
      unit_size,
      _vertex: PhantomData,
    })
  }

  pub fn region(&self) -> &Region {
    &self.region
  }

  pub fn unit_size(&self) -> usize {
    self.unit_size
  }

  /// Run one full extraction pass.
  ///
  /// Deterministic: the same volume, region, iso level, and stride produce
  /// a bit-identical triangle list in per-cell emission order.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "surface::extract", fields(unit_size = self.unit_size))
  )]
  pub fn extract(&self) -> Surface<V> {
    let mut surface = Surface::new(self.region);

    let u = self.unit_size;
    let width = self.region.width();
    let height = self.region.height();
    let depth = self.region.depth();

    for x in (0..width.saturating_sub(u)).step_by(u) {
      for y in (0..height.saturating_sub(u)).step_by(u) {
        for z in (0..depth.saturating_sub(u)).step_by(u) {
          let cell = self.build_cell(x, y, z);
          surface.add_triangles(self.polygonize(&cell));
        }
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(triangles = surface.triangle_count(), "surface extracted");

    surface
  }

  /// Sample the 8 cube corners at a cell origin. Corners land on exact
  /// lattice points (`unit_size` multiples), so no value interpolation
  /// happens at sampling time.
  fn build_cell(&self, x: usize, y: usize, z: usize) -> GridCell<T> {
    let corners: [(usize, usize, usize); 8] = std::array::from_fn(|i| {
      let offset = CORNER_OFFSETS[i];
      (
        x + offset.x as usize * self.unit_size,
        y + offset.y as usize * self.unit_size,
        z + offset.z as usize * self.unit_size,
      )
    });

    GridCell {
      p: corners.map(|(cx, cy, cz)| Vec3::new(cx as f32, cy as f32, cz as f32)),
      val: corners.map(|(cx, cy, cz)| self.volume.value(cx, cy, cz)),
    }
  }

  /// Triangulate one cell against the iso level.
  ///
  /// Returns nothing for cells entirely inside or outside the surface.
  fn polygonize(&self, cell: &GridCell<T>) -> SmallVec<[Triangle<V>; MAX_CELL_TRIANGLES]> {
    let mut cube_index = 0usize;
    for (i, &val) in cell.val.iter().enumerate() {
      if val.into() < self.iso_level {
        cube_index |= 1 << i;
      }
    }

    let crossed_edges = EDGE_TABLE[cube_index];
    if crossed_edges == 0 {
      return SmallVec::new();
    }

    // Crossing point on every flagged edge; unflagged slots stay zero and
    // are never referenced by TRI_TABLE for this configuration.
    let mut crossings = [Vec3::ZERO; 12];
    for (edge, corners) in EDGE_CORNERS.iter().enumerate() {
      if crossed_edges & (1 << edge) != 0 {
        crossings[edge] = self.interpolate(
          cell.p[corners[0]],
          cell.p[corners[1]],
          cell.val[corners[0]].into(),
          cell.val[corners[1]].into(),
        );
      }
    }

    let mut triangles = SmallVec::new();
    let row = &TRI_TABLE[cube_index];
    let mut i = 0;
    while row[i] >= 0 {
      triangles.push(Triangle::from_positions(
        crossings[row[i] as usize],
        crossings[row[i + 1] as usize],
        crossings[row[i + 2] as usize],
      ));
      i += 3;
    }

    triangles
  }

  /// Locate the iso crossing on an edge by linear interpolation, with a
  /// deterministic epsilon ladder for near-ties:
  /// an endpoint already at the iso level wins outright, and a flat edge
  /// (both values equal) resolves to the first endpoint.
  fn interpolate(&self, p1: Vec3, p2: Vec3, val1: f32, val2: f32) -> Vec3 {
    const EPSILON: f32 = f32::EPSILON;

    if (self.iso_level - val1).abs() < EPSILON {
      return p1;
    }
    if (self.iso_level - val2).abs() < EPSILON {
      return p2;
    }
    if (val1 - val2).abs() < EPSILON {
      return p1;
    }

    let mu = (self.iso_level - val1) / (val2 - val1);
    p1 + (p2 - p1) * mu
  }
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod extractor_test;
