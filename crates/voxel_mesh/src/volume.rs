//! Dense 3D scalar-field container with parallel fill.
//!
//! A [`FixedVolume`] owns one flat allocation sized to its region and is
//! written exactly once, at construction, by a caller-supplied fill function.
//! Filling is partitioned along the X axis into [`FILL_SLABS`] contiguous
//! slabs, each handed to one rayon task. Slabs map to disjoint ranges of the
//! backing buffer, so the workers never share a cache line of sample data and
//! the fill needs no locks; the only shared state is an atomic progress
//! counter that exists purely for observability.
//!
//! ```text
//!            X-axis slab partition (FILL_SLABS = 8)
//!
//!   x: 0        w/8       2w/8                 7w/8        w
//!      ├─────────┼─────────┼───── ... ─────────┼───────────┤
//!      │ slab 0  │ slab 1  │                   │  slab 7   │
//!      └─────────┴─────────┴───── ... ─────────┴───────────┘
//!        task 0     task 1                        task 7
//!
//!   Each slab is a contiguous chunk of the flat buffer:
//!   index(x, y, z) = (x * height + y) * depth + z
//! ```
//!
//! After construction the volume is read-only; extraction passes (including
//! concurrent ones at different strides) share it freely.

use glam::IVec3;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::constants::FILL_SLABS;
use crate::error::{VolumeError, VolumeResult};
use crate::region::Region;

/// Fill progress snapshot handed to the progress callback after each
/// completed slab. Reported counts only ever grow; the order slabs finish
/// in is unspecified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillProgress {
  /// Lattice cells filled so far.
  pub filled_cells: usize,
  /// Total cells in the volume.
  pub total_cells: usize,
}

impl FillProgress {
  /// Completion percentage in `[0, 100]`.
  pub fn percent(&self) -> f32 {
    self.filled_cells as f32 * 100.0 / self.total_cells as f32
  }
}

/// A dense 3D array of samples over a [`Region`].
///
/// Indices run over `[0, width) × [0, height) × [0, depth)` in local lattice
/// coordinates. Checked access goes through [`FixedVolume::at`]; the
/// [`FixedVolume::value`] fast path trusts the caller's bounds arithmetic
/// and panics on violation rather than returning an error.
pub struct FixedVolume<T> {
  data: Vec<T>,
  region: Region,
  width: usize,
  height: usize,
  depth: usize,
}

impl<T> FixedVolume<T>
where
  T: Clone + Default + Send,
{
  /// Allocate and fill a volume, invoking `fill` exactly once per cell.
  ///
  /// The fill function receives local lattice coordinates and must be pure:
  /// cells are assigned to parallel workers with no ordering guarantee, so
  /// any cross-cell state would make the result nondeterministic.
  ///
  /// Fails with [`VolumeError::EmptyRegion`] if any axis of the region has
  /// zero extent.
  pub fn new<F>(region: Region, fill: F) -> VolumeResult<Self>
  where
    F: Fn(IVec3) -> T + Sync,
  {
    Self::with_progress(region, fill, |_| {})
  }

  /// Like [`FixedVolume::new`], reporting progress after each completed
  /// slab. The callback runs on worker threads and must not assume any
  /// slab completion order; it has no effect on the fill itself.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "volume::fill"))]
  pub fn with_progress<F, P>(region: Region, fill: F, progress: P) -> VolumeResult<Self>
  where
    F: Fn(IVec3) -> T + Sync,
    P: Fn(FillProgress) + Sync,
  {
    let width = region.width();
    let height = region.height();
    let depth = region.depth();
    if width == 0 || height == 0 || depth == 0 {
      return Err(VolumeError::EmptyRegion {
        extents: region.extents(),
      });
    }

    let total_cells = width * height * depth;
    let mut data = vec![T::default(); total_cells];

    // One contiguous X-slab per task. Slab width is ceil(width / FILL_SLABS),
    // so the trailing slab is narrower by the remainder (and slabs beyond the
    // width simply don't exist for tiny volumes).
    let yz = height * depth;
    let slab_width = width.div_ceil(FILL_SLABS).max(1);
    let filled = AtomicUsize::new(0);

    data
      .par_chunks_mut(slab_width * yz)
      .enumerate()
      .for_each(|(slab, chunk)| {
        let x_start = slab * slab_width;
        for (i, cell) in chunk.iter_mut().enumerate() {
          let x = x_start + i / yz;
          let rem = i % yz;
          *cell = fill(IVec3::new(x as i32, (rem / depth) as i32, (rem % depth) as i32));
        }

        let filled_cells = filled.fetch_add(chunk.len(), Ordering::Relaxed) + chunk.len();
        progress(FillProgress {
          filled_cells,
          total_cells,
        });
      });

    #[cfg(feature = "tracing")]
    tracing::debug!(cells = total_cells, "volume filled");

    Ok(Self {
      data,
      region,
      width,
      height,
      depth,
    })
  }
}

impl<T> FixedVolume<T> {
  /// The region this volume spans.
  pub fn region(&self) -> &Region {
    &self.region
  }

  /// Width/height/depth as a vector.
  pub fn extents(&self) -> IVec3 {
    self.region.extents()
  }

  #[inline]
  fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
    (x * self.height + y) * self.depth + z
  }

  /// Bounds-checked sample access.
  pub fn at(&self, x: usize, y: usize, z: usize) -> VolumeResult<&T> {
    if x >= self.width || y >= self.height || z >= self.depth {
      return Err(VolumeError::OutOfRange {
        x,
        y,
        z,
        extents: self.extents(),
      });
    }
    Ok(&self.data[self.linear_index(x, y, z)])
  }
}

impl<T: Copy> FixedVolume<T> {
  /// Unchecked-fast-path sample access for callers that already validated
  /// their bounds arithmetic (the extractor walks only regions proven to be
  /// contained). Panics on an out-of-range index instead of returning an
  /// error.
  #[inline]
  pub fn value(&self, x: usize, y: usize, z: usize) -> T {
    debug_assert!(x < self.width && y < self.height && z < self.depth);
    self.data[self.linear_index(x, y, z)]
  }
}

impl<T> std::ops::Index<(usize, usize, usize)> for FixedVolume<T> {
  type Output = T;

  fn index(&self, (x, y, z): (usize, usize, usize)) -> &T {
    &self.data[self.linear_index(x, y, z)]
  }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedVolume<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FixedVolume")
      .field("region", &self.region)
      .field("cells", &self.data.len())
      .finish()
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
