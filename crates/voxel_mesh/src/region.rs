//! Axis-aligned integer regions describing volume extents.

use glam::IVec3;

/// An axis-aligned box over the voxel lattice.
///
/// Corners may be given in either relative order; extents are the absolute
/// per-axis difference. A region is immutable once constructed and is held
/// by value inside [`crate::FixedVolume`] and [`crate::SurfaceExtractor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
  lower_corner: IVec3,
  upper_corner: IVec3,
}

impl Region {
  /// Create a region from two corners.
  pub fn new(lower_corner: IVec3, upper_corner: IVec3) -> Self {
    Self {
      lower_corner,
      upper_corner,
    }
  }

  /// Create a region spanning `(0, 0, 0)` to `(width, height, depth)`.
  pub fn from_extents(width: i32, height: i32, depth: i32) -> Self {
    Self {
      lower_corner: IVec3::ZERO,
      upper_corner: IVec3::new(width, height, depth),
    }
  }

  pub fn lower_corner(&self) -> IVec3 {
    self.lower_corner
  }

  pub fn upper_corner(&self) -> IVec3 {
    self.upper_corner
  }

  /// Extent along X. Never negative.
  pub fn width(&self) -> usize {
    self.lower_corner.x.abs_diff(self.upper_corner.x) as usize
  }

  /// Extent along Y. Never negative.
  pub fn height(&self) -> usize {
    self.lower_corner.y.abs_diff(self.upper_corner.y) as usize
  }

  /// Extent along Z. Never negative.
  pub fn depth(&self) -> usize {
    self.lower_corner.z.abs_diff(self.upper_corner.z) as usize
  }

  /// Width/height/depth as a vector.
  pub fn extents(&self) -> IVec3 {
    IVec3::new(self.width() as i32, self.height() as i32, self.depth() as i32)
  }

  /// Total number of lattice cells in the region.
  pub fn cell_count(&self) -> usize {
    self.width() * self.height() * self.depth()
  }

  /// Whether `other` lies entirely within this region: every axis of its
  /// lower corner is >= ours and every axis of its upper corner is <= ours.
  pub fn contains(&self, other: &Region) -> bool {
    let lower = other.lower_corner.cmpge(self.lower_corner).all();
    let upper = other.upper_corner.cmple(self.upper_corner).all();
    lower && upper
  }
}

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;
