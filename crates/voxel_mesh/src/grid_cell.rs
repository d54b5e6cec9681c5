//! Per-step corner sample buffer for the extractor.

use glam::Vec3;

/// The 8 corner positions and scalar values of one marching-cubes step.
///
/// Corner ordering matches [`crate::tables::CORNER_OFFSETS`]; the tables are
/// meaningless against any other ordering. A cell is rebuilt for every step
/// and discarded once its triangles are emitted.
#[derive(Clone, Copy, Debug)]
pub struct GridCell<T> {
  /// Corner positions in lattice space.
  pub p: [Vec3; 8],
  /// Scalar sample at each corner.
  pub val: [T; 8],
}

impl<T: Default + Copy> Default for GridCell<T> {
  fn default() -> Self {
    Self {
      p: [Vec3::ZERO; 8],
      val: [T::default(); 8],
    }
  }
}
