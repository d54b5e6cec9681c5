//! Accumulated output of one extraction pass.

use crate::region::Region;
use crate::triangle::Triangle;

/// An append-only triangle list plus the region it was extracted from.
///
/// One surface is produced per extraction call, consumed by the caller
/// (typically pushed into a renderer via [`crate::sink::MeshSink`]) and
/// discarded. Triangles keep per-cell emission order; nothing is ever
/// deduplicated or removed.
#[derive(Clone, Debug)]
pub struct Surface<V> {
  triangles: Vec<Triangle<V>>,
  region: Region,
}

impl<V> Surface<V> {
  /// Create an empty surface for the given source region.
  pub fn new(region: Region) -> Self {
    Self {
      triangles: Vec::new(),
      region,
    }
  }

  /// Bulk-append triangles, preserving their order.
  pub fn add_triangles<I>(&mut self, triangles: I)
  where
    I: IntoIterator<Item = Triangle<V>>,
  {
    self.triangles.extend(triangles);
  }

  /// Read-only view of the triangles in insertion order.
  pub fn triangles(&self) -> &[Triangle<V>] {
    &self.triangles
  }

  /// The region this surface was extracted from.
  pub fn region(&self) -> &Region {
    &self.region
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use super::*;
  use crate::triangle::PositionVertex;

  fn tri(y: f32) -> Triangle<PositionVertex> {
    Triangle::from_positions(
      Vec3::new(0.0, y, 0.0),
      Vec3::new(0.0, y, 1.0),
      Vec3::new(1.0, y, 0.0),
    )
  }

  #[test]
  fn test_append_preserves_order() {
    let mut surface = Surface::new(Region::from_extents(4, 4, 4));
    surface.add_triangles([tri(0.0), tri(1.0)]);
    surface.add_triangles([tri(2.0)]);

    assert_eq!(surface.triangle_count(), 3);
    let heights: Vec<f32> = surface
      .triangles()
      .iter()
      .map(|t| t.vertices[0].position.y)
      .collect();
    assert_eq!(heights, vec![0.0, 1.0, 2.0]);
  }

  #[test]
  fn test_new_surface_is_empty() {
    let surface: Surface<PositionVertex> = Surface::new(Region::from_extents(2, 2, 2));
    assert!(surface.is_empty());
    assert_eq!(surface.region().width(), 2);
  }
}
