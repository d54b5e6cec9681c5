//! The mesh-sink boundary between extraction and rendering.
//!
//! The crate never talks to a renderer directly; callers hand in an
//! implementation of [`MeshSink`] and the extracted [`Surface`] is streamed
//! through it as a triangle list. The core supplies positions and flat
//! per-triangle normals only — texture coordinates and colors are optional
//! channels a caller fills while iterating, typically from its own policy
//! such as the height bands in [`crate::coloring`].

use glam::{Vec2, Vec3};

use crate::surface::Surface;
use crate::triangle::SurfaceVertex;

/// Receiver for a streamed triangle-list mesh.
///
/// Call order per mesh: `begin`, then for each triangle three repetitions
/// of `position` (+ optional `texcoord`/`color`) followed by `normal`,
/// then `end`. The optional channels default to no-ops.
pub trait MeshSink {
  /// Start a new triangle-list mesh, discarding any previous contents.
  fn begin(&mut self);

  fn position(&mut self, position: Vec3);

  fn normal(&mut self, normal: Vec3);

  fn texcoord(&mut self, _uv: Vec2) {}

  fn color(&mut self, _rgb: [f32; 3]) {}

  /// Finish the mesh; the sink may upload/swap buffers here.
  fn end(&mut self);
}

/// Stream a surface into a sink with flat per-triangle normals.
pub fn write_surface<V, S>(surface: &Surface<V>, sink: &mut S)
where
  V: SurfaceVertex,
  S: MeshSink,
{
  sink.begin();
  for triangle in surface.triangles() {
    for vertex in &triangle.vertices {
      sink.position(vertex.position());
      sink.normal(triangle.normal);
    }
  }
  sink.end();
}

/// Array-backed sink for tests and consumers that want raw vertex data.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
  pub positions: Vec<Vec3>,
  pub normals: Vec<Vec3>,
  pub texcoords: Vec<Vec2>,
  pub colors: Vec<[f32; 3]>,
  /// Whether a `begin`/`end` pair has completed.
  pub finished: bool,
}

impl BufferSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of triangles received (3 positions each).
  pub fn triangle_count(&self) -> usize {
    self.positions.len() / 3
  }
}

impl MeshSink for BufferSink {
  fn begin(&mut self) {
    self.positions.clear();
    self.normals.clear();
    self.texcoords.clear();
    self.colors.clear();
    self.finished = false;
  }

  fn position(&mut self, position: Vec3) {
    self.positions.push(position);
  }

  fn normal(&mut self, normal: Vec3) {
    self.normals.push(normal);
  }

  fn texcoord(&mut self, uv: Vec2) {
    self.texcoords.push(uv);
  }

  fn color(&mut self, rgb: [f32; 3]) {
    self.colors.push(rgb);
  }

  fn end(&mut self) {
    self.finished = true;
  }
}

#[cfg(test)]
mod tests {
  use glam::IVec3;

  use super::*;
  use crate::extractor::SurfaceExtractor;
  use crate::region::Region;
  use crate::triangle::PositionVertex;
  use crate::volume::FixedVolume;

  #[test]
  fn test_write_surface_streams_three_vertices_per_triangle() {
    let region = Region::from_extents(4, 4, 4);
    let volume =
      FixedVolume::new(region, |p: IVec3| if p.y < 2 { 255u8 } else { 0 }).unwrap();
    let surface = SurfaceExtractor::<_, PositionVertex>::new(&volume, region, 128, 1)
      .unwrap()
      .extract();

    let mut sink = BufferSink::new();
    write_surface(&surface, &mut sink);

    assert!(sink.finished);
    assert_eq!(sink.positions.len(), surface.triangle_count() * 3);
    assert_eq!(sink.normals.len(), sink.positions.len());
    // Flat shading: the three normals of a triangle are identical.
    for tri in sink.normals.chunks(3) {
      assert_eq!(tri[0], tri[1]);
      assert_eq!(tri[1], tri[2]);
    }
  }

  #[test]
  fn test_begin_resets_previous_mesh() {
    let mut sink = BufferSink::new();
    sink.begin();
    sink.position(Vec3::ONE);
    sink.end();

    sink.begin();
    assert!(sink.positions.is_empty());
    assert!(!sink.finished);
  }
}
