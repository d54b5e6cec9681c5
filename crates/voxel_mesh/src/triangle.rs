//! Emitted geometry primitives: vertices and flat-shaded triangles.

use glam::Vec3;

/// Fallback face normal for degenerate (colinear) triangles.
const DEGENERATE_NORMAL: Vec3 = Vec3::Y;

/// Cross products shorter than this are treated as zero-length.
const NORMAL_EPSILON_SQ: f32 = 1e-12;

/// Capability trait for vertex types the extractor can emit.
///
/// The extractor only ever produces positions; richer vertex layouts
/// (per-vertex normals, UVs) can implement this to receive them and fill
/// their remaining attributes downstream.
pub trait SurfaceVertex: Copy {
  /// Build a vertex at a lattice-space position.
  fn from_position(position: Vec3) -> Self;

  /// The vertex position.
  fn position(&self) -> Vec3;
}

/// Minimal position-only vertex. The default choice for flat-shaded
/// terrain meshes where the per-triangle face normal suffices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionVertex {
  pub position: Vec3,
}

impl SurfaceVertex for PositionVertex {
  fn from_position(position: Vec3) -> Self {
    Self { position }
  }

  fn position(&self) -> Vec3 {
    self.position
  }
}

/// A triangle with a face normal computed once at construction.
#[derive(Clone, Copy, Debug)]
pub struct Triangle<V> {
  pub vertices: [V; 3],
  /// Unit face normal. Degenerate triangles get [`Vec3::Y`] instead of NaN.
  pub normal: Vec3,
}

impl<V: SurfaceVertex> Triangle<V> {
  /// Build a triangle from three vertices, deriving the face normal from
  /// the winding order.
  pub fn new(v0: V, v1: V, v2: V) -> Self {
    let a = v0.position() - v1.position();
    let b = v1.position() - v2.position();
    let cross = a.cross(b);

    // Colinear vertices produce a zero-length cross product; fall back to a
    // fixed up vector rather than letting NaN reach the renderer.
    let normal = if cross.length_squared() > NORMAL_EPSILON_SQ {
      cross.normalize()
    } else {
      DEGENERATE_NORMAL
    };

    Self {
      vertices: [v0, v1, v2],
      normal,
    }
  }

  /// Build a triangle directly from three positions.
  pub fn from_positions(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
    Self::new(
      V::from_position(p0),
      V::from_position(p1),
      V::from_position(p2),
    )
  }
}

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;
