use glam::Vec3;

use super::{PositionVertex, SurfaceVertex, Triangle};

type Tri = Triangle<PositionVertex>;

#[test]
fn test_normal_faces_winding() {
  // Counter-clockwise in the XZ plane viewed from +Y.
  let tri = Tri::from_positions(
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 0.0),
  );
  assert!((tri.normal - Vec3::Y).length() < 1e-6);
}

#[test]
fn test_normal_is_unit_length() {
  let tri = Tri::from_positions(
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(3.0, 0.0, 4.0),
    Vec3::new(0.0, 5.0, 0.0),
  );
  assert!((tri.normal.length() - 1.0).abs() < 1e-6);
}

#[test]
fn test_degenerate_triangle_gets_fallback_normal() {
  // All three vertices colinear: the cross product is zero-length.
  let tri = Tri::from_positions(
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(2.0, 2.0, 2.0),
  );
  assert_eq!(tri.normal, Vec3::Y);
  assert!(tri.normal.is_finite());
}

#[test]
fn test_coincident_vertices_get_fallback_normal() {
  let p = Vec3::new(4.0, 2.0, 7.0);
  let tri = Tri::from_positions(p, p, p);
  assert_eq!(tri.normal, Vec3::Y);
}

#[test]
fn test_vertex_round_trip() {
  let v = PositionVertex::from_position(Vec3::new(1.0, 2.0, 3.0));
  assert_eq!(v.position(), Vec3::new(1.0, 2.0, 3.0));
}
