//! Deterministic scalar-field samplers for tests, benches, and demos.
//!
//! Each sampler maps a lattice coordinate to a `u8` density (255 = solid,
//! 0 = empty) and plugs straight into [`crate::FixedVolume`] fill. They are
//! intentionally simple closed-form fields that are easy to verify by eye;
//! production callers derive their fill function from real data such as a
//! grayscale heightmap image.

use glam::IVec3;

/// A density field sampled per lattice cell.
///
/// Implementations must be pure: the fill runs them from parallel workers
/// in unspecified cell order.
pub trait FieldSampler: Send + Sync {
  fn sample(&self, p: IVec3) -> u8;
}

/// Terrain column sampler driven by a height function over (x, z).
///
/// A cell is solid when it sits at or below the column height, which is
/// the height function's `[0, 1]` output scaled by `y_scale` — the shape
/// a grayscale heightmap image produces when its red channel drives
/// column height.
pub struct HeightFieldSampler<F> {
  height_fn: F,
  y_scale: f32,
}

impl<F> HeightFieldSampler<F>
where
  F: Fn(i32, i32) -> f32 + Send + Sync,
{
  /// `height_fn` returns a normalized height in `[0, 1]` per (x, z) column;
  /// `y_scale` converts it to lattice units.
  pub fn new(height_fn: F, y_scale: f32) -> Self {
    Self { height_fn, y_scale }
  }
}

impl<F> FieldSampler for HeightFieldSampler<F>
where
  F: Fn(i32, i32) -> f32 + Send + Sync,
{
  fn sample(&self, p: IVec3) -> u8 {
    let column_height = (self.height_fn)(p.x, p.z) * self.y_scale;
    if p.y as f32 <= column_height {
      255
    } else {
      0
    }
  }
}

/// Solid sphere density field. Radially symmetric, good for checking that
/// extracted surfaces close over in all axes.
#[derive(Clone, Copy, Debug)]
pub struct SphereSampler {
  pub center: IVec3,
  pub radius: f32,
}

impl SphereSampler {
  pub fn new(radius: f32) -> Self {
    Self {
      center: IVec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: IVec3) -> Self {
    self.center = center;
    self
  }
}

impl FieldSampler for SphereSampler {
  fn sample(&self, p: IVec3) -> u8 {
    let delta = (p - self.center).as_vec3();
    if delta.length() <= self.radius {
      255
    } else {
      0
    }
  }
}

/// Flat ground plane: solid at and below `height`. The simplest baseline.
#[derive(Clone, Copy, Debug)]
pub struct GroundPlaneSampler {
  pub height: i32,
}

impl GroundPlaneSampler {
  pub fn new(height: i32) -> Self {
    Self { height }
  }
}

impl FieldSampler for GroundPlaneSampler {
  fn sample(&self, p: IVec3) -> u8 {
    if p.y <= self.height {
      255
    } else {
      0
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::region::Region;
  use crate::volume::FixedVolume;

  #[test]
  fn test_ground_plane_splits_volume() {
    let sampler = GroundPlaneSampler::new(3);
    let region = Region::from_extents(8, 8, 8);
    let volume = FixedVolume::new(region, |p| sampler.sample(p)).unwrap();

    assert_eq!(*volume.at(0, 0, 0).unwrap(), 255);
    assert_eq!(*volume.at(0, 3, 0).unwrap(), 255);
    assert_eq!(*volume.at(0, 4, 0).unwrap(), 0);
  }

  #[test]
  fn test_sphere_is_solid_inside_empty_outside() {
    let sampler = SphereSampler::new(3.0).with_center(IVec3::new(4, 4, 4));

    assert_eq!(sampler.sample(IVec3::new(4, 4, 4)), 255);
    assert_eq!(sampler.sample(IVec3::new(4, 7, 4)), 255);
    assert_eq!(sampler.sample(IVec3::new(0, 0, 0)), 0);
  }

  #[test]
  fn test_height_field_tracks_column_height() {
    // Linear ramp: column at x is x/8 of 16 units tall.
    let sampler = HeightFieldSampler::new(|x, _z| x as f32 / 8.0, 16.0);

    assert_eq!(sampler.sample(IVec3::new(0, 0, 0)), 255);
    assert_eq!(sampler.sample(IVec3::new(0, 1, 0)), 0);
    assert_eq!(sampler.sample(IVec3::new(4, 8, 0)), 255);
    assert_eq!(sampler.sample(IVec3::new(4, 9, 0)), 0);
  }

  #[test]
  fn test_height_field_is_constant_along_z() {
    let sampler = HeightFieldSampler::new(|x, _z| x as f32 / 4.0, 8.0);
    for z in 0..8 {
      assert_eq!(
        sampler.sample(IVec3::new(2, 3, z)),
        sampler.sample(IVec3::new(2, 3, 0))
      );
    }
  }
}
