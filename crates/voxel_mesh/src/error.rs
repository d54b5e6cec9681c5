//! Error types for volume construction, access, and extraction.

use glam::IVec3;
use thiserror::Error;

/// Errors raised by [`crate::FixedVolume`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VolumeError {
  /// A region with a zero-length axis cannot hold any samples.
  #[error("region has a zero-length axis: {extents:?}")]
  EmptyRegion {
    /// Width/height/depth that were requested.
    extents: IVec3,
  },

  /// Checked access outside the volume's extents.
  #[error("index ({x}, {y}, {z}) out of range for extents {extents:?}")]
  OutOfRange {
    x: usize,
    y: usize,
    z: usize,
    /// Width/height/depth of the volume.
    extents: IVec3,
  },
}

/// Errors raised when constructing a [`crate::SurfaceExtractor`].
///
/// Both variants indicate caller misuse rather than runtime conditions;
/// callers are expected to treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
  /// The requested extraction region reaches outside the volume.
  #[error("extraction region {requested:?} not contained in volume region {volume:?}")]
  RegionNotContained {
    /// Lower/upper corners of the requested region.
    requested: (IVec3, IVec3),
    /// Lower/upper corners of the volume's region.
    volume: (IVec3, IVec3),
  },

  /// The sampling stride must be at least 1 lattice unit.
  #[error("unit size {0} is below the floor of 1")]
  InvalidUnitSize(usize),
}

/// Result alias for volume operations.
pub type VolumeResult<T> = std::result::Result<T, VolumeError>;

/// Result alias for extractor construction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = ExtractError::InvalidUnitSize(0);
    assert_eq!(err.to_string(), "unit size 0 is below the floor of 1");
  }

  #[test]
  fn test_out_of_range_names_extents() {
    let err = VolumeError::OutOfRange {
      x: 8,
      y: 0,
      z: 0,
      extents: IVec3::new(4, 4, 4),
    };
    assert!(err.to_string().contains("(8, 0, 0)"));
  }
}
