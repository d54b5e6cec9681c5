//! voxel_mesh - Framework/engine independent voxel volumes and isosurface
//! extraction
//!
//! This crate provides a dense 3D scalar-field container with a parallel
//! fill path, and a marching-cubes extractor that turns the field into a
//! triangle mesh at a caller-chosen sampling stride. The stride can be
//! changed interactively: the volume is filled once, and every stride
//! change re-runs extraction only, trading detail against cost.
//!
//! # Features
//!
//! - **Parallel fill**: the volume is partitioned into X-axis slabs filled
//!   concurrently over rayon, with a progress callback
//! - **Marching cubes**: canonical 256-entry edge/triangle tables, exact
//!   epsilon tie-breaking, flat per-triangle normals
//! - **Stride-driven re-extraction**: a command-driven controller rebuilds
//!   the mesh wholesale on recompute / stride up / stride down
//! - **Mesh-sink boundary**: output streams through a caller-implemented
//!   trait; no renderer dependency
//!
//! # Example
//!
//! ```
//! use voxel_mesh::{
//!   BufferSink, FixedVolume, PositionVertex, Region, SurfaceController, SurfaceExtractor,
//! };
//!
//! // Terrain-like density field: solid below a sloping height.
//! let region = Region::from_extents(33, 33, 33);
//! let volume = FixedVolume::new(region, |p| {
//!   let height = 8 + p.x / 4;
//!   if p.y <= height { 255u8 } else { 0 }
//! })
//! .unwrap();
//!
//! // One-shot extraction at stride 1...
//! let extractor: SurfaceExtractor<'_, u8, PositionVertex> =
//!   SurfaceExtractor::new(&volume, region, 128, 1).unwrap();
//! let surface = extractor.extract();
//! assert!(surface.triangle_count() > 0);
//!
//! // ...or interactive re-extraction through the controller.
//! let mut controller: SurfaceController<u8, PositionVertex> =
//!   SurfaceController::new(volume, 128).with_unit_size(4);
//! let mut sink = BufferSink::new();
//! let stats = controller.rebuild(&mut sink).unwrap();
//! assert_eq!(sink.triangle_count(), stats.triangle_count);
//! ```

pub mod constants;
pub mod error;
pub mod region;
pub mod tables;

// Re-export commonly used items
pub use constants::{DEFAULT_ISO_LEVEL, DEFAULT_UNIT_SIZE, FILL_SLABS, MIN_UNIT_SIZE};
pub use error::{ExtractError, ExtractResult, VolumeError, VolumeResult};
pub use region::Region;

// Volume storage and parallel fill
pub mod volume;
pub use volume::{FillProgress, FixedVolume};

// Marching-cubes extraction
pub mod extractor;
pub mod grid_cell;
pub use extractor::SurfaceExtractor;
pub use grid_cell::GridCell;

// Emitted geometry
pub mod surface;
pub mod triangle;
pub use surface::Surface;
pub use triangle::{PositionVertex, SurfaceVertex, Triangle};

// Renderer boundary
pub mod sink;
pub use sink::{write_surface, BufferSink, MeshSink};

// Stride-driven re-extraction
pub mod controller;
pub use controller::{ExtractStats, SurfaceCommand, SurfaceController};

// Field samplers and caller-side coloring for demos/tests
pub mod coloring;
pub mod samplers;
pub use coloring::HeightBands;
pub use samplers::{FieldSampler, GroundPlaneSampler, HeightFieldSampler, SphereSampler};
