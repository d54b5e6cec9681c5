//! Interactive-style terrain demo without a renderer: fills a volume from a
//! procedural heightmap, then walks the stride up and down through the
//! controller the way key bindings would, printing stats per rebuild.

use glam::{Vec2, Vec3};
use voxel_mesh::{
  FieldSampler, FixedVolume, HeightBands, HeightFieldSampler, MeshSink, PositionVertex, Region,
  SurfaceCommand, SurfaceController, DEFAULT_ISO_LEVEL,
};

const SIZE: i32 = 64;
const TEXTURE_SCALE: f32 = 0.001;

/// Stand-in for a renderer's manual mesh: applies height-banded colors and
/// planar texture coordinates while counting what it receives.
struct PrintSink {
  bands: HeightBands,
  vertices: usize,
}

impl PrintSink {
  fn new(volume_height: f32) -> Self {
    Self {
      bands: HeightBands::new(volume_height),
      vertices: 0,
    }
  }
}

impl MeshSink for PrintSink {
  fn begin(&mut self) {
    self.vertices = 0;
  }

  fn position(&mut self, position: Vec3) {
    self.vertices += 1;
    let _uv = Vec2::new(position.x * TEXTURE_SCALE, position.z * TEXTURE_SCALE);
    let _rgb = self.bands.color_for(position.y);
  }

  fn normal(&mut self, _normal: Vec3) {}

  fn end(&mut self) {
    println!("  mesh swapped: {} vertices", self.vertices);
  }
}

fn main() {
  // Procedural stand-in for a grayscale heightmap image.
  let sampler = HeightFieldSampler::new(
    |x, z| {
      let fx = x as f32 * 0.11;
      let fz = z as f32 * 0.07;
      0.25 + 0.2 * fx.sin() + 0.15 * (fz + fx * 0.5).cos()
    },
    SIZE as f32,
  );

  println!("voxelizing {SIZE}³ volume...");
  let region = Region::from_extents(SIZE, SIZE, SIZE);
  let volume = FixedVolume::with_progress(
    region,
    |p| sampler.sample(p),
    |progress| println!("  filled {:.0}%", progress.percent()),
  )
  .expect("non-empty region");

  let mut controller: SurfaceController<u8, PositionVertex> =
    SurfaceController::new(volume, DEFAULT_ISO_LEVEL).with_unit_size(16);
  let mut sink = PrintSink::new(SIZE as f32);
  let sender = controller.command_sender();

  // The key sequence a user might type: refine four times, coarsen once,
  // then force a recompute at the final stride.
  for command in [
    SurfaceCommand::DecreaseStride,
    SurfaceCommand::DecreaseStride,
    SurfaceCommand::DecreaseStride,
    SurfaceCommand::DecreaseStride,
    SurfaceCommand::IncreaseStride,
    SurfaceCommand::Rebuild,
  ] {
    sender.send(command).expect("controller owns the receiver");
  }

  let stats = controller.drain(&mut sink).expect("volume region is valid");
  for s in &stats {
    println!(
      "unit size {:>2}: {:>6} triangles in {} us",
      s.unit_size, s.triangle_count, s.duration_us
    );
  }
}
