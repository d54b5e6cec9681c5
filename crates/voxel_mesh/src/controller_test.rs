use glam::IVec3;

use super::{SurfaceCommand, SurfaceController};
use crate::region::Region;
use crate::sink::BufferSink;
use crate::triangle::PositionVertex;
use crate::volume::FixedVolume;

fn terrain_controller(extent: i32) -> SurfaceController<u8, PositionVertex> {
  let region = Region::from_extents(extent, extent, extent);
  let volume =
    FixedVolume::new(region, |p: IVec3| if p.y < extent / 2 { 255 } else { 0 }).unwrap();
  SurfaceController::new(volume, 128)
}

#[test]
fn test_rebuild_replaces_sink_mesh() {
  let mut controller = terrain_controller(17).with_unit_size(2);
  let mut sink = BufferSink::new();

  let stats = controller.rebuild(&mut sink).unwrap();

  assert!(stats.triangle_count > 0);
  assert_eq!(sink.triangle_count(), stats.triangle_count);
  assert!(sink.finished);
}

#[test]
fn test_rebuild_is_wholesale_not_additive() {
  let mut controller = terrain_controller(17).with_unit_size(2);
  let mut sink = BufferSink::new();

  let first = controller.rebuild(&mut sink).unwrap();
  let second = controller.rebuild(&mut sink).unwrap();

  assert_eq!(first.triangle_count, second.triangle_count);
  // The sink was cleared and repopulated, not appended to.
  assert_eq!(sink.triangle_count(), second.triangle_count);
}

#[test]
fn test_increase_stride_coarsens_mesh() {
  let mut controller = terrain_controller(33).with_unit_size(1);
  let mut sink = BufferSink::new();

  let fine = controller.rebuild(&mut sink).unwrap();
  let coarse = controller
    .apply(SurfaceCommand::IncreaseStride, &mut sink)
    .unwrap();

  assert_eq!(coarse.unit_size, 2);
  assert!(coarse.triangle_count <= fine.triangle_count);
}

#[test]
fn test_decrease_stride_floors_at_one() {
  let mut controller = terrain_controller(9).with_unit_size(1);
  let mut sink = BufferSink::new();

  let stats = controller
    .apply(SurfaceCommand::DecreaseStride, &mut sink)
    .unwrap();

  assert_eq!(stats.unit_size, 1);
  assert_eq!(controller.unit_size(), 1);
  // The floored command still rebuilt.
  assert!(sink.finished);
}

#[test]
fn test_with_unit_size_clamps_zero() {
  let controller = terrain_controller(9).with_unit_size(0);
  assert_eq!(controller.unit_size(), 1);
}

#[test]
fn test_drain_processes_commands_in_order() {
  let mut controller = terrain_controller(17).with_unit_size(3);
  let mut sink = BufferSink::new();
  let sender = controller.command_sender();

  sender.send(SurfaceCommand::IncreaseStride).unwrap();
  sender.send(SurfaceCommand::IncreaseStride).unwrap();
  sender.send(SurfaceCommand::DecreaseStride).unwrap();

  let stats = controller.drain(&mut sink).unwrap();

  let strides: Vec<usize> = stats.iter().map(|s| s.unit_size).collect();
  assert_eq!(strides, vec![4, 5, 4]);
  assert_eq!(controller.unit_size(), 4);
}

#[test]
fn test_drain_with_no_commands_is_a_no_op() {
  let mut controller = terrain_controller(9);
  let mut sink = BufferSink::new();

  let stats = controller.drain(&mut sink).unwrap();

  assert!(stats.is_empty());
  assert!(!sink.finished);
}
