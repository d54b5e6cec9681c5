use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use glam::IVec3;

use super::{FillProgress, FixedVolume};
use crate::error::VolumeError;
use crate::region::Region;

#[test]
fn test_fill_invokes_once_per_cell() {
  let region = Region::from_extents(20, 7, 5);
  let calls = AtomicUsize::new(0);

  let volume = FixedVolume::new(region, |p: IVec3| {
    calls.fetch_add(1, Ordering::Relaxed);
    (p.x + p.y + p.z) as i32
  })
  .unwrap();

  assert_eq!(calls.load(Ordering::Relaxed), 20 * 7 * 5);
  assert_eq!(volume.region().cell_count(), 20 * 7 * 5);
}

#[test]
fn test_fill_covers_every_cell_exactly_once() {
  // Marker fill: every cell must end up holding its own coordinates,
  // which fails if any cell were skipped or written by the wrong worker.
  let region = Region::from_extents(17, 6, 4);
  let volume = FixedVolume::new(region, |p: IVec3| p).unwrap();

  for x in 0..17 {
    for y in 0..6 {
      for z in 0..4 {
        assert_eq!(
          *volume.at(x, y, z).unwrap(),
          IVec3::new(x as i32, y as i32, z as i32)
        );
      }
    }
  }
}

#[test]
fn test_fill_is_deterministic() {
  let region = Region::from_extents(33, 9, 9);
  let fill = |p: IVec3| (p.x * 31 + p.y * 7 + p.z) as u8;

  let a = FixedVolume::new(region, fill).unwrap();
  let b = FixedVolume::new(region, fill).unwrap();

  for x in 0..33 {
    for y in 0..9 {
      for z in 0..9 {
        assert_eq!(a.at(x, y, z).unwrap(), b.at(x, y, z).unwrap());
      }
    }
  }
}

#[test]
fn test_narrow_volume_still_fills() {
  // Fewer X columns than fill slabs.
  let region = Region::from_extents(3, 2, 2);
  let volume = FixedVolume::new(region, |p: IVec3| p.x as u8).unwrap();
  assert_eq!(*volume.at(2, 1, 1).unwrap(), 2);
}

#[test]
fn test_empty_region_is_rejected() {
  let region = Region::from_extents(8, 0, 8);
  let result = FixedVolume::new(region, |_| 0u8);
  assert_eq!(
    result.err(),
    Some(VolumeError::EmptyRegion {
      extents: IVec3::new(8, 0, 8),
    })
  );
}

#[test]
fn test_at_rejects_out_of_range() {
  let region = Region::from_extents(4, 4, 4);
  let volume = FixedVolume::new(region, |_| 0u8).unwrap();

  assert!(volume.at(3, 3, 3).is_ok());
  for bad in [(4, 0, 0), (0, 4, 0), (0, 0, 4)] {
    match volume.at(bad.0, bad.1, bad.2) {
      Err(VolumeError::OutOfRange { extents, .. }) => {
        assert_eq!(extents, IVec3::new(4, 4, 4));
      }
      other => panic!("expected OutOfRange, got {other:?}"),
    }
  }
}

#[test]
fn test_progress_reaches_total() {
  let region = Region::from_extents(32, 4, 4);
  let reports: Mutex<Vec<FillProgress>> = Mutex::new(Vec::new());

  let _volume = FixedVolume::with_progress(
    region,
    |_| 0u8,
    |p| reports.lock().unwrap().push(p),
  )
  .unwrap();

  let reports = reports.lock().unwrap();
  assert!(!reports.is_empty());

  // Slab completion order is unspecified, but the counts are cumulative:
  // the largest report covers the whole volume.
  let max = reports.iter().map(|p| p.filled_cells).max().unwrap();
  assert_eq!(max, 32 * 4 * 4);
  assert!(reports.iter().all(|p| p.total_cells == 32 * 4 * 4));
  assert!((reports.iter().find(|p| p.filled_cells == max).unwrap().percent() - 100.0).abs() < 1e-6);
}

#[test]
fn test_index_matches_at() {
  let region = Region::from_extents(5, 5, 5);
  let volume = FixedVolume::new(region, |p: IVec3| (p.x * 25 + p.y * 5 + p.z) as u16).unwrap();

  assert_eq!(volume[(4, 3, 2)], *volume.at(4, 3, 2).unwrap());
  assert_eq!(volume.value(4, 3, 2), volume[(4, 3, 2)]);
}
