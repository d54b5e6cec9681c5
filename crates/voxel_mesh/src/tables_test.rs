use super::*;

#[test]
fn test_homogeneous_configurations_cross_nothing() {
  assert_eq!(EDGE_TABLE[0], 0);
  assert_eq!(EDGE_TABLE[255], 0);
  assert_eq!(TRI_TABLE[0][0], -1);
  assert_eq!(TRI_TABLE[255][0], -1);
}

#[test]
fn test_complementary_configurations_cross_the_same_edges() {
  // Flipping inside/outside flips the winding but not which edges cross.
  for index in 0..256 {
    assert_eq!(EDGE_TABLE[index], EDGE_TABLE[255 - index], "config {index}");
  }
}

#[test]
fn test_edge_masks_fit_twelve_edges() {
  for (index, &mask) in EDGE_TABLE.iter().enumerate() {
    assert_eq!(mask & !0x0fff, 0, "config {index} flags a 13th edge");
  }
}

#[test]
fn test_triangles_only_reference_crossed_edges() {
  for index in 0..256 {
    let mask = EDGE_TABLE[index];
    for &edge in TRI_TABLE[index].iter().take_while(|&&e| e >= 0) {
      assert!(
        mask & (1 << edge) != 0,
        "config {index} references uncrossed edge {edge}"
      );
    }
  }
}

#[test]
fn test_triangle_rows_are_sentinel_terminated_triples() {
  for (index, row) in TRI_TABLE.iter().enumerate() {
    let used = row.iter().take_while(|&&e| e >= 0).count();
    assert_eq!(used % 3, 0, "config {index} has a partial triangle");
    assert!(used <= 15, "config {index} exceeds 5 triangles");
    // Nothing after the sentinel.
    assert!(row[used..].iter().all(|&e| e == -1), "config {index}");
  }
}

#[test]
fn test_single_corner_config_crosses_its_three_edges() {
  // Only corner 0 inside: edges [0,1], [3,0], [0,4] cross.
  assert_eq!(EDGE_TABLE[1], (1 << 0) | (1 << 3) | (1 << 8));
}

#[test]
fn test_edges_connect_adjacent_corners() {
  for (edge, [a, b]) in EDGE_CORNERS.iter().enumerate() {
    let delta = CORNER_OFFSETS[*a] - CORNER_OFFSETS[*b];
    let manhattan = delta.x.abs() + delta.y.abs() + delta.z.abs();
    assert_eq!(manhattan, 1, "edge {edge} does not span a unit cube edge");
  }
}

#[test]
fn test_corner_offsets_are_the_unit_cube() {
  let mut seen = [false; 8];
  for offset in CORNER_OFFSETS {
    let bits = (offset.x | (offset.y << 1) | (offset.z << 2)) as usize;
    assert!(!seen[bits], "duplicate corner {offset:?}");
    seen[bits] = true;
  }
  assert!(seen.iter().all(|&s| s));
}
