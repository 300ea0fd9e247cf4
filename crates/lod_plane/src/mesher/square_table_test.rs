use super::*;

/// Unit-square coordinates of each slot.
fn slot_position(slot: Slot) -> [f32; 2] {
  match slot {
    BottomLeft => [0.0, 0.0],
    MiddleLeft => [0.0, 0.5],
    TopLeft => [0.0, 1.0],
    MiddleTop => [0.5, 1.0],
    TopRight => [1.0, 1.0],
    MiddleRight => [1.0, 0.5],
    BottomRight => [1.0, 0.0],
    MiddleBottom => [0.5, 0.0],
  }
}

fn signed_area(triangle: &SlotTriangle) -> f32 {
  let [a, b, c] = triangle.map(slot_position);
  0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]))
}

const SUPPORTED: [u8; 9] = [0x0, 0x1, 0x2, 0x4, 0x8, 0x3, 0x6, 0xC, 0x9];
const UNSUPPORTED: [u8; 7] = [0x5, 0xA, 0x7, 0xB, 0xD, 0xE, 0xF];

#[test]
fn test_supported_configurations() {
  for config in SUPPORTED {
    assert!(
      square_triangles(Directions::from_bits_truncate(config)).is_ok(),
      "{:#04X} should be supported",
      config
    );
  }
}

/// The seven missing configurations keep failing closed.
#[test]
fn test_unsupported_configurations_fail() {
  for config in UNSUPPORTED {
    assert_eq!(
      square_triangles(Directions::from_bits_truncate(config)),
      Err(MeshError::UnsupportedSquareConfiguration(config))
    );
  }
}

/// 2 triangles unsplit, one extra per split side.
#[test]
fn test_triangle_counts() {
  for config in SUPPORTED {
    let fan = SQUARE_TABLE[config as usize].unwrap();
    let expected = 2 + config.count_ones() as usize;
    assert_eq!(fan.len(), expected, "config {:#04X}", config);
  }
}

/// Every fan tiles the unit square exactly.
#[test]
fn test_fans_cover_square() {
  for config in SUPPORTED {
    let fan = SQUARE_TABLE[config as usize].unwrap();
    let area: f32 = fan.iter().map(|t| signed_area(t).abs()).sum();
    assert!((area - 1.0).abs() < 1e-6, "config {:#04X} covers {}", config, area);
  }
}

/// All triangles share one winding (clockwise seen from +Z).
#[test]
fn test_winding_is_consistent() {
  for config in SUPPORTED {
    for triangle in SQUARE_TABLE[config as usize].unwrap() {
      assert!(
        signed_area(triangle) < 0.0,
        "config {:#04X} triangle {:?} is not clockwise",
        config,
        triangle
      );
    }
  }
}

/// Middle slots appear only for sides split in the configuration, and every
/// split side's middle slot is used.
#[test]
fn test_middle_slots_match_split_sides() {
  for config in SUPPORTED {
    let mask = Directions::from_bits_truncate(config);
    let fan = SQUARE_TABLE[config as usize].unwrap();

    let mut used = Directions::NONE;
    for slot in fan.iter().flatten() {
      if let Some(side) = slot.strip_side() {
        assert!(mask.has(side), "config {:#04X} uses {:?}", config, slot);
        used.insert(side);
      }
    }
    assert_eq!(used, mask);
  }
}

/// No triangle repeats a slot.
#[test]
fn test_triangles_are_non_degenerate() {
  for config in SUPPORTED {
    for t in SQUARE_TABLE[config as usize].unwrap() {
      assert!(t[0] != t[1] && t[1] != t[2] && t[0] != t[2]);
    }
  }
}
