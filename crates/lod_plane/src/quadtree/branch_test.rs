use glam::Vec2;

use super::*;

fn unit_root() -> Branch {
  Branch::root(Aabb2::new(Vec2::ZERO, Vec2::ONE))
}

#[test]
fn test_root_invariants() {
  let root = unit_root();
  assert_eq!(root.index, 0);
  assert_eq!(root.parent, None);
  assert_eq!(root.depth, 0);
  assert!(root.is_root());
  assert!(root.is_leaf());
  assert!(root.children().is_none());
}

#[test]
fn test_child_of_increments_depth() {
  let mut root = unit_root();
  root.first_child = Some(1);
  let child = Branch::child_of(&root, 3, root.bounds.split()[2]);

  assert_eq!(child.parent, Some(0));
  assert_eq!(child.depth, 1);
  assert!(!child.is_root());
  assert!(child.is_leaf());
}

#[test]
fn test_children_are_contiguous() {
  let mut root = unit_root();
  root.first_child = Some(5);

  assert_eq!(root.children(), Some([5, 6, 7, 8]));
  assert_eq!(root.child(Quadrant::SouthWest), Some(5));
  assert_eq!(root.child(Quadrant::SouthEast), Some(8));
  assert!(root.has_children());
}

#[test]
fn test_quadrant_offsets_roundtrip() {
  for (offset, quadrant) in Quadrant::ALL.iter().enumerate() {
    assert_eq!(quadrant.offset(), offset);
    assert_eq!(Quadrant::from_offset(offset), Some(*quadrant));
  }
  assert_eq!(Quadrant::from_offset(4), None);
}

/// Each quadrant has exactly two siblings across its inner sides.
#[test]
fn test_sibling_towards_inner_sides_only() {
  for quadrant in Quadrant::ALL {
    let inner: Vec<_> = Side::ALL
      .iter()
      .filter_map(|&side| quadrant.sibling_towards(side).map(|s| (side, s)))
      .collect();
    assert_eq!(inner.len(), 2, "{:?} should have 2 inner sides", quadrant);

    for (side, sibling) in inner {
      assert_ne!(sibling, quadrant);
      // Stepping back across the same edge returns home.
      assert_eq!(sibling.sibling_towards(side.opposite()), Some(quadrant));
    }
  }
}

/// A mirrored quadrant of a sibling is the quadrant itself.
#[test]
fn test_mirror_matches_sibling_towards() {
  for quadrant in Quadrant::ALL {
    for side in Side::ALL {
      if let Some(sibling) = quadrant.sibling_towards(side) {
        assert_eq!(quadrant.mirror(side), sibling);
      }
      assert_eq!(quadrant.mirror(side).mirror(side), quadrant);
    }
  }
}

/// Split order and quadrant order agree.
#[test]
fn test_split_matches_quadrant_order() {
  let bounds = Aabb2::new(Vec2::ZERO, Vec2::splat(2.0));
  let split = bounds.split();
  assert!(split[Quadrant::SouthWest.offset()].center.x < 0.0);
  assert!(split[Quadrant::SouthWest.offset()].center.y < 0.0);
  assert!(split[Quadrant::NorthWest.offset()].center.y > 0.0);
  assert!(split[Quadrant::NorthEast.offset()].center.x > 0.0);
  assert!(split[Quadrant::SouthEast.offset()].center.y < 0.0);
}
