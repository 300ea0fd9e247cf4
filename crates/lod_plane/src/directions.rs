//! Side flags shared by the neighbor classifier and the plane mesher.
//!
//! ```text
//!             North (0x2)
//!            ┌─────────┐
//!            │         │
//! West (0x1) │  cell   │ East (0x4)
//!            │         │
//!            └─────────┘
//!             South (0x8)
//! ```
//!
//! A set bit means the cell borders a finer (higher resolution) region on
//! that side and its edge must be stitched.

use std::ops::{BitOr, BitOrAssign};

/// One side of a cell. Declaration order is the fixed strip order used by the
/// mesher: West, North, East, South.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
  West,
  North,
  East,
  South,
}

impl Side {
  /// All sides in strip order.
  pub const ALL: [Side; 4] = [Side::West, Side::North, Side::East, Side::South];

  /// Flag bit for this side.
  #[inline]
  pub const fn bit(self) -> u8 {
    match self {
      Side::West => 0x1,
      Side::North => 0x2,
      Side::East => 0x4,
      Side::South => 0x8,
    }
  }

  /// Side facing this one across a shared edge.
  #[inline]
  pub const fn opposite(self) -> Side {
    match self {
      Side::West => Side::East,
      Side::North => Side::South,
      Side::East => Side::West,
      Side::South => Side::North,
    }
  }
}

/// 4-bit set of [`Side`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directions(u8);

impl Directions {
  pub const NONE: Self = Self(0x0);
  pub const WEST: Self = Self(Side::West.bit());
  pub const NORTH: Self = Self(Side::North.bit());
  pub const EAST: Self = Self(Side::East.bit());
  pub const SOUTH: Self = Self(Side::South.bit());
  pub const ALL: Self = Self(0xF);

  /// Build from raw bits, dropping anything above the low nibble.
  #[inline]
  pub const fn from_bits_truncate(bits: u8) -> Self {
    Self(bits & 0xF)
  }

  #[inline]
  pub const fn bits(self) -> u8 {
    self.0
  }

  #[inline]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// True if every flag in `other` is also set here.
  #[inline]
  pub const fn contains(self, other: Directions) -> bool {
    self.0 & other.0 == other.0
  }

  #[inline]
  pub const fn has(self, side: Side) -> bool {
    self.0 & side.bit() != 0
  }

  #[inline]
  pub fn insert(&mut self, side: Side) {
    self.0 |= side.bit();
  }

  /// Set `side` only when `condition` holds.
  #[inline]
  pub fn set_if(&mut self, side: Side, condition: bool) {
    if condition {
      self.insert(side);
    }
  }

  /// Flagged sides in strip order.
  pub fn sides(self) -> impl Iterator<Item = Side> {
    Side::ALL.into_iter().filter(move |&side| self.has(side))
  }

  /// Number of flagged sides.
  #[inline]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }
}

impl From<Side> for Directions {
  fn from(side: Side) -> Self {
    Self(side.bit())
  }
}

impl BitOr for Directions {
  type Output = Self;

  fn bitor(self, rhs: Self) -> Self {
    Self(self.0 | rhs.0)
  }
}

impl BitOrAssign for Directions {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_side_bits_are_one_hot() {
    let mut seen = 0u8;
    for side in Side::ALL {
      assert_eq!(side.bit().count_ones(), 1);
      assert_eq!(seen & side.bit(), 0);
      seen |= side.bit();
    }
    assert_eq!(seen, Directions::ALL.bits());
  }

  #[test]
  fn test_opposite_roundtrip() {
    for side in Side::ALL {
      assert_ne!(side.opposite(), side);
      assert_eq!(side.opposite().opposite(), side);
    }
  }

  #[test]
  fn test_sides_iterates_in_strip_order() {
    let mask = Directions::SOUTH | Directions::WEST | Directions::EAST;
    let sides: Vec<_> = mask.sides().collect();
    assert_eq!(sides, vec![Side::West, Side::East, Side::South]);
    assert_eq!(mask.count(), 3);
  }

  #[test]
  fn test_contains_and_truncate() {
    let mask = Directions::from_bits_truncate(0xF3);
    assert_eq!(mask.bits(), 0x3);
    assert!(mask.contains(Directions::WEST | Directions::NORTH));
    assert!(!mask.contains(Directions::EAST));
    assert!(mask.contains(Directions::NONE));
  }

  #[test]
  fn test_set_if() {
    let mut mask = Directions::NONE;
    mask.set_if(Side::North, false);
    assert!(mask.is_empty());
    mask.set_if(Side::North, true);
    assert_eq!(mask, Directions::NORTH);
  }
}
