//! Triangle fans for one grid square, indexed by square configuration.
//!
//! # Square Layout
//!
//! ```text
//!  TopLeft(2) ── MiddleTop(3) ── TopRight(4)
//!      │                              │
//!  MiddleLeft(1)               MiddleRight(5)
//!      │                              │
//! BottomLeft(0) ─ MiddleBottom(7) ─ BottomRight(6)
//! ```
//!
//! Corner slots are always grid vertices. A middle slot is an edge-strip
//! vertex and is only referenced when that side of the square is split.
//!
//! # Configuration Bits
//!
//! Same layout as [`Directions`](crate::Directions): West=0x1, North=0x2,
//! East=0x4, South=0x8.
//!
//! Nine configurations have a fan: no split, one side split, and two
//! adjacent sides split. Opposite sides (0x5, 0xA) and three or more sides
//! have no entry and are rejected.
//!
//! Winding is part of the table. Fans rotate clockwise around the split
//! vertex (or the shared corner for two-side cases) when viewed from +Z.

use crate::directions::{Directions, Side};
use crate::error::MeshError;

/// Position inside a grid square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
  BottomLeft = 0,
  MiddleLeft = 1,
  TopLeft = 2,
  MiddleTop = 3,
  TopRight = 4,
  MiddleRight = 5,
  BottomRight = 6,
  MiddleBottom = 7,
}

impl Slot {
  /// Side whose edge strip backs this slot, `None` for corners.
  pub fn strip_side(self) -> Option<Side> {
    match self {
      Slot::MiddleLeft => Some(Side::West),
      Slot::MiddleTop => Some(Side::North),
      Slot::MiddleRight => Some(Side::East),
      Slot::MiddleBottom => Some(Side::South),
      _ => None,
    }
  }
}

/// Three slots forming one triangle.
pub type SlotTriangle = [Slot; 3];

use Slot::*;

const NO_SPLIT: &[SlotTriangle] = &[
  [BottomLeft, TopLeft, TopRight],
  [BottomLeft, TopRight, BottomRight],
];

const WEST: &[SlotTriangle] = &[
  [MiddleLeft, TopLeft, TopRight],
  [MiddleLeft, TopRight, BottomRight],
  [MiddleLeft, BottomRight, BottomLeft],
];

const NORTH: &[SlotTriangle] = &[
  [MiddleTop, TopRight, BottomRight],
  [MiddleTop, BottomRight, BottomLeft],
  [MiddleTop, BottomLeft, TopLeft],
];

const EAST: &[SlotTriangle] = &[
  [MiddleRight, BottomRight, BottomLeft],
  [MiddleRight, BottomLeft, TopLeft],
  [MiddleRight, TopLeft, TopRight],
];

const SOUTH: &[SlotTriangle] = &[
  [MiddleBottom, BottomLeft, TopLeft],
  [MiddleBottom, TopLeft, TopRight],
  [MiddleBottom, TopRight, BottomRight],
];

const WEST_NORTH: &[SlotTriangle] = &[
  [BottomRight, BottomLeft, MiddleLeft],
  [BottomRight, MiddleLeft, TopLeft],
  [BottomRight, TopLeft, MiddleTop],
  [BottomRight, MiddleTop, TopRight],
];

const NORTH_EAST: &[SlotTriangle] = &[
  [BottomLeft, TopLeft, MiddleTop],
  [BottomLeft, MiddleTop, TopRight],
  [BottomLeft, TopRight, MiddleRight],
  [BottomLeft, MiddleRight, BottomRight],
];

const EAST_SOUTH: &[SlotTriangle] = &[
  [TopLeft, TopRight, MiddleRight],
  [TopLeft, MiddleRight, BottomRight],
  [TopLeft, BottomRight, MiddleBottom],
  [TopLeft, MiddleBottom, BottomLeft],
];

const SOUTH_WEST: &[SlotTriangle] = &[
  [TopRight, BottomRight, MiddleBottom],
  [TopRight, MiddleBottom, BottomLeft],
  [TopRight, BottomLeft, MiddleLeft],
  [TopRight, MiddleLeft, TopLeft],
];

/// Triangle fan per square configuration, `None` where unsupported.
pub const SQUARE_TABLE: [Option<&[SlotTriangle]>; 16] = [
  Some(NO_SPLIT),   // 0x0
  Some(WEST),       // 0x1
  Some(NORTH),      // 0x2
  Some(WEST_NORTH), // 0x3
  Some(EAST),       // 0x4
  None,             // 0x5 West + East
  Some(NORTH_EAST), // 0x6
  None,             // 0x7
  Some(SOUTH),      // 0x8
  Some(SOUTH_WEST), // 0x9
  None,             // 0xA North + South
  None,             // 0xB
  Some(EAST_SOUTH), // 0xC
  None,             // 0xD
  None,             // 0xE
  None,             // 0xF
];

/// Fan for `config`, failing closed on configurations without an entry.
pub fn square_triangles(config: Directions) -> Result<&'static [SlotTriangle], MeshError> {
  SQUARE_TABLE[config.bits() as usize].ok_or_else(|| {
    tracing::error!(config = config.bits(), "no triangle fan for square configuration");
    MeshError::UnsupportedSquareConfiguration(config.bits())
  })
}

#[cfg(test)]
#[path = "square_table_test.rs"]
mod square_table_test;
