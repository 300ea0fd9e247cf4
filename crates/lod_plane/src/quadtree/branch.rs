//! Branch - one record of the flat quadtree array.
//!
//! Parent/child links are indices into the owning array, never references.
//! Children of a subdivided branch are four contiguous records starting at
//! `first_child`, always in [`Quadrant`] order.

use crate::bounds::Aabb2;
use crate::directions::Side;

/// Position of a child inside its parent.
///
/// The discriminant is the child's offset from the parent's `first_child`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
  SouthWest = 0,
  NorthWest = 1,
  NorthEast = 2,
  SouthEast = 3,
}

impl Quadrant {
  /// All quadrants in child order.
  pub const ALL: [Quadrant; 4] = [
    Quadrant::SouthWest,
    Quadrant::NorthWest,
    Quadrant::NorthEast,
    Quadrant::SouthEast,
  ];

  /// Quadrant for a child offset, `None` outside `0..4`.
  #[inline]
  pub fn from_offset(offset: usize) -> Option<Self> {
    Self::ALL.get(offset).copied()
  }

  /// Offset from the parent's first child index.
  #[inline]
  pub fn offset(self) -> usize {
    self as usize
  }

  /// Sibling sharing this quadrant's `side`, if that side faces into the
  /// parent. Sides on the parent's outer boundary return `None`.
  ///
  /// ```text
  /// ┌────┬────┐
  /// │ NW │ NE │
  /// ├────┼────┤
  /// │ SW │ SE │
  /// └────┴────┘
  /// ```
  pub fn sibling_towards(self, side: Side) -> Option<Quadrant> {
    use Quadrant::*;
    match (self, side) {
      (SouthWest, Side::North) => Some(NorthWest),
      (SouthWest, Side::East) => Some(SouthEast),
      (NorthWest, Side::South) => Some(SouthWest),
      (NorthWest, Side::East) => Some(NorthEast),
      (NorthEast, Side::West) => Some(NorthWest),
      (NorthEast, Side::South) => Some(SouthEast),
      (SouthEast, Side::West) => Some(SouthWest),
      (SouthEast, Side::North) => Some(NorthEast),
      _ => None,
    }
  }

  /// Quadrant reflected across the edge perpendicular to `side`.
  ///
  /// Used when stepping into a neighboring subtree: the child of the
  /// neighbor that touches this quadrant is its mirror image.
  pub fn mirror(self, side: Side) -> Quadrant {
    use Quadrant::*;
    match side {
      Side::West | Side::East => match self {
        SouthWest => SouthEast,
        NorthWest => NorthEast,
        NorthEast => NorthWest,
        SouthEast => SouthWest,
      },
      Side::North | Side::South => match self {
        SouthWest => NorthWest,
        NorthWest => SouthWest,
        NorthEast => SouthEast,
        SouthEast => NorthEast,
      },
    }
  }
}

/// One node of the quadtree, leaf or subdivided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branch {
  /// Own position in the branch array.
  pub index: usize,
  /// Parent position, `None` for the root.
  pub parent: Option<usize>,
  /// Index of the first of four contiguous children, `None` for a leaf.
  pub first_child: Option<usize>,
  /// Region covered by this branch.
  pub bounds: Aabb2,
  /// Distance from the root (root = 0).
  pub depth: i32,
}

impl Branch {
  /// Root branch covering `bounds`.
  pub fn root(bounds: Aabb2) -> Self {
    Self {
      index: 0,
      parent: None,
      first_child: None,
      bounds,
      depth: 0,
    }
  }

  /// Leaf child of `parent` at `index`.
  pub fn child_of(parent: &Branch, index: usize, bounds: Aabb2) -> Self {
    Self {
      index,
      parent: Some(parent.index),
      first_child: None,
      bounds,
      depth: parent.depth + 1,
    }
  }

  #[inline]
  pub fn is_root(&self) -> bool {
    self.parent.is_none()
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.first_child.is_none()
  }

  #[inline]
  pub fn has_children(&self) -> bool {
    self.first_child.is_some()
  }

  /// Child indices in quadrant order, `None` for a leaf.
  pub fn children(&self) -> Option<[usize; 4]> {
    self.first_child.map(|first| [first, first + 1, first + 2, first + 3])
  }

  /// Index of the child in `quadrant`, `None` for a leaf.
  #[inline]
  pub fn child(&self, quadrant: Quadrant) -> Option<usize> {
    self.first_child.map(|first| first + quadrant.offset())
  }
}

#[cfg(test)]
#[path = "branch_test.rs"]
mod branch_test;
