//! Neighbor classification - which sides of a leaf border finer branches.
//!
//! Two classifiers are available:
//!
//! - **Siblings** (default): only the three other children of the same
//!   parent are inspected. A side is flagged when the sibling across it is
//!   subdivided. Sides on the parent's outer boundary are never flagged, even
//!   when a finer branch sits across them under another parent. This is a
//!   known limitation kept for output compatibility.
//!
//! - **Geometric**: walks up to the common ancestor and mirrors back down to
//!   find the equal-sized region across each side, so subtree boundaries are
//!   classified too.
//!
//! ```text
//! Sibling lookup for a south-west child:
//!
//! ┌────┬────┐
//! │ NW │ NE │   North -> NW subdivided?
//! ├────┼────┤   East  -> SE subdivided?
//! │ SW │ SE │   West, South face outside the parent: never flagged
//! └────┴────┘
//! ```

use serde::Deserialize;

use super::{Branch, QuadTree, Quadrant};
use crate::directions::{Directions, Side};
use crate::error::TreeError;

/// Neighbor classifier selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborMode {
  /// Inspect immediate siblings only.
  #[default]
  Siblings,
  /// Find true geometric neighbors across parent boundaries.
  Geometric,
}

impl QuadTree {
  /// Quadrant `branch` occupies inside its parent. `None` for the root.
  pub fn quadrant_of(&self, branch: &Branch) -> Result<Option<Quadrant>, TreeError> {
    Ok(self.placement(branch)?.map(|(_, quadrant)| quadrant))
  }

  /// Parent of `branch` and the quadrant it occupies there.
  fn placement(&self, branch: &Branch) -> Result<Option<(&Branch, Quadrant)>, TreeError> {
    let Some(parent_index) = branch.parent else {
      return Ok(None);
    };
    let parent = self.branch(parent_index)?;
    let offset = parent
      .first_child
      .map(|first| branch.index as isize - first as isize)
      .unwrap_or(-1);

    let quadrant = usize::try_from(offset)
      .ok()
      .and_then(Quadrant::from_offset)
      .ok_or_else(|| {
        tracing::error!(index = branch.index, offset, "branch outside its parent's child slots");
        TreeError::UnsupportedBranchConfiguration {
          index: branch.index,
          offset,
        }
      })?;
    Ok(Some((parent, quadrant)))
  }

  /// Sides of `index` that border a subdivided sibling.
  ///
  /// Always empty for the root.
  pub fn neighbor_mask(&self, index: usize) -> Result<Directions, TreeError> {
    let branch = self.branch(index)?;
    let Some((parent, quadrant)) = self.placement(branch)? else {
      return Ok(Directions::NONE);
    };

    let mut mask = Directions::NONE;
    for side in Side::ALL {
      if let Some(sibling) = quadrant.sibling_towards(side).and_then(|q| parent.child(q)) {
        mask.set_if(side, self.branch(sibling)?.has_children());
      }
    }
    Ok(mask)
  }

  /// Sides of `index` whose equal-sized neighbor region is subdivided,
  /// searching across parent boundaries.
  ///
  /// Sides on the root boundary and sides facing a coarser leaf are not
  /// flagged.
  pub fn geometric_neighbor_mask(&self, index: usize) -> Result<Directions, TreeError> {
    self.branch(index)?;
    let mut mask = Directions::NONE;
    for side in Side::ALL {
      if let Some(neighbor) = self.equal_or_coarser_neighbor(index, side)? {
        mask.set_if(side, self.branches()[neighbor].has_children());
      }
    }
    Ok(mask)
  }

  /// Classify with the selected mode.
  pub fn neighbor_mask_with(&self, index: usize, mode: NeighborMode) -> Result<Directions, TreeError> {
    match mode {
      NeighborMode::Siblings => self.neighbor_mask(index),
      NeighborMode::Geometric => self.geometric_neighbor_mask(index),
    }
  }

  /// Branch across `side` of `index` with the same depth, or the coarser leaf
  /// covering that region. `None` on the root boundary.
  pub fn equal_or_coarser_neighbor(&self, index: usize, side: Side) -> Result<Option<usize>, TreeError> {
    let branch = self.branch(index)?;
    let Some((parent, quadrant)) = self.placement(branch)? else {
      return Ok(None);
    };

    if let Some(sibling) = quadrant.sibling_towards(side) {
      return Ok(parent.child(sibling));
    }

    let Some(outer) = self.equal_or_coarser_neighbor(parent.index, side)? else {
      return Ok(None);
    };
    let outer = self.branch(outer)?;
    Ok(Some(
      outer
        .child(quadrant.mirror(side))
        .unwrap_or(outer.index),
    ))
  }
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
