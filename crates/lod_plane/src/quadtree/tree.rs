//! QuadTree - distance-driven subdivision over a flat branch array.
//!
//! Every [`QuadTree::build`] is a full rebuild: the array is cut back to the
//! root and repopulated from the target set. No state survives between builds
//! apart from the region and the LOD schedule.
//!
//! # Subdivision Rule
//!
//! ```text
//! required = max over targets of schedule.required_depth(|center - target|)
//! split if branch.depth < required
//! ```
//!
//! `required_depth` never exceeds the level count, so no branch is ever
//! deeper than `level_count` and the build always terminates.

use glam::Vec2;
use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};

use super::{Branch, BuildStats};
use crate::bounds::Aabb2;
use crate::error::TreeError;
use crate::lod::LodSchedule;

/// Array-backed quadtree over a rectangular region.
#[derive(Clone, Debug)]
pub struct QuadTree {
  bounds: Aabb2,
  schedule: LodSchedule,
  branches: Vec<Branch>,
  stats: BuildStats,
}

impl QuadTree {
  /// Create a tree covering `size` around `center` with a single root leaf.
  pub fn new(center: Vec2, size: Vec2, schedule: LodSchedule) -> Result<Self, TreeError> {
    if !size.is_finite() || !center.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
      return Err(TreeError::InvalidSize {
        x: size.x,
        y: size.y,
      });
    }

    let bounds = Aabb2::from_center_size(center, size);
    let branches = vec![Branch::root(bounds)];
    let stats = BuildStats::from_branches(&branches);

    Ok(Self {
      bounds,
      schedule,
      branches,
      stats,
    })
  }

  /// Replace the LOD schedule. Takes effect on the next build.
  pub fn set_lods(&mut self, min_distance: f32, level_count: i32) -> Result<(), TreeError> {
    self.schedule = LodSchedule::new(min_distance, level_count)?;
    Ok(())
  }

  /// Rebuild from scratch, depth-first.
  ///
  /// Children are visited in quadrant order right after they are appended, so
  /// a branch's whole subtree occupies indices before its next sibling's
  /// children.
  #[tracing::instrument(skip_all, name = "quadtree::build", fields(targets = targets.len()))]
  pub fn build(&mut self, targets: &[Vec2]) -> Result<BuildStats, TreeError> {
    validate_targets(targets)?;
    self.reset();

    let mut stack: SmallVec<[usize; 64]> = smallvec![0];
    while let Some(index) = stack.pop() {
      if !self.should_subdivide(index, targets) {
        continue;
      }
      let first = self.subdivide(index);
      // Reverse push so the south-west child is visited first.
      stack.extend((first..first + 4).rev());
    }

    Ok(self.finish())
  }

  /// Rebuild from scratch, one depth level at a time.
  ///
  /// Each level is evaluated in parallel against all targets, then the splits
  /// are committed sequentially. Produces the same leaves as [`build`] but
  /// assigns indices breadth-first.
  ///
  /// [`build`]: QuadTree::build
  #[tracing::instrument(skip_all, name = "quadtree::build_parallel", fields(targets = targets.len()))]
  pub fn build_parallel(&mut self, targets: &[Vec2]) -> Result<BuildStats, TreeError> {
    validate_targets(targets)?;
    self.reset();

    let mut frontier = vec![0usize];
    while !frontier.is_empty() {
      // Phase 1: evaluate
      let decisions: Vec<bool> = {
        let _span = tracing::trace_span!("evaluate_level", branches = frontier.len()).entered();
        frontier
          .par_iter()
          .map(|&index| self.should_subdivide(index, targets))
          .collect()
      };

      // Phase 2: commit
      let mut next = Vec::new();
      for (&index, split) in frontier.iter().zip(decisions) {
        if split {
          let first = self.subdivide(index);
          next.extend(first..first + 4);
        }
      }
      frontier = next;
    }

    Ok(self.finish())
  }

  /// Deepest depth demanded by any target at `point`.
  pub fn required_depth_at(&self, point: Vec2, targets: &[Vec2]) -> i32 {
    targets
      .iter()
      .map(|target| self.schedule.required_depth(point.distance(*target)))
      .max()
      .unwrap_or(0)
  }

  /// Region covered by the root.
  #[inline]
  pub fn bounds(&self) -> Aabb2 {
    self.bounds
  }

  #[inline]
  pub fn center(&self) -> Vec2 {
    self.bounds.center
  }

  #[inline]
  pub fn size(&self) -> Vec2 {
    self.bounds.size()
  }

  #[inline]
  pub fn schedule(&self) -> &LodSchedule {
    &self.schedule
  }

  /// Statistics from the most recent build.
  #[inline]
  pub fn stats(&self) -> BuildStats {
    self.stats
  }

  /// All branches, root first.
  #[inline]
  pub fn branches(&self) -> &[Branch] {
    &self.branches
  }

  #[inline]
  pub fn root(&self) -> &Branch {
    &self.branches[0]
  }

  pub fn branch(&self, index: usize) -> Result<&Branch, TreeError> {
    self
      .branches
      .get(index)
      .ok_or(TreeError::BranchOutOfRange(index))
  }

  /// Leaf branches in array order.
  pub fn leaves(&self) -> impl Iterator<Item = &Branch> + '_ {
    self.branches.iter().filter(|b| b.is_leaf())
  }

  /// Deepest leaf whose bounds contain `point`, `None` outside the root.
  ///
  /// On shared edges the first matching child in quadrant order wins.
  pub fn leaf_at(&self, point: Vec2) -> Option<&Branch> {
    let mut current = self.root();
    if !current.bounds.contains_point(point) {
      return None;
    }
    while let Some(children) = current.children() {
      current = children
        .iter()
        .map(|&i| &self.branches[i])
        .find(|child| child.bounds.contains_point(point))?;
    }
    Some(current)
  }

  /// Raw branch array access for corrupting trees in tests.
  #[cfg(test)]
  pub(crate) fn branches_mut(&mut self) -> &mut Vec<Branch> {
    &mut self.branches
  }

  fn reset(&mut self) {
    self.branches.clear();
    self.branches.push(Branch::root(self.bounds));
  }

  fn should_subdivide(&self, index: usize, targets: &[Vec2]) -> bool {
    let branch = &self.branches[index];
    branch.depth < self.required_depth_at(branch.bounds.center, targets)
  }

  /// Append four children for `index` and return the first child index.
  fn subdivide(&mut self, index: usize) -> usize {
    let parent = self.branches[index];
    debug_assert!(parent.is_leaf(), "branch {} subdivided twice", index);

    let first = self.branches.len();
    for (offset, bounds) in parent.bounds.split().into_iter().enumerate() {
      self
        .branches
        .push(Branch::child_of(&parent, first + offset, bounds));
    }
    self.branches[index].first_child = Some(first);
    first
  }

  fn finish(&mut self) -> BuildStats {
    self.stats = BuildStats::from_branches(&self.branches);
    tracing::debug!(
      branches = self.stats.branch_count,
      leaves = self.stats.leaf_count,
      max_depth = self.stats.max_depth,
      "quadtree built"
    );
    self.stats
  }
}

fn validate_targets(targets: &[Vec2]) -> Result<(), TreeError> {
  if targets.is_empty() {
    return Err(TreeError::EmptyTargets);
  }
  if let Some(index) = targets.iter().position(|t| !t.is_finite()) {
    return Err(TreeError::NonFiniteTarget { index });
  }
  Ok(())
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
