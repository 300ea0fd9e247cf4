//! LodSchedule - distance thresholds mapping target distance to tree depth.
//!
//! ```text
//! threshold[i] = min_distance * 2^(level_count - i)
//!
//! level_count = 3, min_distance = 1:
//!
//!   index:      0     1     2
//!   threshold:  8.0   4.0   2.0      (descending, index 0 = coarsest)
//!
//!   distance 9.0 -> depth 0
//!   distance 5.0 -> depth 1   (< 8)
//!   distance 3.0 -> depth 2   (< 8, < 4)
//!   distance 0.5 -> depth 3   (< 8, < 4, < 2)
//! ```

use crate::error::TreeError;

/// Largest accepted level count.
///
/// A target inside every threshold splits all the way down, and when the
/// coarsest threshold dwarfs the region the whole tree does: worst case is
/// `(4^(L+1) - 1) / 3` branches, about 5.7 billion at `L = 16`. Pick the
/// level count for the region, not this cap.
pub const MAX_LEVEL_COUNT: i32 = 16;

/// Descending distance thresholds, one per LOD level.
#[derive(Clone, Debug, PartialEq)]
pub struct LodSchedule {
  min_distance: f32,
  thresholds: Vec<f32>,
}

impl LodSchedule {
  /// Build the threshold table.
  ///
  /// Rejects non-positive or non-finite `min_distance`, a `level_count`
  /// outside `1..=MAX_LEVEL_COUNT`, and a `min_distance` whose coarsest
  /// threshold overflows f32 (the table would stop strictly descending).
  pub fn new(min_distance: f32, level_count: i32) -> Result<Self, TreeError> {
    if level_count <= 0 || level_count > MAX_LEVEL_COUNT {
      return Err(TreeError::InvalidLevelCount(level_count));
    }
    if !min_distance.is_finite() || min_distance <= 0.0 {
      return Err(TreeError::InvalidMinDistance(min_distance));
    }
    if !(min_distance * 2.0_f32.powi(level_count)).is_finite() {
      return Err(TreeError::InvalidMinDistance(min_distance));
    }

    let thresholds = (0..level_count)
      .map(|i| min_distance * 2.0_f32.powi(level_count - i))
      .collect();

    Ok(Self {
      min_distance,
      thresholds,
    })
  }

  /// Minimum distance the schedule was built from.
  #[inline]
  pub fn min_distance(&self) -> f32 {
    self.min_distance
  }

  /// Number of LOD levels. Also the deepest depth any branch can reach.
  #[inline]
  pub fn level_count(&self) -> i32 {
    self.thresholds.len() as i32
  }

  /// Thresholds in descending order.
  #[inline]
  pub fn thresholds(&self) -> &[f32] {
    &self.thresholds
  }

  /// Minimum subdivision depth required at `distance`.
  ///
  /// Counts the thresholds that `distance` is strictly below. Thresholds are
  /// descending, so these always form a prefix and the result is one past the
  /// largest such index (0 when the distance is beyond every threshold).
  pub fn required_depth(&self, distance: f32) -> i32 {
    self
      .thresholds
      .iter()
      .take_while(|&&threshold| distance < threshold)
      .count() as i32
  }
}

#[cfg(test)]
#[path = "lod_test.rs"]
mod lod_test;
