//! Statistics from a quadtree build.

use super::Branch;

/// Summary of the branch array produced by one build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
	/// Total branches, subdivided and leaves.
	pub branch_count: usize,
	/// Branches without children.
	pub leaf_count: usize,
	/// Deepest depth reached.
	pub max_depth: i32,
	/// Number of split operations performed.
	pub subdivisions: usize,
}

impl BuildStats {
	/// Collect statistics from a branch array.
	pub fn from_branches(branches: &[Branch]) -> Self {
		let mut stats = Self {
			branch_count: branches.len(),
			..Default::default()
		};
		for branch in branches {
			if branch.is_leaf() {
				stats.leaf_count += 1;
			} else {
				stats.subdivisions += 1;
			}
			stats.max_depth = stats.max_depth.max(branch.depth);
		}
		stats
	}

	/// Subdivided branches. Every split adds exactly four branches.
	#[inline]
	pub fn internal_count(&self) -> usize {
		self.branch_count - self.leaf_count
	}
}

#[cfg(test)]
mod tests {
	use glam::Vec2;

	use super::*;
	use crate::bounds::Aabb2;

	#[test]
	fn test_single_root() {
		let branches = [Branch::root(Aabb2::new(Vec2::ZERO, Vec2::ONE))];
		let stats = BuildStats::from_branches(&branches);
		assert_eq!(stats.branch_count, 1);
		assert_eq!(stats.leaf_count, 1);
		assert_eq!(stats.subdivisions, 0);
		assert_eq!(stats.max_depth, 0);
	}

	#[test]
	fn test_one_split() {
		let mut root = Branch::root(Aabb2::new(Vec2::ZERO, Vec2::ONE));
		root.first_child = Some(1);
		let mut branches = vec![root];
		for (offset, bounds) in root.bounds.split().into_iter().enumerate() {
			branches.push(Branch::child_of(&root, 1 + offset, bounds));
		}

		let stats = BuildStats::from_branches(&branches);
		assert_eq!(stats.branch_count, 5);
		assert_eq!(stats.leaf_count, 4);
		assert_eq!(stats.subdivisions, 1);
		assert_eq!(stats.internal_count(), 1);
		assert_eq!(stats.max_depth, 1);
	}
}
