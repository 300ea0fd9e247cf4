//! Quadtree module for distance-driven 2D subdivision.
//!
//! The tree is a flat array of [`Branch`] records linked by index. A build
//! starts from a single root covering the whole region and splits every
//! branch that is closer to some target than its depth allows.
//!
//! # Depth Convention
//!
//! Depth 0 = root (coarsest), higher depth = finer.
//!
//! ```text
//! Branch Size = Root Size / 2^depth
//! ```
//!
//! # Module Structure
//!
//! - [`branch`]: `Branch` record and `Quadrant` child slots
//! - [`tree`]: `QuadTree` build (depth-first and level-parallel)
//! - [`neighbors`]: neighbor masks for edge stitching
//! - [`stats`]: `BuildStats` summary

pub mod branch;
pub mod neighbors;
pub mod stats;
pub mod tree;

// Re-exports
pub use branch::{Branch, Quadrant};
pub use neighbors::NeighborMode;
pub use stats::BuildStats;
pub use tree::QuadTree;
