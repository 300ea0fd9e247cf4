//! Error types for tree construction, meshing and configuration.

use thiserror::Error;

/// Errors raised while building or querying a [`QuadTree`](crate::QuadTree).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
  #[error("LOD level count must lie in 1..={max}, got {0}", max = crate::lod::MAX_LEVEL_COUNT)]
  InvalidLevelCount(i32),

  #[error("LOD minimum distance must be finite and positive, got {0}")]
  InvalidMinDistance(f32),

  #[error("tree size must be finite and positive on both axes, got ({x}, {y})")]
  InvalidSize { x: f32, y: f32 },

  #[error("tree build requires at least one target point")]
  EmptyTargets,

  #[error("target {index} is not a finite point")]
  NonFiniteTarget { index: usize },

  /// The branch does not occupy one of the four child slots of its parent.
  /// Only reachable on a corrupted branch array.
  #[error("branch {index} sits at child offset {offset} of its parent, expected 0..4")]
  UnsupportedBranchConfiguration { index: usize, offset: isize },

  #[error("branch {0} has children and cannot be meshed")]
  NotALeaf(usize),

  #[error("branch {0} does not exist")]
  BranchOutOfRange(usize),
}

/// Errors raised by the plane mesher.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
  #[error("plane resolution must be at least 2x2, got {x}x{y}")]
  InvalidResolution { x: u32, y: u32 },

  #[error("plane size must be finite and positive on both axes, got ({x}, {y})")]
  InvalidSize { x: f32, y: f32 },

  /// No triangle fan exists for this square configuration.
  #[error("square configuration {0:#04X} is not supported")]
  UnsupportedSquareConfiguration(u8),
}

/// Errors raised while validating a [`PlaneConfig`](crate::PlaneConfig) or
/// running a full tree-and-mesh build from one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Tree(#[from] TreeError),

  #[error(transparent)]
  Mesh(#[from] MeshError),

  /// Splitting the root `level_count` times underflows a leaf axis to zero.
  #[error("leaves at depth {level_count} would be ({x}, {y}) wide; shrink level_count or grow size")]
  DegenerateLeafSize { level_count: i32, x: f32, y: f32 },

  /// A 2-wide lattice has no midpoint for opposite flagged sides, which
  /// geometric masks can produce.
  #[error("geometric neighbor mode needs a leaf resolution of at least 3x3, got {x}x{y}")]
  GeometricResolution { x: u32, y: u32 },
}
