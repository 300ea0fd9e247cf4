//! Batch meshing of every leaf in a built tree.
//!
//! ```text
//! QuadTree (built)
//!      │  leaves()
//!      ▼
//! ┌──────────────────────────────────────────────────────┐
//! │ per leaf (rayon):                                    │
//! │   mask = neighbor_mask_with(leaf, mode)              │
//! │   PlaneMesher::new(leaf size, resolution)            │
//! │     .with_neighbors(mask).build(leaf sw, transform)  │
//! └──────────────────────────────────────────────────────┘
//!      │
//!      ▼
//! Vec<LeafMesh> in leaf index order
//! ```
//!
//! Leaves share no mutable state, so each is meshed independently. The first
//! failing leaf aborts the batch.

use glam::UVec2;
use rayon::prelude::*;
use web_time::Instant;

use crate::bounds::Aabb2;
use crate::directions::Directions;
use crate::error::{ConfigError, TreeError};
use crate::mesher::{MeshTransform, PlaneMesh, PlaneMesher};
use crate::quadtree::{NeighborMode, QuadTree};

/// Mesh of one leaf plus where it came from.
#[derive(Clone, Debug)]
pub struct LeafMesh {
  /// Branch index in the tree that produced this mesh.
  pub branch: usize,
  pub depth: i32,
  pub bounds: Aabb2,
  /// Sides stitched to finer neighbors.
  pub neighbors: Directions,
  pub mesh: PlaneMesh,
  /// Time spent classifying and meshing this leaf.
  pub timing_us: u64,
}

/// Mesh a single leaf with `origin` at its south-west corner.
pub fn mesh_leaf(
  tree: &QuadTree,
  index: usize,
  resolution: UVec2,
  mode: NeighborMode,
  transform: &MeshTransform,
) -> Result<LeafMesh, ConfigError> {
  let branch = tree.branch(index)?;
  if !branch.is_leaf() {
    return Err(TreeError::NotALeaf(index).into());
  }

  let start = Instant::now();
  let neighbors = tree.neighbor_mask_with(index, mode)?;
  let mesh = PlaneMesher::new(branch.bounds.size(), resolution)?
    .with_neighbors(neighbors)
    .build(branch.bounds.sw(), transform)?;
  let timing_us = start.elapsed().as_micros() as u64;

  Ok(LeafMesh {
    branch: index,
    depth: branch.depth,
    bounds: branch.bounds,
    neighbors,
    mesh,
    timing_us,
  })
}

/// Mesh every leaf in parallel.
///
/// Results keep the tree's leaf order for deterministic output.
#[tracing::instrument(skip_all, name = "batch::mesh_leaves")]
pub fn mesh_leaves(
  tree: &QuadTree,
  resolution: UVec2,
  mode: NeighborMode,
  transform: &MeshTransform,
) -> Result<Vec<LeafMesh>, ConfigError> {
  let leaves: Vec<usize> = tree.leaves().map(|leaf| leaf.index).collect();

  let meshes: Vec<LeafMesh> = leaves
    .into_par_iter()
    .map(|index| mesh_leaf(tree, index, resolution, mode, transform))
    .collect::<Result<_, _>>()?;

  tracing::debug!(
    leaves = meshes.len(),
    vertices = meshes.iter().map(|m| m.mesh.vertex_count()).sum::<usize>(),
    triangles = meshes.iter().map(|m| m.mesh.triangle_count()).sum::<usize>(),
    "leaves meshed"
  );
  Ok(meshes)
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
