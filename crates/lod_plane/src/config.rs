//! PlaneConfig - region, LOD schedule, mesh resolution and output transform
//! for a full tree-and-mesh build.

use glam::{EulerRot, Quat, UVec2, Vec2, Vec3};
use serde::Deserialize;

use crate::batch::{mesh_leaves, LeafMesh};
use crate::error::{ConfigError, TreeError};
use crate::lod::LodSchedule;
use crate::mesher::{MeshTransform, PlaneMesher};
use crate::quadtree::{NeighborMode, QuadTree};

/// Everything needed to turn a target set into leaf meshes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
  /// Center of the root region.
  pub center: [f32; 2],

  /// Full size of the root region.
  pub size: [f32; 2],

  /// Finest LOD threshold. Threshold i = min_distance * 2^(level_count - i).
  pub min_distance: f32,

  /// Number of LOD levels, also the deepest branch depth.
  pub level_count: i32,

  /// Lattice points per leaf along x and y (at least 2 each, 3 with
  /// geometric neighbors).
  pub resolution: [u32; 2],

  pub neighbor_mode: NeighborMode,

  /// Height of the plane before rotation.
  pub elevation: f32,

  /// Output rotation as XYZ Euler angles.
  pub rotation_degrees: [f32; 3],
}

impl Default for PlaneConfig {
  fn default() -> Self {
    Self {
      center: [0.0, 0.0],
      size: [256.0, 256.0],
      min_distance: 8.0,
      level_count: 4,
      resolution: [9, 9],
      neighbor_mode: NeighborMode::Siblings,
      elevation: 0.0,
      rotation_degrees: [0.0; 3],
    }
  }
}

impl PlaneConfig {
  pub fn with_center(mut self, center: Vec2) -> Self {
    self.center = center.to_array();
    self
  }

  pub fn with_size(mut self, size: Vec2) -> Self {
    self.size = size.to_array();
    self
  }

  pub fn with_lods(mut self, min_distance: f32, level_count: i32) -> Self {
    self.min_distance = min_distance;
    self.level_count = level_count;
    self
  }

  pub fn with_resolution(mut self, resolution: UVec2) -> Self {
    self.resolution = resolution.to_array();
    self
  }

  pub fn with_neighbor_mode(mut self, mode: NeighborMode) -> Self {
    self.neighbor_mode = mode;
    self
  }

  pub fn with_elevation(mut self, elevation: f32) -> Self {
    self.elevation = elevation;
    self
  }

  pub fn with_rotation_degrees(mut self, degrees: Vec3) -> Self {
    self.rotation_degrees = degrees.to_array();
    self
  }

  #[inline]
  pub fn center(&self) -> Vec2 {
    Vec2::from_array(self.center)
  }

  #[inline]
  pub fn size(&self) -> Vec2 {
    Vec2::from_array(self.size)
  }

  #[inline]
  pub fn resolution(&self) -> UVec2 {
    UVec2::from_array(self.resolution)
  }

  pub fn schedule(&self) -> Result<LodSchedule, TreeError> {
    LodSchedule::new(self.min_distance, self.level_count)
  }

  /// Check every field without building anything.
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.schedule()?;

    let size = self.size();
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 || !self.center().is_finite() {
      return Err(TreeError::InvalidSize {
        x: size.x,
        y: size.y,
      }
      .into());
    }

    let finest = size / 2.0_f32.powi(self.level_count);
    if finest.x <= 0.0 || finest.y <= 0.0 {
      return Err(ConfigError::DegenerateLeafSize {
        level_count: self.level_count,
        x: finest.x,
        y: finest.y,
      });
    }

    let resolution = self.resolution();
    PlaneMesher::new(finest, resolution)?;

    if self.neighbor_mode == NeighborMode::Geometric && resolution.min_element() < 3 {
      return Err(ConfigError::GeometricResolution {
        x: resolution.x,
        y: resolution.y,
      });
    }
    Ok(())
  }

  /// Empty tree (single root) for this region and schedule.
  pub fn build_tree(&self) -> Result<QuadTree, ConfigError> {
    Ok(QuadTree::new(self.center(), self.size(), self.schedule()?)?)
  }

  pub fn mesh_transform(&self) -> MeshTransform {
    let [x, y, z] = self.rotation_degrees.map(f32::to_radians);
    MeshTransform::new(Quat::from_euler(EulerRot::XYZ, x, y, z), self.elevation)
  }

  /// Build the tree for `targets` and mesh every leaf.
  #[tracing::instrument(skip_all, name = "plane::generate", fields(targets = targets.len()))]
  pub fn generate(&self, targets: &[Vec2]) -> Result<GeneratedPlane, ConfigError> {
    self.validate()?;

    let mut tree = self.build_tree()?;
    tree.build(targets)?;
    let leaves = mesh_leaves(
      &tree,
      self.resolution(),
      self.neighbor_mode,
      &self.mesh_transform(),
    )?;

    Ok(GeneratedPlane { tree, leaves })
  }
}

/// Output of [`PlaneConfig::generate`].
#[derive(Clone, Debug)]
pub struct GeneratedPlane {
  pub tree: QuadTree,
  /// One mesh per leaf, in leaf index order.
  pub leaves: Vec<LeafMesh>,
}

impl GeneratedPlane {
  pub fn vertex_count(&self) -> usize {
    self.leaves.iter().map(|l| l.mesh.vertex_count()).sum()
  }

  pub fn triangle_count(&self) -> usize {
    self.leaves.iter().map(|l| l.mesh.triangle_count()).sum()
  }

  /// Summed per-leaf meshing time.
  pub fn mesh_time_us(&self) -> u64 {
    self.leaves.iter().map(|l| l.timing_us).sum()
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
