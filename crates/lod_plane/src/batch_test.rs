use glam::{UVec2, Vec2, Vec3};

use super::*;
use crate::error::MeshError;
use crate::lod::LodSchedule;

fn make_tree(targets: &[Vec2]) -> QuadTree {
  let schedule = LodSchedule::new(2.0, 3).unwrap();
  let mut tree = QuadTree::new(Vec2::ZERO, Vec2::splat(16.0), schedule).unwrap();
  tree.build(targets).unwrap();
  tree
}

fn mesh_area(mesh: &PlaneMesh) -> f32 {
  mesh
    .triangles()
    .map(|[a, b, c]| {
      let (a, b, c) = (
        mesh.positions[a as usize],
        mesh.positions[b as usize],
        mesh.positions[c as usize],
      );
      0.5 * ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs()
    })
    .sum()
}

#[test]
fn test_one_mesh_per_leaf_in_leaf_order() {
  let tree = make_tree(&[Vec2::new(-6.0, -6.0)]);
  let meshes = mesh_leaves(
    &tree,
    UVec2::splat(3),
    NeighborMode::Siblings,
    &MeshTransform::IDENTITY,
  )
  .unwrap();

  let leaves: Vec<usize> = tree.leaves().map(|b| b.index).collect();
  let meshed: Vec<usize> = meshes.iter().map(|m| m.branch).collect();
  assert_eq!(leaves, meshed);

  for leaf in &meshes {
    let branch = tree.branch(leaf.branch).unwrap();
    assert_eq!(leaf.depth, branch.depth);
    assert_eq!(leaf.bounds, branch.bounds);
    assert_eq!(Ok(leaf.neighbors), tree.neighbor_mask(leaf.branch));
  }
}

#[test]
fn test_leaf_meshes_sit_inside_leaf_bounds() {
  let tree = make_tree(&[Vec2::new(-6.0, -6.0)]);
  let meshes = mesh_leaves(
    &tree,
    UVec2::new(4, 3),
    NeighborMode::Siblings,
    &MeshTransform::IDENTITY,
  )
  .unwrap();

  for leaf in &meshes {
    let (min, max) = leaf.mesh.bounds().unwrap();
    assert!(min.abs_diff_eq(leaf.bounds.sw().extend(0.0), 1e-4));
    assert!(max.abs_diff_eq(leaf.bounds.ne().extend(0.0), 1e-4));
  }
}

/// Stitched leaves carry extra midpoints; unflagged ones are plain grids.
#[test]
fn test_neighbor_mask_drives_strips() {
  let tree = make_tree(&[Vec2::new(-6.0, -6.0)]);
  let meshes = mesh_leaves(
    &tree,
    UVec2::splat(3),
    NeighborMode::Siblings,
    &MeshTransform::IDENTITY,
  )
  .unwrap();

  for leaf in &meshes {
    let expected = 9 + 2 * leaf.neighbors.count() as usize;
    assert_eq!(leaf.mesh.vertex_count(), expected, "leaf {}", leaf.branch);
  }
  assert!(meshes.iter().any(|m| !m.neighbors.is_empty()));
}

/// Leaf meshes tile the whole region in either neighbor mode.
#[test]
fn test_leaves_cover_region() {
  let tree = make_tree(&[Vec2::new(-1.0, -1.0), Vec2::new(5.0, 6.0)]);
  for mode in [NeighborMode::Siblings, NeighborMode::Geometric] {
    let meshes = mesh_leaves(&tree, UVec2::splat(5), mode, &MeshTransform::IDENTITY).unwrap();
    let area: f32 = meshes.iter().map(|m| mesh_area(&m.mesh)).sum();
    assert!((area - 256.0).abs() < 1e-2, "{:?} covers {}", mode, area);
  }
}

#[test]
fn test_geometric_mode_stitches_more_sides() {
  let tree = make_tree(&[Vec2::new(-1.0, -1.0)]);
  let count = |mode| -> usize {
    mesh_leaves(&tree, UVec2::splat(3), mode, &MeshTransform::IDENTITY)
      .unwrap()
      .iter()
      .map(|m| m.mesh.vertex_count())
      .sum()
  };
  assert!(count(NeighborMode::Geometric) > count(NeighborMode::Siblings));
}

#[test]
fn test_transform_reaches_every_leaf() {
  let tree = make_tree(&[Vec2::ZERO]);
  let transform = MeshTransform::IDENTITY.with_elevation(3.0);
  let meshes = mesh_leaves(&tree, UVec2::splat(2), NeighborMode::Siblings, &transform).unwrap();

  assert!(meshes
    .iter()
    .flat_map(|m| m.mesh.positions.iter())
    .all(|p: &Vec3| p.z == 3.0));
}

#[test]
fn test_mesh_leaf_rejects_internal_branch() {
  let tree = make_tree(&[Vec2::ZERO]);
  let result = mesh_leaf(
    &tree,
    0,
    UVec2::splat(3),
    NeighborMode::Siblings,
    &MeshTransform::IDENTITY,
  );
  assert!(matches!(result, Err(ConfigError::Tree(TreeError::NotALeaf(0)))));
}

#[test]
fn test_mesh_leaf_propagates_errors() {
  let tree = make_tree(&[Vec2::ZERO]);
  let leaf = tree.leaves().next().unwrap().index;

  assert!(matches!(
    mesh_leaf(&tree, 9_999, UVec2::splat(3), NeighborMode::Siblings, &MeshTransform::IDENTITY),
    Err(ConfigError::Tree(TreeError::BranchOutOfRange(9_999)))
  ));
  assert!(matches!(
    mesh_leaf(&tree, leaf, UVec2::splat(1), NeighborMode::Siblings, &MeshTransform::IDENTITY),
    Err(ConfigError::Mesh(MeshError::InvalidResolution { .. }))
  ));
}
