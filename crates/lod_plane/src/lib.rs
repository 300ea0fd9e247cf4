//! lod_plane - Distance-driven quadtree LOD and crack-free plane meshing
//!
//! A rectangular region is split into a quadtree whose leaves get finer the
//! closer they sit to a set of target points. Every leaf is then meshed as a
//! regular lattice, with extra midpoints inserted on sides that border a
//! finer leaf so adjacent resolutions meet without T-junction cracks.
//!
//! # Features
//!
//! - **LOD Schedule**: geometric distance thresholds, one per level
//! - **Flat QuadTree**: array-backed branches, depth-first or level-parallel
//!   build
//! - **Neighbor Masks**: sibling-only (default) or geometric classification
//! - **Plane Mesher**: 9-case square table for edge stitching
//! - **Batch Meshing**: every leaf meshed in parallel via rayon
//!
//! # Example
//!
//! ```ignore
//! use glam::{UVec2, Vec2};
//! use lod_plane::{mesh_leaves, LodSchedule, MeshTransform, NeighborMode, QuadTree};
//!
//! let schedule = LodSchedule::new(4.0, 5)?;
//! let mut tree = QuadTree::new(Vec2::ZERO, Vec2::splat(512.0), schedule)?;
//! tree.build(&[Vec2::new(10.0, -20.0)])?;
//!
//! let meshes = mesh_leaves(
//!     &tree,
//!     UVec2::splat(9),
//!     NeighborMode::Siblings,
//!     &MeshTransform::IDENTITY,
//! )?;
//! println!("{} leaves meshed", meshes.len());
//! ```

pub mod batch;
pub mod bounds;
pub mod config;
pub mod directions;
pub mod error;
pub mod lod;
pub mod mesher;
pub mod quadtree;

// Re-export commonly used items
pub use batch::{mesh_leaf, mesh_leaves, LeafMesh};
pub use bounds::Aabb2;
pub use config::{GeneratedPlane, PlaneConfig};
pub use directions::{Directions, Side};
pub use error::{ConfigError, MeshError, TreeError};
pub use lod::{LodSchedule, MAX_LEVEL_COUNT};
pub use mesher::square_table::{square_triangles, Slot, SQUARE_TABLE};
pub use mesher::{MeshTransform, PlaneMesh, PlaneMesher};
pub use quadtree::{Branch, BuildStats, NeighborMode, QuadTree, Quadrant};
