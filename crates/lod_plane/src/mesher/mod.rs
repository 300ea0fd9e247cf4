//! Crack-free plane mesher for one quadtree leaf.
//!
//! Builds a regular `nx × ny` lattice and, on every side flagged in the
//! neighbor mask, an extra strip of edge midpoints so the cell matches a
//! finer neighbor along that edge. Each lattice square is then triangulated
//! with the fan from [`square_table`] selected by which of its sides touch a
//! flagged edge.
//!
//! # Vertex Layout
//!
//! ```text
//! [ grid (row-major, nx*ny) | West | North | East | South ]
//!                             └── strips, only for flagged sides ──┘
//! ```
//!
//! West/East strips hold `ny - 1` vertices, North/South strips `nx - 1`. A
//! strip vertex sits half a step below (West/East) or left of (North/South)
//! the boundary lattice point that emitted it.
//!
//! # Square Halo
//!
//! Square `(x, y)` spans lattice points `(x-1..=x, y-1..=y)`, so squares with
//! `x == 0` or `y == 0` are skipped.

pub mod square_table;
pub mod transform;

use std::ops::Range;

use glam::{UVec2, Vec2, Vec3};

use crate::directions::{Directions, Side};
use crate::error::MeshError;
use square_table::square_triangles;
pub use transform::MeshTransform;

/// Mesher for one cell size, lattice resolution and neighbor mask.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneMesher {
  size: Vec2,
  resolution: UVec2,
  neighbors: Directions,
}

impl PlaneMesher {
  /// Mesher with no neighbors flagged.
  pub fn new(size: Vec2, resolution: UVec2) -> Result<Self, MeshError> {
    if resolution.x < 2 || resolution.y < 2 {
      return Err(MeshError::InvalidResolution {
        x: resolution.x,
        y: resolution.y,
      });
    }
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
      return Err(MeshError::InvalidSize {
        x: size.x,
        y: size.y,
      });
    }

    Ok(Self {
      size,
      resolution,
      neighbors: Directions::NONE,
    })
  }

  pub fn with_neighbors(mut self, neighbors: Directions) -> Self {
    self.neighbors = neighbors;
    self
  }

  pub fn set_neighbors(&mut self, neighbors: Directions) {
    self.neighbors = neighbors;
  }

  #[inline]
  pub fn size(&self) -> Vec2 {
    self.size
  }

  #[inline]
  pub fn resolution(&self) -> UVec2 {
    self.resolution
  }

  #[inline]
  pub fn neighbors(&self) -> Directions {
    self.neighbors
  }

  /// True when every side in `directions` is flagged.
  #[inline]
  pub fn has_plane_at(&self, directions: Directions) -> bool {
    self.neighbors.contains(directions)
  }

  /// Distance between adjacent lattice points.
  #[inline]
  pub fn step(&self) -> Vec2 {
    self.size / (self.resolution - UVec2::ONE).as_vec2()
  }

  #[inline]
  pub fn point_count(&self) -> usize {
    self.resolution.x as usize * self.resolution.y as usize
  }

  /// Number of midpoint vertices emitted on `side`, 0 when unflagged.
  pub fn strip_len(&self, side: Side) -> usize {
    if !self.neighbors.has(side) {
      return 0;
    }
    match side {
      Side::West | Side::East => self.resolution.y as usize - 1,
      Side::North | Side::South => self.resolution.x as usize - 1,
    }
  }

  /// Total vertex count of [`build`](Self::build) output.
  pub fn vertex_count(&self) -> usize {
    self.point_count() + Side::ALL.iter().map(|&s| self.strip_len(s)).sum::<usize>()
  }

  /// Vertex-buffer ranges for each side's strip, in `Side::ALL` order.
  pub fn strip_ranges(&self) -> [Range<usize>; 4] {
    let mut start = self.point_count();
    Side::ALL.map(|side| {
      let range = start..start + self.strip_len(side);
      start = range.end;
      range
    })
  }

  /// Plain lattice with `origin` at the minimum corner, row-major, z = 0.
  pub fn build_grid(&self, origin: Vec2) -> Vec<Vec3> {
    let nx = self.resolution.x as usize;
    (0..self.point_count())
      .map(|i| self.lattice_point(origin, i % nx, i / nx).extend(0.0))
      .collect()
  }

  /// Which flagged sides square `(x, y)` touches.
  pub fn square_config(&self, x: usize, y: usize) -> Directions {
    let (nx, ny) = (self.resolution.x as usize, self.resolution.y as usize);
    let mut config = Directions::NONE;
    config.set_if(Side::West, x == 1 && self.neighbors.has(Side::West));
    config.set_if(Side::North, y == ny - 1 && self.neighbors.has(Side::North));
    config.set_if(Side::East, x == nx - 1 && self.neighbors.has(Side::East));
    config.set_if(Side::South, y == 1 && self.neighbors.has(Side::South));
    config
  }

  /// Build the cell's vertex and index buffers with `origin` at the minimum
  /// corner.
  ///
  /// Fails if a square needs a configuration the table does not cover, which
  /// only happens when a 2-wide lattice has both opposite sides flagged.
  #[tracing::instrument(
    level = "trace",
    skip_all,
    name = "mesher::build",
    fields(neighbors = self.neighbors.bits())
  )]
  pub fn build(&self, origin: Vec2, transform: &MeshTransform) -> Result<PlaneMesh, MeshError> {
    let (nx, ny) = (self.resolution.x as usize, self.resolution.y as usize);
    let half = self.step() * 0.5;
    let half_x = Vec2::new(half.x, 0.0);
    let half_y = Vec2::new(0.0, half.y);

    let strip_ranges = self.strip_ranges();
    let bases = strip_ranges.clone().map(|r| r.start);

    let mut grid = Vec::with_capacity(self.point_count());
    let mut strips: [Vec<Vec2>; 4] = Default::default();
    let mut indices = Vec::with_capacity((nx - 1) * (ny - 1) * 6);

    let west = self.neighbors.has(Side::West);
    let north = self.neighbors.has(Side::North);
    let east = self.neighbors.has(Side::East);
    let south = self.neighbors.has(Side::South);

    for i in 0..self.point_count() {
      let (x, y) = (i % nx, i / nx);
      let p = self.lattice_point(origin, x, y);
      grid.push(p);

      if west && x == 0 && y != 0 {
        strips[0].push(p - half_y);
      }
      if north && y == ny - 1 && x != 0 {
        strips[1].push(p - half_x);
      }
      if east && x == nx - 1 && y != 0 {
        strips[2].push(p - half_y);
      }
      if south && y == 0 && x != 0 {
        strips[3].push(p - half_x);
      }

      if x == 0 || y == 0 {
        continue;
      }

      // Indexed by `Slot`.
      let slots = [
        i - nx - 1,
        bases[0] + y - 1,
        i - 1,
        bases[1] + x - 1,
        i,
        bases[2] + y - 1,
        i - nx,
        bases[3] + x - 1,
      ];
      for triangle in square_triangles(self.square_config(x, y))? {
        indices.extend(triangle.map(|slot| slots[slot as usize] as u32));
      }
    }

    debug_assert!(strips
      .iter()
      .zip(&strip_ranges)
      .all(|(strip, range)| strip.len() == range.len()));

    let positions = grid
      .iter()
      .chain(strips.iter().flatten())
      .map(|&p| transform.apply(p))
      .collect();

    Ok(PlaneMesh {
      positions,
      indices,
      grid_len: self.point_count(),
      strip_ranges,
    })
  }

  #[inline]
  fn lattice_point(&self, origin: Vec2, x: usize, y: usize) -> Vec2 {
    origin + Vec2::new(x as f32, y as f32) * self.step()
  }
}

/// Vertex and index buffers for one cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneMesh {
  /// Grid vertices followed by the flagged sides' strips.
  pub positions: Vec<Vec3>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  grid_len: usize,
  strip_ranges: [Range<usize>; 4],
}

impl PlaneMesh {
  #[inline]
  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  #[inline]
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// Lattice vertices.
  pub fn grid(&self) -> &[Vec3] {
    &self.positions[..self.grid_len]
  }

  pub fn strip_range(&self, side: Side) -> Range<usize> {
    self.strip_ranges[side as usize].clone()
  }

  /// Midpoint vertices inserted on `side`, empty when unflagged.
  pub fn strip(&self, side: Side) -> &[Vec3] {
    &self.positions[self.strip_range(side)]
  }

  pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|t| [t[0], t[1], t[2]])
  }

  /// Min and max corners of all positions, `None` for an empty mesh.
  pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
    let first = *self.positions.first()?;
    Some(
      self
        .positions
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
  }
}
