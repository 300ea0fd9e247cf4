//! Axis-aligned 2D bounding box stored as center and half-extents.

use glam::Vec2;

/// 2D axis-aligned bounding box.
///
/// Immutable once built. Splitting produces four new boxes instead of
/// shrinking this one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb2 {
  /// Center of the box.
  pub center: Vec2,
  /// Half size of the box (never negative).
  pub extents: Vec2,
}

impl Aabb2 {
  /// Create a box from center and half-extents.
  ///
  /// # Panics
  /// Debug-asserts that extents are non-negative on both axes.
  pub fn new(center: Vec2, extents: Vec2) -> Self {
    debug_assert!(
      extents.x >= 0.0 && extents.y >= 0.0,
      "Aabb2 extents must be >= 0 on both axes"
    );
    Self { center, extents }
  }

  /// Create a box from its center and full size.
  pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
    Self::new(center, size * 0.5)
  }

  /// South-west (minimum) corner.
  #[inline]
  pub fn sw(&self) -> Vec2 {
    self.center - self.extents
  }

  /// North-west corner.
  #[inline]
  pub fn nw(&self) -> Vec2 {
    self.center + Vec2::new(-self.extents.x, self.extents.y)
  }

  /// North-east (maximum) corner.
  #[inline]
  pub fn ne(&self) -> Vec2 {
    self.center + self.extents
  }

  /// South-east corner.
  #[inline]
  pub fn se(&self) -> Vec2 {
    self.center + Vec2::new(self.extents.x, -self.extents.y)
  }

  /// Corners in child order: SW, NW, NE, SE.
  pub fn corners(&self) -> [Vec2; 4] {
    [self.sw(), self.nw(), self.ne(), self.se()]
  }

  /// Full size (extents * 2).
  #[inline]
  pub fn size(&self) -> Vec2 {
    self.extents * 2.0
  }

  /// Check if the box contains a point. Boundaries are inclusive.
  #[inline]
  pub fn contains_point(&self, point: Vec2) -> bool {
    point.x >= self.center.x - self.extents.x
      && point.y >= self.center.y - self.extents.y
      && point.x <= self.center.x + self.extents.x
      && point.y <= self.center.y + self.extents.y
  }

  /// Check if at least one of `points` lies inside the box.
  pub fn contains_any(&self, points: &[Vec2]) -> bool {
    points.iter().any(|&p| self.contains_point(p))
  }

  /// Check if `other` lies entirely inside this box.
  pub fn contains_box(&self, other: &Aabb2) -> bool {
    self.contains_point(other.sw()) && self.contains_point(other.ne())
  }

  /// Split into four quadrants ordered SW, NW, NE, SE.
  pub fn split(&self) -> [Aabb2; 4] {
    let half = self.extents * 0.5;
    let c = self.center;
    [
      Aabb2::new(c + Vec2::new(-half.x, -half.y), half),
      Aabb2::new(c + Vec2::new(-half.x, half.y), half),
      Aabb2::new(c + Vec2::new(half.x, half.y), half),
      Aabb2::new(c + Vec2::new(half.x, -half.y), half),
    ]
  }
}
