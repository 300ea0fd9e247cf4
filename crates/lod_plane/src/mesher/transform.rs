//! Final rigid transform applied to every emitted vertex.

use glam::{Quat, Vec2, Vec3};

/// Rotation plus a constant elevation for the plane.
///
/// A planar point `(x, y)` becomes `rotation * (x, y, elevation)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTransform {
  pub rotation: Quat,
  pub elevation: f32,
}

impl Default for MeshTransform {
  fn default() -> Self {
    Self::IDENTITY
  }
}

impl MeshTransform {
  pub const IDENTITY: Self = Self {
    rotation: Quat::IDENTITY,
    elevation: 0.0,
  };

  pub fn new(rotation: Quat, elevation: f32) -> Self {
    Self { rotation, elevation }
  }

  pub fn with_rotation(mut self, rotation: Quat) -> Self {
    self.rotation = rotation;
    self
  }

  pub fn with_elevation(mut self, elevation: f32) -> Self {
    self.elevation = elevation;
    self
  }

  #[inline]
  pub fn apply(&self, point: Vec2) -> Vec3 {
    self.rotation * point.extend(self.elevation)
  }

  #[inline]
  pub fn is_identity(&self) -> bool {
    *self == Self::IDENTITY
  }
}
