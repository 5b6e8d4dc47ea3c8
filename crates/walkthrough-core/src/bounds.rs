//! Bounding volume of the loaded scene, used for initial framing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// Axis-aligned bounding box of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl SceneBounds {
    /// Creates bounds from two corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing all points, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the diagonal.
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).length()
    }

    /// Radius of the bounding sphere.
    pub fn radius(&self) -> f32 {
        self.diagonal() * 0.5
    }

    /// Near and far clip distances that keep the whole scene visible.
    pub fn clip_planes(&self) -> (f32, f32) {
        let size = self.diagonal().max(1e-3);
        (size * 0.001, size * 100.0)
    }

    /// A pose that fits the bounding sphere in view.
    ///
    /// `fov_y` is the vertical field of view in radians; narrow aspect ratios use the
    /// horizontal field of view instead so the scene still fits across. `direction`
    /// points from the scene center towards the camera. `margin` scales the distance.
    pub fn fit_pose(&self, fov_y: f32, aspect_ratio: f32, direction: Vec3, margin: f32) -> Pose {
        let half_v = fov_y * 0.5;
        let half_h = (half_v.tan() * aspect_ratio.max(1e-3)).atan();
        let half_fov = half_v.min(half_h).max(1e-3);
        let distance = self.radius().max(1e-3) / half_fov.sin() * margin;
        let direction = direction.try_normalize().unwrap_or(Vec3::Z);
        let center = self.center();
        Pose::new(center + direction * distance, center)
    }
}
