//! Camera poses.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A camera location together with the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
}

impl Pose {
    /// Creates a new pose.
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Interpolates position and target independently with the same factor.
    ///
    /// `t = 0` yields `self` exactly; callers that need the exact end pose should use
    /// `to` directly rather than `lerp(to, 1.0)`.
    #[must_use]
    pub fn lerp(&self, to: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(to.position, t),
            target: self.target.lerp(to.target, t),
        }
    }

    /// Distance between camera and target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Whether both components are within `epsilon` of `other`.
    pub fn abs_diff_eq(&self, other: &Pose, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.target.abs_diff_eq(other.target, epsilon)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO)
    }
}
