//! Camera and view management.

use glam::{Mat4, Vec3};
use walkthrough_core::{Pose, SceneBounds};

/// A 3D camera for viewing the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Closest the camera may zoom to its target.
    pub min_distance: f32,
    /// Farthest the camera may zoom from its target.
    pub max_distance: f32,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        let pose = Pose::default();
        Self {
            position: pose.position,
            target: pose.target,
            up: Vec3::Y,
            fov: 50.0_f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 1000.0,
            min_distance: 0.5,
            max_distance: 500.0,
        }
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            self.aspect_ratio = aspect_ratio;
        }
    }

    /// Returns the current pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.target)
    }

    /// Places the camera at `pose`.
    pub fn set_pose(&mut self, pose: Pose) {
        self.position = pose.position;
        self.target = pose.target;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the perspective projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Orbits the camera around the target.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let radius = (self.position - self.target).length();
        if radius <= f32::EPSILON {
            return;
        }
        let offset = self.position - self.target;
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta -= delta_x;
        phi = (phi - delta_y).clamp(0.01, std::f32::consts::PI - 0.01);

        self.position = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }

    /// Pans the camera.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let right = self.right();
        let up = self.up;
        let offset = right * delta_x + up * delta_y;
        self.position += offset;
        self.target += offset;
    }

    /// Zooms the camera by moving it toward (positive `delta`) or away from the
    /// target, within `min_distance..=max_distance`.
    pub fn zoom(&mut self, delta: f32) {
        let direction = self.forward();
        if direction == Vec3::ZERO {
            return;
        }
        let distance = (self.position - self.target).length();
        let new_distance = (distance - delta).clamp(self.min_distance, self.max_distance);
        self.position = self.target - direction * new_distance;
    }

    /// Adapts clip planes and zoom limits to the scene size.
    pub fn fit_clip_planes(&mut self, bounds: &SceneBounds) {
        let (near, far) = bounds.clip_planes();
        self.near = near;
        self.far = far;
        let size = bounds.diagonal().max(1e-3);
        self.min_distance = size * 0.01;
        self.max_distance = size * 10.0;
    }

    /// Sets the field of view in radians.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(0.1, std::f32::consts::PI - 0.1);
    }

    /// Returns FOV in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Sets FOV from degrees.
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.set_fov(degrees.to_radians());
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::default();
        assert_eq!(camera.pose(), Pose::default());
    }

    #[test]
    fn test_pose_round_trip() {
        let mut camera = Camera::new(1.0);
        let pose = Pose::new(Vec3::new(4.0, 5.0, 6.0), Vec3::new(1.0, 0.0, -1.0));
        camera.set_pose(pose);
        assert_eq!(camera.pose(), pose);
    }

    #[test]
    fn test_projection_matrix() {
        let camera = Camera::new(1.0);
        let proj = camera.projection_matrix();
        // Perspective matrix has non-zero w division
        assert!(proj.w_axis.z != 0.0);
        assert!(proj.w_axis.w.abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_maps_target_onto_view_axis() {
        let mut camera = Camera::new(1.0);
        camera.set_pose(Pose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
        let target_in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(target_in_view.truncate().length() < 1e-5);
        assert!((target_in_view.z + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_orbit_keeps_radius_and_target() {
        let mut camera = Camera::new(1.0);
        camera.set_pose(Pose::new(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 1.0, 0.0)));
        let radius = camera.pose().distance();
        camera.orbit(0.4, -0.2);
        assert_eq!(camera.target, Vec3::new(0.0, 1.0, 0.0));
        assert!((camera.pose().distance() - radius).abs() < 1e-4);
    }

    #[test]
    fn test_pan_moves_both_points() {
        let mut camera = Camera::new(1.0);
        let before = camera.pose();
        camera.pan(1.0, 0.5);
        let after = camera.pose();
        assert_eq!(after.position - before.position, after.target - before.target);
        assert!((after.position - before.position).length() > 0.0);
    }

    #[test]
    fn test_zoom_clamps_distance() {
        let mut camera = Camera::new(1.0);
        camera.set_pose(Pose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
        camera.zoom(1.0);
        assert!((camera.pose().distance() - 4.0).abs() < 1e-5);
        camera.zoom(100.0);
        assert!((camera.pose().distance() - camera.min_distance).abs() < 1e-5);
        camera.zoom(-10_000.0);
        assert!((camera.pose().distance() - camera.max_distance).abs() < 1e-2);
    }

    #[test]
    fn test_fit_clip_planes() {
        let mut camera = Camera::new(1.0);
        camera.fit_clip_planes(&SceneBounds::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)));
        assert!((camera.near - 0.01).abs() < 1e-6);
        assert!((camera.far - 1000.0).abs() < 1e-3);
        assert!((camera.max_distance - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_fov_clamping() {
        let mut camera = Camera::new(1.0);
        camera.set_fov(0.0);
        assert!(camera.fov >= 0.1);
        camera.set_fov(std::f32::consts::PI);
        assert!(camera.fov < std::f32::consts::PI);
        camera.set_fov_degrees(90.0);
        assert!((camera.fov_degrees() - 90.0).abs() < 0.1);
    }
}
