//! Orbit camera
//!
//! The camera circles a target point at a fixed distance. Yaw turns about the
//! world Y axis, pitch tilts towards or away from it.

use veusz_math::{mat4, Mat4};

/// Camera looking at a target from a distance
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Distance from the target
    pub distance: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,

    yaw: f32,
    pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera 5 units in front of the origin
    pub fn new() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            distance: 5.0,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Set the distance from the target
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Set the vertical field of view in degrees
    pub fn with_fov_degrees(mut self, fov: f32) -> Self {
        self.fov_y = fov.to_radians();
        self
    }

    /// Set the clipping planes
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Rotate around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        // Clamp pitch so the view never flips over the pole
        self.pitch = (self.pitch + delta_pitch).clamp(-1.5, 1.5);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Camera position in world space
    pub fn eye(&self) -> [f32; 3] {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        [
            self.target[0] + self.distance * cp * sy,
            self.target[1] + self.distance * sp,
            self.target[2] + self.distance * cp * cy,
        ]
    }

    /// World to eye space
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), self.target, [0.0, 1.0, 0.0])
    }

    /// Eye to clip space
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y, aspect, self.near, self.far)
    }

    /// World to clip space: `projection · view`
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veusz_math::Vec4;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_default_eye_on_positive_z() {
        let cam = Camera::new();
        let eye = cam.eye();
        assert!((eye[2] - 5.0).abs() < EPSILON);
        assert!(eye[0].abs() < EPSILON && eye[1].abs() < EPSILON);
    }

    #[test]
    fn test_orbit_clamps_pitch() {
        let mut cam = Camera::new();
        cam.orbit(0.0, 10.0);
        assert_eq!(cam.pitch(), 1.5);
        cam.orbit(0.0, -20.0);
        assert_eq!(cam.pitch(), -1.5);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut cam = Camera::new().with_distance(3.0);
        cam.orbit(0.7, 0.4);
        let eye = cam.eye();
        let dist = (eye[0] * eye[0] + eye[1] * eye[1] + eye[2] * eye[2]).sqrt();
        assert!((dist - 3.0).abs() < EPSILON, "got {}", dist);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let mut cam = Camera::new();
        cam.orbit(0.3, 0.2);
        let clip = mat4::transform(cam.view_projection(1.0), Vec4::ORIGIN);
        let [x, y, _] = clip.perspective_divide();
        assert!(x.abs() < EPSILON && y.abs() < EPSILON, "got ({}, {})", x, y);
    }
}
