use glam::{Mat4, Vec3};

/// First-person fly camera.
///
/// Horizontal moves follow the heading (yaw) only, so looking up or down
/// does not change altitude; `move_up`/`move_down` move along world Y.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second.
    pub speed: f32,
    /// Radians per pixel of mouse motion.
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 0.0),
            // Looking along -Z, which is simulation +Y.
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 80.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            speed: 100.0,
            sensitivity: 0.003,
        }
    }
}

impl FlyCamera {
    pub fn with_settings(fov_degrees: f32, speed: f32, sensitivity: f32) -> Self {
        Self {
            fov: fov_degrees.to_radians(),
            speed,
            sensitivity,
            ..Self::default()
        }
    }

    /// Unit look direction, including pitch.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Unit heading on the ground plane.
    pub fn heading(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        self.heading().cross(Vec3::Y).normalize()
    }

    pub fn move_forward(&mut self, dt: f32) {
        self.position += self.heading() * self.speed * dt;
    }

    pub fn move_backward(&mut self, dt: f32) {
        self.position -= self.heading() * self.speed * dt;
    }

    pub fn move_left(&mut self, dt: f32) {
        self.position -= self.right() * self.speed * dt;
    }

    pub fn move_right(&mut self, dt: f32) {
        self.position += self.right() * self.speed * dt;
    }

    pub fn move_up(&mut self, dt: f32) {
        self.position.y += self.speed * dt;
    }

    pub fn move_down(&mut self, dt: f32) {
        self.position.y -= self.speed * dt;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 3.0, 0.0));
        assert!(close(cam.forward(), Vec3::NEG_Z));
        assert!(!cam.view_projection().col(0).x.is_nan());
    }

    #[test]
    fn forward_move_ignores_pitch() {
        let mut cam = FlyCamera::default();
        cam.pitch = -60.0_f32.to_radians();
        cam.move_forward(0.1);
        assert!((cam.position.y - 3.0).abs() < 1e-5);
        assert!(close(cam.position, Vec3::new(0.0, 3.0, -10.0)));
    }

    #[test]
    fn strafe_is_perpendicular_to_heading() {
        let mut cam = FlyCamera::default();
        cam.move_right(0.01);
        assert!(close(cam.position, Vec3::new(1.0, 3.0, 0.0)));
        cam.move_left(0.02);
        assert!(close(cam.position, Vec3::new(-1.0, 3.0, 0.0)));
    }

    #[test]
    fn vertical_moves_follow_world_y() {
        let mut cam = FlyCamera::default();
        cam.move_up(0.05);
        assert!((cam.position.y - 8.0).abs() < 1e-4);
        cam.move_down(0.05);
        assert!((cam.position.y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.rotate(0.0, -100_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
        cam.rotate(0.0, 100_000.0);
        assert!(cam.pitch >= -89.0_f32.to_radians() - 1e-6);
    }

    #[test]
    fn with_settings_overrides_fov_and_speed() {
        let cam = FlyCamera::with_settings(60.0, 25.0, 0.01);
        assert!((cam.fov - 60.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(cam.speed, 25.0);
        assert_eq!(cam.sensitivity, 0.01);
    }
}
