//! Time driven rotation for the spinning letter.

use glam::Mat4;

/// Constant angular velocity about Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub degrees_per_second: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            degrees_per_second: 30.0,
        }
    }
}

impl Spin {
    pub fn angle(&self, elapsed_seconds: f32) -> f32 {
        self.degrees_per_second * elapsed_seconds
    }

    pub fn matrix(&self, elapsed_seconds: f32) -> Mat4 {
        Mat4::from_rotation_z(self.angle(elapsed_seconds).to_radians())
    }
}
