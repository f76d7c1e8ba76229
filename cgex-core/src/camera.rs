//! Orbit camera for the mesh viewer.
//!
//! The [`Camera`] reuses the [`TransformController`] drag pattern for rotating and panning, and
//! adds a dolly distance, a field of view and a perspective projection on top of it.

use glam::{Mat4, Vec2, Vec3};

use crate::controller::{ButtonTracking, ControllerSpeeds, PointerQuery, TransformController};

const DOLLY_STEP: f32 = 0.5;
const FOV_STEP: f32 = 2.5;
const MIN_FOV: f32 = 5.0;
const MAX_FOV: f32 = 150.0;

pub struct Camera {
    drag: TransformController,
    /// Translation applied before the drag transform. `z` is the dolly distance.
    offset: Vec3,
    aspect: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Creates a camera looking down -Z from `translation`, with `aspect` = width / height.
    /// `rotation` is the starting yaw and pitch of the object in degrees.
    pub fn new(aspect: f32, rotation: Vec2, translation: Vec3) -> Self {
        Self::with_controller(
            aspect,
            rotation,
            translation,
            TransformController::new(ControllerSpeeds::default(), ButtonTracking::Latched),
        )
    }

    pub fn with_controller(
        aspect: f32,
        rotation: Vec2,
        translation: Vec3,
        drag: TransformController,
    ) -> Self {
        Self {
            drag: drag.with_rotation(rotation),
            offset: translation,
            aspect,
            fov: 30.0,
            near: 0.001,
            far: 500.0,
        }
    }

    pub fn mouse_down(&mut self, position: Vec2, shift: bool) {
        self.drag.on_button_down(position, shift);
    }

    pub fn mouse_up(&mut self) {
        self.drag.on_button_up();
    }

    pub fn mouse_drag(&mut self, position: Vec2, query: PointerQuery) {
        self.drag.on_move(position, query);
    }

    /// With shift the wheel zooms the lens, otherwise it moves the camera along its view axis.
    pub fn mouse_wheel(&mut self, spin_up: bool, shift: bool) {
        if shift {
            let step = if spin_up { -FOV_STEP } else { FOV_STEP };
            self.fov = (self.fov + step).clamp(MIN_FOV, MAX_FOV);
        } else {
            self.offset.z += if spin_up { DOLLY_STEP } else { -DOLLY_STEP };
        }
    }

    /// Updates the aspect ratio. A zero height (minimized window) is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn modelview(&self) -> Mat4 {
        Mat4::from_translation(self.offset) * self.drag.view_matrix()
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// `projection * modelview`, ready for the vertex shader.
    pub fn full_view(&self) -> Mat4 {
        self.projection() * self.modelview()
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn controller(&self) -> &TransformController {
        &self.drag
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    const HELD: PointerQuery = PointerQuery {
        button_held: true,
        modifier_held: false,
    };

    #[test]
    fn test_initial_modelview_is_offset() {
        let camera = Camera::new(1.0, Vec2::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(
            camera.modelview(),
            Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0))
        );
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = Camera::new(1.0, Vec2::ZERO, Vec3::new(0.0, 0.0, -5.0));
        let clip = camera.full_view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_drag_rotates_about_origin() {
        let mut camera = Camera::new(1.0, Vec2::ZERO, Vec3::new(0.0, 0.0, -5.0));
        camera.mouse_down(Vec2::ZERO, false);
        camera.mouse_drag(Vec2::new(300.0, 0.0), HELD);
        camera.mouse_up();

        let p = camera.modelview().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -6.0), 1e-5));
    }

    #[test]
    fn test_initial_rotation_seeds_controller() {
        let camera = Camera::new(1.0, Vec2::new(90.0, 0.0), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(camera.controller().committed_rotation(), Vec2::new(90.0, 0.0));

        let p = camera.modelview().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -6.0), 1e-5));
    }

    #[test]
    fn test_shift_drag_pans_on_top_of_dolly() {
        let shift_held = PointerQuery {
            button_held: true,
            modifier_held: true,
        };
        let mut camera = Camera::new(1.0, Vec2::ZERO, Vec3::new(0.0, 0.0, -5.0));
        camera.mouse_wheel(true, false);
        camera.mouse_down(Vec2::ZERO, true);
        camera.mouse_drag(Vec2::new(100.0, -50.0), shift_held);
        camera.mouse_up();

        assert!(camera
            .controller()
            .committed_translation()
            .abs_diff_eq(Vec2::new(1.0, 0.5), 1e-5));
        assert_eq!(camera.controller().committed_rotation(), Vec2::ZERO);
        let p = camera.modelview().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 0.5, -4.5), 1e-5));
    }

    #[test]
    fn test_wheel_dollies_without_shift() {
        let mut camera = Camera::new(1.0, Vec2::ZERO, Vec3::new(0.0, 0.0, -5.0));
        camera.mouse_wheel(true, false);
        camera.mouse_wheel(true, false);
        camera.mouse_wheel(false, false);
        assert!((camera.offset().z + 4.5).abs() < 1e-6);
        assert_eq!(camera.fov, 30.0);
    }

    #[test]
    fn test_wheel_zooms_with_shift_and_clamps() {
        let mut camera = Camera::new(1.0, Vec2::ZERO, Vec3::new(0.0, 0.0, -5.0));
        camera.mouse_wheel(true, true);
        assert!((camera.fov - 27.5).abs() < 1e-6);
        for _ in 0..100 {
            camera.mouse_wheel(true, true);
        }
        assert_eq!(camera.fov, MIN_FOV);
        for _ in 0..100 {
            camera.mouse_wheel(false, true);
        }
        assert_eq!(camera.fov, MAX_FOV);
    }

    #[test]
    fn test_resize_updates_aspect_and_ignores_zero_height() {
        let mut camera = Camera::new(1.0, Vec2::ZERO, Vec3::ZERO);
        camera.resize(800, 400);
        assert_eq!(camera.aspect(), 2.0);
        camera.resize(800, 0);
        assert_eq!(camera.aspect(), 2.0);
    }
}
