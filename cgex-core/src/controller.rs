//! Mouse-driven object transform.
//!
//! The [`TransformController`] turns pointer and wheel events into a model/view matrix. A drag
//! either rotates (yaw/pitch) or translates the object, chosen by the modifier key when the
//! button goes down. The wheel rolls the object about Z independently of any drag.
//!
//! Positions are window pixels with the origin in the top-left corner and y growing downwards.
//! Callers must normalize to that convention before handing positions over.

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

/// Tunable gains applied to pointer and wheel input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSpeeds {
    /// Degrees of rotation per pixel of drag.
    pub rotation: f32,
    /// Object-space units of translation per pixel of drag.
    pub translation: f32,
    /// Degrees of roll per wheel notch.
    pub scroll_step: f32,
}

impl Default for ControllerSpeeds {
    fn default() -> Self {
        Self {
            rotation: 0.3,
            translation: 0.01,
            scroll_step: 2.5,
        }
    }
}

/// How the controller decides whether a cursor move is part of a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTracking {
    /// A drag exists from button-down until button-up. The mode is fixed at button-down.
    #[default]
    Latched,
    /// Every move re-checks the platform button and modifier state, and measures against the
    /// last recorded drag reference even if a release happened in between.
    Polled,
}

/// What a drag does to the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Translate,
}

impl DragMode {
    fn from_modifier(modifier_held: bool) -> Self {
        if modifier_held {
            DragMode::Translate
        } else {
            DragMode::Rotate
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragMode),
}

/// Platform state sampled at the time of a cursor move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerQuery {
    /// Whether the primary button is down right now.
    pub button_held: bool,
    /// Whether either shift key is down right now.
    pub modifier_held: bool,
}

/// Accumulates drag and wheel input into a view transform.
///
/// `*_old` values are the baseline committed on the last button release. `*_new` values are the
/// baseline plus the drag in progress, and are what [`Self::view_matrix`] reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformController {
    speeds: ControllerSpeeds,
    tracking: ButtonTracking,
    state: DragState,
    drag_reference: Vec2,
    /// `.x` is rotation about Y, `.y` rotation about X, in degrees.
    rot_old: Vec2,
    rot_new: Vec2,
    rot_z: f32,
    tran_old: Vec2,
    tran_new: Vec2,
}

impl TransformController {
    pub fn new(speeds: ControllerSpeeds, tracking: ButtonTracking) -> Self {
        Self {
            speeds,
            tracking,
            ..Default::default()
        }
    }

    /// Starts from `rotation` (yaw, pitch in degrees) as if it had been committed by a drag.
    pub fn with_rotation(mut self, rotation: Vec2) -> Self {
        self.rot_old = rotation;
        self.rot_new = rotation;
        self
    }

    /// Records the drag reference and, with latched tracking, the mode of the new drag.
    pub fn on_button_down(&mut self, position: Vec2, modifier_held: bool) {
        if let DragState::Dragging(mode) = self.state {
            // The release of the previous drag never arrived. Its uncommitted delta is dropped.
            log::debug!("button down while already dragging ({mode:?}); restarting drag");
            self.rot_new = self.rot_old;
            self.tran_new = self.tran_old;
        }
        self.drag_reference = position;
        self.state = DragState::Dragging(DragMode::from_modifier(modifier_held));
    }

    /// Commits the drag in progress. Harmless without a preceding button-down.
    pub fn on_button_up(&mut self) {
        self.rot_old = self.rot_new;
        self.tran_old = self.tran_new;
        self.state = DragState::Idle;
    }

    pub fn on_move(&mut self, position: Vec2, query: PointerQuery) {
        if !query.button_held {
            return;
        }

        let mode = match (self.tracking, self.state) {
            (ButtonTracking::Latched, DragState::Dragging(mode)) => mode,
            (ButtonTracking::Latched, DragState::Idle) => return,
            (ButtonTracking::Polled, _) => DragMode::from_modifier(query.modifier_held),
        };

        let delta = position - self.drag_reference;
        match mode {
            DragMode::Rotate => {
                self.rot_new = self.rot_old + self.speeds.rotation * delta;
            }
            DragMode::Translate => {
                self.tran_new =
                    self.tran_old + self.speeds.translation * Vec2::new(delta.x, -delta.y);
            }
        }
    }

    /// Rolls about Z by one step per event. Only the sign of `direction` matters.
    pub fn on_scroll(&mut self, direction: f32) {
        let sign = if direction > 0.0 { 1.0 } else { -1.0 };
        self.rot_z += sign * self.speeds.scroll_step;
    }

    /// `T(tran) * Ry(rot.x) * Rx(rot.y) * Rz(rot_z)`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.tran_new.extend(0.0)) * self.rotation_matrix()
    }

    /// The rotation part of [`Self::view_matrix`], without translation.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rot_new.x.to_radians())
            * Mat4::from_rotation_x(self.rot_new.y.to_radians())
            * Mat4::from_rotation_z(self.rot_z.to_radians())
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn drag_reference(&self) -> Vec2 {
        self.drag_reference
    }

    pub fn rotation(&self) -> Vec2 {
        self.rot_new
    }

    pub fn committed_rotation(&self) -> Vec2 {
        self.rot_old
    }

    pub fn roll(&self) -> f32 {
        self.rot_z
    }

    pub fn translation(&self) -> Vec2 {
        self.tran_new
    }

    pub fn committed_translation(&self) -> Vec2 {
        self.tran_old
    }

    pub fn speeds(&self) -> ControllerSpeeds {
        self.speeds
    }

    pub fn tracking(&self) -> ButtonTracking {
        self.tracking
    }
}
