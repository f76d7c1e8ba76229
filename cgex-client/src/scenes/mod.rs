//! Module providing the `Scene` trait and one scene per exercise.
//!
//! Only one scene is alive at a time. The number keys replace it with another exercise and
//! Escape quits, the way every exercise program closed its window.

use std::sync::Arc;

use cgex_core::PointerQuery;
use sdl2::{event::Event, keyboard::Keycode};
use serde::{Deserialize, Serialize};

use crate::{abs::GlError, settings::Settings};

pub mod chessboard;
pub mod clear;
pub mod drag;
pub mod letter;
pub mod mesh;
pub mod solid;
pub mod spin;

/// The exercises, in the order of their number keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    /// Clear the window to a solid color.
    Clear,
    /// Full-window quad shaded by the pixel shader.
    Solid,
    /// Procedural chessboard pixel shader.
    Chessboard,
    /// Static letter with per-vertex colors.
    Letter,
    /// Letter spinning about Z over time.
    Spin,
    /// Letter rotated and panned with the mouse.
    Drag,
    /// OBJ mesh viewer with an orbit camera.
    Mesh,
}

impl Exercise {
    pub const ALL: [Exercise; 7] = [
        Exercise::Clear,
        Exercise::Solid,
        Exercise::Chessboard,
        Exercise::Letter,
        Exercise::Spin,
        Exercise::Drag,
        Exercise::Mesh,
    ];

    pub fn from_key(key: Keycode) -> Option<Self> {
        let index = match key {
            Keycode::Num1 => 0,
            Keycode::Num2 => 1,
            Keycode::Num3 => 2,
            Keycode::Num4 => 3,
            Keycode::Num5 => 4,
            Keycode::Num6 => 5,
            Keycode::Num7 => 6,
            _ => return None,
        };
        Some(Self::ALL[index])
    }

    pub fn title(self) -> &'static str {
        match self {
            Exercise::Clear => "Clear Screen",
            Exercise::Solid => "Clear to Green",
            Exercise::Chessboard => "Chessboard",
            Exercise::Letter => "Colorful Letter",
            Exercise::Spin => "Spinning Letter",
            Exercise::Drag => "Rotate 3D",
            Exercise::Mesh => "Mesh Viewer",
        }
    }

    /// The window clear color: the configured one if any, otherwise the exercise's own.
    pub fn background(self, settings: &Settings) -> [f32; 3] {
        settings.clear_color.unwrap_or(match self {
            Exercise::Clear => [0.2, 0.3, 0.3],
            Exercise::Solid => [0.0, 0.0, 0.0],
            _ => [0.5, 0.5, 0.5],
        })
    }

    /// Builds the scene for this exercise in a window of `size` pixels.
    pub fn build(
        self,
        gl: &Arc<glow::Context>,
        settings: &Settings,
        size: (u32, u32),
    ) -> Result<Box<dyn Scene>, GlError> {
        let background = self.background(settings);
        Ok(match self {
            Exercise::Clear => Box::new(clear::ClearScreen { background }),
            Exercise::Solid => Box::new(solid::SolidQuad::new(gl, background)?),
            Exercise::Chessboard => Box::new(chessboard::Chessboard::new(gl, background)?),
            Exercise::Letter => Box::new(letter::ColorfulLetter::new(gl, background)?),
            Exercise::Spin => Box::new(spin::SpinningLetter::new(gl, background)?),
            Exercise::Drag => Box::new(drag::DragLetter::new(gl, settings, background)?),
            Exercise::Mesh => {
                Box::new(mesh::MeshViewer::new(gl, settings, size, background)?)
            }
        })
    }
}

pub enum SceneSwitch {
    None,
    Replace(Exercise),
    Quit,
}

/// The Scene trait defines the common interface for all exercises.
pub trait Scene {
    /// Handles an event. `query` is the pointer state at the time of the call.
    fn handle_event(&mut self, _event: &Event, _query: PointerQuery) {}

    /// Advances time-dependent state by `delta_time` seconds.
    fn update(&mut self, _delta_time: f32) {}

    /// Renders the scene.
    fn render(&mut self, gl: &glow::Context);
}

/// Owns the running scene and decides when to switch.
pub struct SceneManager {
    exercise: Exercise,
    scene: Box<dyn Scene>,
}

impl SceneManager {
    pub fn new(exercise: Exercise, scene: Box<dyn Scene>) -> Self {
        Self { exercise, scene }
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    /// Intercepts the global keys and forwards everything else to the current scene.
    pub fn handle_event(&mut self, event: &Event, query: PointerQuery) -> SceneSwitch {
        if let Event::KeyDown {
            keycode: Some(key),
            repeat: false,
            ..
        } = *event
        {
            if key == Keycode::Escape {
                return SceneSwitch::Quit;
            }
            if let Some(exercise) = Exercise::from_key(key)
                && exercise != self.exercise
            {
                return SceneSwitch::Replace(exercise);
            }
        }
        self.scene.handle_event(event, query);
        SceneSwitch::None
    }

    pub fn replace(&mut self, exercise: Exercise, scene: Box<dyn Scene>) {
        log::info!("switching to {exercise:?}");
        self.exercise = exercise;
        self.scene = scene;
    }

    pub fn update(&mut self, delta_time: f32) {
        self.scene.update(delta_time);
    }

    pub fn render(&mut self, gl: &glow::Context) {
        self.scene.render(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_map_in_order() {
        assert_eq!(Exercise::from_key(Keycode::Num1), Some(Exercise::Clear));
        assert_eq!(Exercise::from_key(Keycode::Num6), Some(Exercise::Drag));
        assert_eq!(Exercise::from_key(Keycode::Num7), Some(Exercise::Mesh));
        assert_eq!(Exercise::from_key(Keycode::Num8), None);
        assert_eq!(Exercise::from_key(Keycode::A), None);
    }

    #[test]
    fn test_exercise_names_round_trip_through_serde() {
        for exercise in Exercise::ALL {
            let json = serde_json::to_string(&exercise).unwrap();
            assert_eq!(serde_json::from_str::<Exercise>(&json).unwrap(), exercise);
        }
        assert_eq!(serde_json::to_string(&Exercise::Chessboard).unwrap(), "\"chessboard\"");
    }
}
