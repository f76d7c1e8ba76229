//! The letter "B" rotated and panned with the mouse.
//!
//! Dragging with the left button rotates the letter about Y (horizontal motion) and X (vertical
//! motion); holding shift when the button goes down pans it instead. The wheel rolls it about Z.

use std::sync::Arc;

use cgex_core::{PointerQuery, TransformController};
use glow::HasContext;
use sdl2::event::Event;

use crate::{
    abs::{GlError, Mesh, ShaderProgram},
    input, render,
    settings::Settings,
};

pub struct DragLetter {
    letter: Mesh,
    shader: ShaderProgram,
    controller: TransformController,
    background: [f32; 3],
}

impl DragLetter {
    pub fn new(
        gl: &Arc<glow::Context>,
        settings: &Settings,
        background: [f32; 3],
    ) -> Result<Self, GlError> {
        Ok(Self {
            background,
            letter: render::colored_mesh(gl, &cgex_core::shapes::letter_b())?,
            shader: ShaderProgram::from_source(gl, &render::COLORED_SHADER)?,
            controller: TransformController::new(settings.speeds, settings.button_tracking),
        })
    }
}

impl super::Scene for DragLetter {
    fn handle_event(&mut self, event: &Event, query: PointerQuery) {
        input::dispatch(&mut self.controller, event, query);
    }

    fn render(&mut self, gl: &glow::Context) {
        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }
        render::clear(gl, self.background);
        self.shader.use_program();
        self.shader
            .set_uniform("u_view", self.controller.view_matrix());
        self.letter.draw();
        unsafe {
            gl.disable(glow::DEPTH_TEST);
        }
    }
}
