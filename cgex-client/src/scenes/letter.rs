//! A letter built from a triangle fan with one color per vertex.

use std::sync::Arc;

use glam::Mat4;

use crate::{
    abs::{GlError, Mesh, ShaderProgram},
    render,
};

pub struct ColorfulLetter {
    letter: Mesh,
    shader: ShaderProgram,
    background: [f32; 3],
}

impl ColorfulLetter {
    pub fn new(gl: &Arc<glow::Context>, background: [f32; 3]) -> Result<Self, GlError> {
        Ok(Self {
            background,
            letter: render::colored_mesh(gl, &cgex_core::shapes::letter_b_flat())?,
            shader: ShaderProgram::from_source(gl, &render::COLORED_SHADER)?,
        })
    }
}

impl super::Scene for ColorfulLetter {
    fn render(&mut self, gl: &glow::Context) {
        render::clear(gl, self.background);
        self.shader.use_program();
        self.shader.set_uniform("u_view", Mat4::IDENTITY);
        self.letter.draw();
    }
}
