//! A full-window quad colored entirely by the fragment shader.

use std::sync::Arc;

use glam::Vec4;

use crate::{
    abs::{GlError, Mesh, ShaderProgram},
    render,
};

pub struct SolidQuad {
    quad: Mesh,
    shader: ShaderProgram,
    color: Vec4,
    background: [f32; 3],
}

impl SolidQuad {
    pub fn new(gl: &Arc<glow::Context>, background: [f32; 3]) -> Result<Self, GlError> {
        Ok(Self {
            background,
            quad: render::plain_mesh(gl, &cgex_core::shapes::window_quad())?,
            shader: ShaderProgram::from_source(gl, &render::SOLID_SHADER)?,
            color: Vec4::new(0.0, 1.0, 0.0, 1.0),
        })
    }
}

impl super::Scene for SolidQuad {
    fn render(&mut self, gl: &glow::Context) {
        render::clear(gl, self.background);
        self.shader.use_program();
        self.shader.set_uniform("u_color", self.color);
        self.quad.draw();
    }
}
