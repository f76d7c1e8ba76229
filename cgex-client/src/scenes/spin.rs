//! The colorful letter turning about Z at a constant rate.

use std::sync::Arc;

use cgex_core::Spin;

use crate::{
    abs::{GlError, Mesh, ShaderProgram},
    render,
};

pub struct SpinningLetter {
    letter: Mesh,
    shader: ShaderProgram,
    spin: Spin,
    elapsed: f32,
    background: [f32; 3],
}

impl SpinningLetter {
    pub fn new(gl: &Arc<glow::Context>, background: [f32; 3]) -> Result<Self, GlError> {
        Ok(Self {
            background,
            letter: render::colored_mesh(gl, &cgex_core::shapes::letter_stem())?,
            shader: ShaderProgram::from_source(gl, &render::COLORED_SHADER)?,
            spin: Spin::default(),
            elapsed: 0.0,
        })
    }
}

impl super::Scene for SpinningLetter {
    fn update(&mut self, delta_time: f32) {
        self.elapsed += delta_time;
    }

    fn render(&mut self, gl: &glow::Context) {
        render::clear(gl, self.background);
        self.shader.use_program();
        self.shader.set_uniform("u_view", self.spin.matrix(self.elapsed));
        self.letter.draw();
    }
}
