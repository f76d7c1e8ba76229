//! A chessboard of fixed-size cells computed per pixel.
//!
//! The geometry is a single full-window quad; the fragment shader picks black or white from the
//! parity of the pixel's cell column and row (see [`cgex_core::chessboard`]). Cells have a fixed
//! size in pixels, so resizing the window shows more or fewer of them.

use std::sync::Arc;

use cgex_core::chessboard::CELL_SIZE;

use crate::{
    abs::{GlError, Mesh, ShaderProgram},
    render,
};

pub struct Chessboard {
    quad: Mesh,
    shader: ShaderProgram,
    background: [f32; 3],
}

impl Chessboard {
    pub fn new(gl: &Arc<glow::Context>, background: [f32; 3]) -> Result<Self, GlError> {
        Ok(Self {
            background,
            quad: render::plain_mesh(gl, &cgex_core::shapes::window_quad())?,
            shader: ShaderProgram::from_source(gl, &render::CHESSBOARD_SHADER)?,
        })
    }
}

impl super::Scene for Chessboard {
    fn render(&mut self, gl: &glow::Context) {
        render::clear(gl, self.background);
        self.shader.use_program();
        self.shader.set_uniform("u_cell_size", CELL_SIZE);
        self.quad.draw();
    }
}
