//! Clearing the window, and nothing else.

use crate::render;

pub struct ClearScreen {
    pub background: [f32; 3],
}

impl super::Scene for ClearScreen {
    fn render(&mut self, gl: &glow::Context) {
        render::clear(gl, self.background);
    }
}
