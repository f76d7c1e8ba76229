//! Thin wrappers over SDL2 and OpenGL: the application window, shader programs and GPU meshes.

pub mod app;
pub mod error;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use error::*;
pub use mesh::*;
pub use shader::*;
