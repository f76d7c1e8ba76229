//! Module for anything related to rendering.
//!
//! This module contains the vertex layouts the exercises upload, helpers for turning core
//! shapes into GPU meshes and all used shaders.

use std::sync::Arc;

use cgex_core::{ObjMesh, Shape};
use glam::Vec3;
use glow::HasContext;

use crate::abs::{GlError, Mesh, ShaderSource, Vertex};

pub const SOLID_SHADER: ShaderSource = ShaderSource {
    vertex: include_str!("shaders/solid/vert.glsl"),
    fragment: include_str!("shaders/solid/frag.glsl"),
};

pub const CHESSBOARD_SHADER: ShaderSource = ShaderSource {
    vertex: include_str!("shaders/chessboard/vert.glsl"),
    fragment: include_str!("shaders/chessboard/frag.glsl"),
};

pub const COLORED_SHADER: ShaderSource = ShaderSource {
    vertex: include_str!("shaders/colored/vert.glsl"),
    fragment: include_str!("shaders/colored/frag.glsl"),
};

pub const MESH_SHADER: ShaderSource = ShaderSource {
    vertex: include_str!("shaders/mesh/vert.glsl"),
    fragment: include_str!("shaders/mesh/frag.glsl"),
};

/// A bare position, for uniformly shaded geometry.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<PositionVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<ColorVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                stride,
                std::mem::size_of::<Vec3>() as i32,
            );
        }
    }
}

/// Interleaves a shape's positions and colors.
pub fn color_vertices(shape: &Shape) -> Vec<ColorVertex> {
    shape
        .points
        .iter()
        .enumerate()
        .map(|(i, &position)| ColorVertex {
            position,
            color: shape.color(i),
        })
        .collect()
}

/// Uploads a shape with per-vertex colors as a triangle mesh.
pub fn colored_mesh(gl: &Arc<glow::Context>, shape: &Shape) -> Result<Mesh, GlError> {
    Mesh::new(gl, &color_vertices(shape), &shape.indices(), glow::TRIANGLES)
}

/// Uploads only the positions of a shape as a triangle mesh.
pub fn plain_mesh(gl: &Arc<glow::Context>, shape: &Shape) -> Result<Mesh, GlError> {
    let vertices: Vec<PositionVertex> = shape
        .points
        .iter()
        .map(|&position| PositionVertex { position })
        .collect();
    Mesh::new(gl, &vertices, &shape.indices(), glow::TRIANGLES)
}

/// Uploads an OBJ mesh for drawing one line loop per triangle.
pub fn wireframe_mesh(gl: &Arc<glow::Context>, obj: &ObjMesh) -> Result<Mesh, GlError> {
    let vertices: Vec<PositionVertex> = obj
        .points
        .iter()
        .map(|&position| PositionVertex { position })
        .collect();
    Mesh::new(gl, &vertices, &obj.indices(), glow::LINE_LOOP)
}

/// Clears color and depth to `color`.
pub fn clear(gl: &glow::Context, color: [f32; 3]) {
    unsafe {
        gl.clear_color(color[0], color[1], color[2], 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layouts_are_packed() {
        assert_eq!(std::mem::size_of::<PositionVertex>(), 12);
        assert_eq!(std::mem::size_of::<ColorVertex>(), 24);
    }

    #[test]
    fn test_color_vertices_follow_shape() {
        let shape = cgex_core::shapes::letter_b();
        let vertices = color_vertices(&shape);
        assert_eq!(vertices.len(), 10);
        assert_eq!(vertices[1].position, shape.points[1]);
        assert_eq!(vertices[1].color, Vec3::new(1.0, 0.0, 0.0));

        let quad = color_vertices(&cgex_core::shapes::window_quad());
        assert!(quad.iter().all(|v| v.color == Vec3::ONE));
    }
}
