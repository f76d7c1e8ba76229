//! Wireframe viewer for OBJ meshes.
//!
//! The mesh is normalized to fit comfortably in view and drawn as one line loop per triangle.
//! A mesh that fails to load is reported and replaced with an empty one, so the window still
//! opens.

use std::{path::Path, sync::Arc};

use cgex_core::{Camera, ObjMesh, PointerQuery, TransformController, obj};
use glam::{Vec2, Vec3, Vec4};
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::{GlError, Mesh, ShaderProgram},
    input, render,
    settings::Settings,
};

const FIT_SCALE: f32 = 0.8;

pub struct MeshViewer {
    mesh: Mesh,
    shader: ShaderProgram,
    camera: Camera,
    color: Vec4,
    background: [f32; 3],
}

/// Loads and normalizes the mesh at `path`, or returns an empty mesh after logging why not.
fn load_or_empty(path: Option<&Path>) -> ObjMesh {
    let Some(path) = path else {
        log::warn!("no OBJ file given; showing an empty mesh");
        return ObjMesh::default();
    };
    match ObjMesh::load(path) {
        Ok(mut mesh) => {
            obj::normalize(&mut mesh.points, FIT_SCALE);
            log::info!(
                "{}: {} vertices, {} triangles",
                path.display(),
                mesh.points.len(),
                mesh.triangles.len()
            );
            mesh
        }
        Err(e) => {
            log::warn!("failed to load {}: {e}", path.display());
            ObjMesh::default()
        }
    }
}

impl MeshViewer {
    pub fn new(
        gl: &Arc<glow::Context>,
        settings: &Settings,
        (width, height): (u32, u32),
        background: [f32; 3],
    ) -> Result<Self, GlError> {
        let obj = load_or_empty(settings.obj_path.as_deref());
        let mut camera = Camera::with_controller(
            1.0,
            Vec2::ZERO,
            Vec3::new(0.0, 0.0, -5.0),
            TransformController::new(settings.speeds, settings.button_tracking),
        );
        camera.resize(width, height);

        Ok(Self {
            background,
            mesh: render::wireframe_mesh(gl, &obj)?,
            shader: ShaderProgram::from_source(gl, &render::MESH_SHADER)?,
            camera,
            color: Vec4::new(0.7, 0.7, 0.3, 1.0),
        })
    }
}

impl super::Scene for MeshViewer {
    fn handle_event(&mut self, event: &Event, query: PointerQuery) {
        if let Event::Window {
            win_event: WindowEvent::Resized(width, height),
            ..
        } = *event
        {
            self.camera.resize(width.max(0) as u32, height.max(0) as u32);
        }
        input::dispatch(&mut self.camera, event, query);
    }

    fn render(&mut self, gl: &glow::Context) {
        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }
        render::clear(gl, self.background);
        self.shader.use_program();
        self.shader.set_uniform("u_view", self.camera.full_view());
        self.shader.set_uniform("u_color", self.color);
        self.mesh.draw_groups(3);
        unsafe {
            gl.disable(glow::DEPTH_TEST);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_gives_empty_mesh() {
        assert!(load_or_empty(None).is_empty());
        assert!(load_or_empty(Some(Path::new("/definitely/not/here.obj"))).is_empty());
    }

    #[test]
    fn test_loaded_mesh_is_normalized() {
        let path = std::env::temp_dir().join(format!("cgex-{}-tri.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 10 0 0\nv 0 10 0\nf 1 2 3\n").unwrap();
        let mesh = load_or_empty(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(mesh.triangles.len(), 1);
        let max = mesh
            .points
            .iter()
            .map(|p| p.abs().max_element())
            .fold(0.0f32, f32::max);
        assert!((max - FIT_SCALE).abs() < 1e-5);
    }
}
