//! Reading triangle meshes from ASCII Wavefront OBJ files.
//!
//! Only vertex positions (`v`) and faces (`f`) are read. Texture coordinates and normals in face
//! tokens are accepted and skipped, polygons with more than three corners are split into a
//! triangle fan, and every other record is ignored.

use std::{path::Path, str::FromStr};

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to read obj file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: vertex index {index} out of range (have {count} vertices)")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },
}

/// Positions and triangle indices of a mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjMesh {
    pub points: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl ObjMesh {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ObjError> {
        let source = std::fs::read_to_string(path)?;
        source.parse()
    }

    /// Flattened index list, three per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl FromStr for ObjMesh {
    type Err = ObjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mesh = ObjMesh::default();

        for (number, raw) in s.lines().enumerate() {
            let line = number + 1;
            let content = raw.split('#').next().unwrap_or_default();
            let mut tokens = content.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let mut coords = [0.0f32; 3];
                    for coord in &mut coords {
                        let token = tokens.next().ok_or_else(|| ObjError::Parse {
                            line,
                            message: "vertex needs three coordinates".to_string(),
                        })?;
                        *coord = token.parse().map_err(|_| ObjError::Parse {
                            line,
                            message: format!("invalid coordinate '{token}'"),
                        })?;
                    }
                    mesh.points.push(Vec3::from_array(coords));
                }
                Some("f") => {
                    let corners = tokens
                        .map(|token| resolve_index(token, mesh.points.len(), line))
                        .collect::<Result<Vec<u32>, ObjError>>()?;
                    if corners.len() < 3 {
                        return Err(ObjError::Parse {
                            line,
                            message: format!("face needs at least 3 vertices, got {}", corners.len()),
                        });
                    }
                    for i in 1..corners.len() - 1 {
                        mesh.triangles.push([corners[0], corners[i], corners[i + 1]]);
                    }
                }
                _ => {}
            }
        }

        Ok(mesh)
    }
}

/// Turns a face token (`7`, `7/2`, `7//3`, `-1/2/3`) into a zero-based vertex index.
fn resolve_index(token: &str, count: usize, line: usize) -> Result<u32, ObjError> {
    let position = token.split('/').next().unwrap_or_default();
    let index: i64 = position.parse().map_err(|_| ObjError::Parse {
        line,
        message: format!("invalid face index '{token}'"),
    })?;

    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i - 1),
        i => Some(count as i64 + i),
    };

    match resolved {
        Some(i) if (0..count as i64).contains(&i) => Ok(i as u32),
        _ => Err(ObjError::IndexOutOfRange { line, index, count }),
    }
}

/// Centers `points` on their bounding box and scales them uniformly so the largest half-extent
/// becomes `scale`.
pub fn normalize(points: &mut [Vec3], scale: f32) {
    let Some(first) = points.first() else {
        return;
    };
    let (min, max) = points
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

    let center = (min + max) * 0.5;
    let half_extent = ((max - min) * 0.5).max_element();
    let factor = if half_extent > 0.0 {
        scale / half_extent
    } else {
        1.0
    };

    for p in points.iter_mut() {
        *p = (*p - center) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
# a unit quad
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vn 0 0 1
f 1/1/1 2/1/1 3/1/1 4/1/1
";

    #[test]
    fn test_parse_quad_as_fan() {
        let mesh: ObjMesh = QUAD.parse().unwrap();
        assert_eq!(mesh.points.len(), 4);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.indices(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_negative_indices_are_relative() {
        let mesh: ObjMesh = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2//1 -1\n".parse().unwrap();
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let err = "v 0 0 0\nf 1 2 3\n".parse::<ObjMesh>().unwrap_err();
        assert!(matches!(
            err,
            ObjError::IndexOutOfRange {
                line: 2,
                index: 2,
                count: 1
            }
        ));

        let err = "v 0 0 0\nf 0 1 1\n".parse::<ObjMesh>().unwrap_err();
        assert!(matches!(err, ObjError::IndexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_malformed_vertex_reports_line() {
        let err = "v 0 0 0\nv 1 x 0\n".parse::<ObjMesh>().unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: invalid coordinate 'x'");
    }

    #[test]
    fn test_degenerate_face_is_rejected() {
        let err = "v 0 0 0\nv 1 0 0\nf 1 2\n".parse::<ObjMesh>().unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_empty_source_gives_empty_mesh() {
        let mesh: ObjMesh = "".parse().unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.points.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ObjMesh::load("/definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, ObjError::Io(_)));
    }

    #[test]
    fn test_normalize_centers_and_scales() {
        let mut points = vec![
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(6.0, 4.0, 2.0),
            Vec3::new(4.0, 3.0, 3.0),
        ];
        normalize(&mut points, 0.8);
        assert!(points[0].abs_diff_eq(Vec3::new(-0.8, -0.4, -0.2), 1e-5));
        assert!(points[1].abs_diff_eq(Vec3::new(0.8, 0.4, -0.2), 1e-5));
        assert!(points[2].abs_diff_eq(Vec3::new(0.0, 0.0, 0.2), 1e-5));
    }

    #[test]
    fn test_normalize_single_point_and_empty() {
        let mut points = vec![Vec3::new(3.0, 3.0, 3.0)];
        normalize(&mut points, 0.8);
        assert_eq!(points[0], Vec3::ZERO);

        let mut none: Vec<Vec3> = Vec::new();
        normalize(&mut none, 0.8);
        assert!(none.is_empty());
    }
}
