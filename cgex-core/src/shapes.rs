//! Static geometry drawn by the exercises.
//!
//! Shapes are plain data: positions, optional per-vertex colors and triangle indices. Uploading
//! them to the GPU is up to the renderer.

use glam::{Vec2, Vec3};

/// A colored triangle mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub points: Vec<Vec3>,
    /// One color per point, or empty for uniformly shaded shapes.
    pub colors: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl Shape {
    fn flat(points: &[[f32; 2]], colors: &[[f32; 3]], triangles: &[[u32; 3]]) -> Self {
        Self {
            points: points
                .iter()
                .map(|p| Vec2::from_array(*p).extend(0.0))
                .collect(),
            colors: colors.iter().map(|c| Vec3::from_array(*c)).collect(),
            triangles: triangles.to_vec(),
        }
    }

    /// Flattened index list, three per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// The color for point `i`, white if the shape has fewer colors than points.
    pub fn color(&self, i: usize) -> Vec3 {
        self.colors.get(i).copied().unwrap_or(Vec3::ONE)
    }
}

/// Two triangles covering all of normalized device space.
pub fn window_quad() -> Shape {
    Shape::flat(
        &[[-1.0, -1.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]],
        &[],
        &[[0, 1, 2], [0, 2, 3]],
    )
}

const LETTER_COLORS: [[f32; 3]; 10] = [
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.5, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.5, 0.0, 0.5],
];

/// A flat-bottomed letter "B" fanned around an interior point.
pub fn letter_b_flat() -> Shape {
    Shape::flat(
        &[
            [-0.15, 0.125],
            [-0.5, -0.45],
            [-0.5, 0.75],
            [0.17, 0.75],
            [0.38, 0.575],
            [0.38, 0.35],
            [0.23, 0.125],
            [0.5, -0.125],
            [0.5, -0.45],
        ],
        &LETTER_COLORS[..9],
        &[
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 5],
            [0, 5, 6],
            [0, 6, 7],
            [0, 7, 8],
        ],
    )
}

/// An eleven point letter with a stem, fanned around its first point.
pub fn letter_stem() -> Shape {
    let mut colors = LETTER_COLORS.to_vec();
    colors.push([1.0, 1.0, 1.0]);
    Shape::flat(
        &[
            [-0.15, 0.125],
            [-0.15, -0.75],
            [-0.5, -0.75],
            [-0.5, 0.75],
            [0.17, 0.75],
            [0.38, 0.575],
            [0.38, 0.35],
            [0.23, 0.125],
            [0.5, -0.125],
            [0.5, -0.5],
            [0.25, -0.75],
        ],
        &colors,
        &[
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 5],
            [0, 5, 6],
            [0, 6, 7],
            [0, 7, 8],
            [0, 8, 9],
            [0, 9, 10],
        ],
    )
}

/// The full letter "B" in the z = 0 plane, closed back to its bottom-left corner.
pub fn letter_b() -> Shape {
    Shape::flat(
        &[
            [-0.15, 0.125],
            [-0.5, -0.75],
            [-0.5, 0.75],
            [0.17, 0.75],
            [0.38, 0.575],
            [0.38, 0.35],
            [0.23, 0.125],
            [0.5, -0.125],
            [0.5, -0.5],
            [0.25, -0.75],
        ],
        &LETTER_COLORS,
        &[
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 5],
            [0, 5, 6],
            [0, 6, 7],
            [0, 7, 8],
            [0, 8, 9],
            [0, 9, 1],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(shape: &Shape) {
        assert!(shape.colors.is_empty() || shape.colors.len() >= shape.points.len());
        for triangle in &shape.triangles {
            for &i in triangle {
                assert!((i as usize) < shape.points.len());
            }
        }
    }

    #[test]
    fn test_shapes_are_well_formed() {
        for shape in [window_quad(), letter_b_flat(), letter_stem(), letter_b()] {
            assert_well_formed(&shape);
        }
    }

    #[test]
    fn test_shape_sizes() {
        assert_eq!(letter_b_flat().points.len(), 9);
        assert_eq!(letter_b_flat().triangles.len(), 7);
        assert_eq!(letter_stem().points.len(), 11);
        assert_eq!(letter_b().points.len(), 10);
        assert_eq!(letter_b().triangles.len(), 9);
        assert_eq!(window_quad().indices().len(), 6);
    }

    #[test]
    fn test_missing_color_defaults_to_white() {
        assert_eq!(window_quad().color(0), Vec3::ONE);
        assert_eq!(letter_b().color(1), Vec3::new(1.0, 0.0, 0.0));
    }
}
