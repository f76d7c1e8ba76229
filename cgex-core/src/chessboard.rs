//! Chessboard coloring rule.
//!
//! The chessboard exercise colors pixels in its fragment shader. This is the same rule on the
//! CPU, used to check the shader's parameters.

use glam::{Vec2, Vec4};

/// Cell edge length in pixels. The cell count follows the window size.
pub const CELL_SIZE: f32 = 50.0;

fn odd(n: f32) -> bool {
    (n as i32) % 2 == 1
}

/// Whether the pixel at `frag_coord` (bottom-left origin, as `gl_FragCoord`) is on a dark cell.
pub fn is_dark(frag_coord: Vec2, cell_size: f32) -> bool {
    odd(frag_coord.x / cell_size) == odd(frag_coord.y / cell_size)
}

pub fn square_color(frag_coord: Vec2, cell_size: f32) -> Vec4 {
    if is_dark(frag_coord, cell_size) {
        Vec4::new(0.0, 0.0, 0.0, 1.0)
    } else {
        Vec4::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_cell_is_dark() {
        assert!(is_dark(Vec2::new(0.5, 0.5), CELL_SIZE));
        assert!(is_dark(Vec2::new(49.5, 49.5), CELL_SIZE));
    }

    #[test]
    fn test_neighbours_alternate() {
        assert!(!is_dark(Vec2::new(50.5, 0.5), CELL_SIZE));
        assert!(!is_dark(Vec2::new(0.5, 50.5), CELL_SIZE));
        assert!(is_dark(Vec2::new(50.5, 50.5), CELL_SIZE));
        assert_eq!(square_color(Vec2::new(120.0, 10.0), CELL_SIZE), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(square_color(Vec2::new(170.0, 10.0), CELL_SIZE), Vec4::ONE);
    }
}
