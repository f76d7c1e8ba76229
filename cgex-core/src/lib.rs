//! The core of the cgex exercises. Everything here is independent of the window system and of
//! OpenGL: the mouse driven transform controller, the orbit camera, OBJ loading and the static
//! shapes the exercises draw.

pub mod camera;
pub mod chessboard;
pub mod controller;
pub mod obj;
pub mod shapes;
pub mod spin;

pub use camera::Camera;
pub use controller::{
    ButtonTracking, ControllerSpeeds, DragMode, DragState, PointerQuery, TransformController,
};
pub use obj::{ObjError, ObjMesh};
pub use shapes::Shape;
pub use spin::Spin;
