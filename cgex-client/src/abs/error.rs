use thiserror::Error;

/// Failures reported by OpenGL object creation, shader compilation and program linking.
#[derive(Debug, Error)]
pub enum GlError {
    #[error("failed to create {object}: {message}")]
    Create {
        object: &'static str,
        message: String,
    },
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: &'static str, log: String },
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}

impl GlError {
    pub(crate) fn create(object: &'static str) -> impl FnOnce(String) -> Self {
        move |message| GlError::Create { object, message }
    }
}

/// Fatal errors while bringing up the window and GL context.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error(transparent)]
    Gl(#[from] GlError),
}
