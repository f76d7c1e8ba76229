use std::{path::PathBuf, process::ExitCode};

use cgex_core::ButtonTracking;
use clap::Parser;
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::*,
    scenes::{Exercise, SceneManager, SceneSwitch},
    settings::Settings,
};

mod abs;
mod input;
mod logging;
mod render;
mod scenes;
mod settings;

/// Interactive OpenGL exercises. Keys 1-7 switch exercise, Escape quits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Exercise to start with.
    #[arg(value_enum)]
    exercise: Option<Exercise>,

    /// OBJ file shown by the mesh viewer.
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Window width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Re-query the mouse button on every move instead of tracking press and release.
    #[arg(long)]
    polled_button: bool,

    /// Settings file to read instead of the one in the config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply(self, settings: &mut Settings) {
        if let Some(exercise) = self.exercise {
            settings.exercise = exercise;
        }
        if let Some(obj) = self.obj {
            settings.obj_path = Some(obj);
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(level) = self.log_level {
            settings.log_level = level;
        }
        if self.polled_button {
            settings.button_tracking = ButtonTracking::Polled;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (mut settings, settings_error) = match cli.config.clone().or_else(Settings::default_path)
    {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        None => (Settings::default(), None),
    };
    cli.apply(&mut settings);

    if let Err(e) = logging::init_logging(logging::parse_level(&settings.log_level)) {
        eprintln!("failed to initialize logging: {e}");
    }
    if let Some(e) = settings_error {
        log::warn!("{e}; using default settings");
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn window_title(exercise: Exercise) -> String {
    format!("cgex - {}", exercise.title())
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let mut app = App::new(
        &window_title(settings.exercise),
        settings.width,
        settings.height,
    )?;
    log::info!("GL version: {}", app.gl_version());

    let scene = settings.exercise.build(&app.gl, settings, app.size())?;
    let mut scene_manager = SceneManager::new(settings.exercise, scene);

    let mut pointer = input::PointerTracker::from_event_pump(&app.event_pump);
    let mut last_frame_time = std::time::Instant::now();

    'running: loop {
        let now = std::time::Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        let events: Vec<Event> = app.event_pump.poll_iter().collect();
        for event in &events {
            match *event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::Resized(..),
                    ..
                } => {
                    let (width, height) = app.size();
                    unsafe {
                        app.gl.viewport(0, 0, width as i32, height as i32);
                    }
                }
                _ => {}
            }

            pointer.observe(event);
            match scene_manager.handle_event(event, pointer.query()) {
                SceneSwitch::None => {}
                SceneSwitch::Quit => break 'running,
                SceneSwitch::Replace(exercise) => {
                    match exercise.build(&app.gl, settings, app.size()) {
                        Ok(scene) => {
                            scene_manager.replace(exercise, scene);
                            if let Err(e) = app.window.set_title(&window_title(exercise)) {
                                log::warn!("failed to set window title: {e}");
                            }
                        }
                        Err(e) => log::error!("failed to start {exercise:?}: {e}"),
                    }
                }
            }
        }

        scene_manager.update(delta_time);
        scene_manager.render(&app.gl);
        app.window.gl_swap_window();
    }

    log::debug!("leaving {:?}", scene_manager.exercise());
    Ok(())
}
