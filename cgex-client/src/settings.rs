//! User settings.
//!
//! Settings live in `settings.json` inside the platform config directory (for example
//! `~/.config/cgex/settings.json` on Linux). Missing fields take their defaults and a missing
//! file means all defaults. Command line flags override whatever the file says.

use std::path::{Path, PathBuf};

use cgex_core::{ButtonTracking, ControllerSpeeds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scenes::Exercise;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    /// Exercise shown at startup.
    pub exercise: Exercise,
    pub speeds: ControllerSpeeds,
    pub button_tracking: ButtonTracking,
    pub log_level: String,
    /// OBJ file for the mesh viewer.
    pub obj_path: Option<PathBuf>,
    /// RGB the window is cleared to. Unset, every exercise uses its own.
    pub clear_color: Option<[f32; 3]>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            exercise: Exercise::Drag,
            speeds: ControllerSpeeds::default(),
            button_tracking: ButtonTracking::Latched,
            log_level: "info".to_string(),
            obj_path: None,
            clear_color: None,
        }
    }
}

impl Settings {
    /// `<config dir>/cgex/settings.json`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cgex").join("settings.json"))
    }

    /// Reads settings from `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cgex-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/definitely/not/here/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_file(
            "partial.json",
            r#"{ "width": 400, "exercise": "mesh", "speeds": { "rotation": 0.5 },
                "button_tracking": "polled", "obj_path": "head.obj" }"#,
        );
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.width, 400);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.exercise, Exercise::Mesh);
        assert_eq!(settings.speeds.rotation, 0.5);
        assert_eq!(settings.speeds.translation, 0.01);
        assert_eq!(settings.button_tracking, ButtonTracking::Polled);
        assert_eq!(settings.obj_path, Some(PathBuf::from("head.obj")));
        assert_eq!(settings.clear_color, None);
    }

    #[test]
    fn test_clear_color_overrides_every_exercise() {
        let path = temp_file("clear.json", r#"{ "clear_color": [0.1, 0.2, 0.3] }"#);
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.clear_color, Some([0.1, 0.2, 0.3]));
        for exercise in Exercise::ALL {
            assert_eq!(exercise.background(&settings), [0.1, 0.2, 0.3]);
        }

        let defaults = Settings::default();
        assert_eq!(Exercise::Clear.background(&defaults), [0.2, 0.3, 0.3]);
        assert_eq!(Exercise::Solid.background(&defaults), [0.0, 0.0, 0.0]);
        assert_eq!(Exercise::Mesh.background(&defaults), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_file("broken.json", "{ width: ");
        let result = Settings::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(SettingsError::Json { .. })));
    }
}
