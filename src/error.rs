use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while building a joystick or loading its settings.
///
/// Once constructed, a joystick never fails at runtime.
#[derive(Debug, Error)]
pub enum JoystickError {
    #[error("joystick needs a host mount point")]
    MissingHost,

    #[error("track diameter must be a positive finite number, got {0}")]
    InvalidDiameter(f32),

    #[error("handle radius must be a positive finite number, got {0}")]
    InvalidHandleRadius(f32),

    #[error("failed to read joystick settings from {}", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse joystick settings")]
    ParseSettings(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, JoystickError>;
