//! Joystick construction options and the YAML settings file.

use std::path::Path;

use serde::Deserialize;

use crate::direction::Direction;
use crate::error::{JoystickError, Result};
use crate::geometry::Vec2;
use crate::signal::KeyHooks;

/// Where the track lives in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMount {
    /// Top-left corner of the track's bounding square.
    pub origin: Vec2,
    /// Track width, which is twice the track radius.
    pub diameter: f32,
}

impl HostMount {
    pub fn new(origin: Vec2, diameter: f32) -> Self {
        Self { origin, diameter }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Track center in host coordinates.
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.radius())
    }

    pub fn to_local(&self, host: Vec2) -> Vec2 {
        host - self.origin
    }

    pub fn to_host(&self, local: Vec2) -> Vec2 {
        local + self.origin
    }

    /// Whether a host point is over the circular track.
    pub fn contains(&self, host: Vec2) -> bool {
        host.distance(self.center()) <= self.radius()
    }
}

/// When press signals fire while a direction is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PressMode {
    /// Press on every qualifying move, release on every move inside the
    /// threshold.
    #[default]
    EveryMove,
    /// Press only when the direction changes, release only when a
    /// direction was held.
    OnTransition,
}

/// Everything needed to build a [`Joystick`](crate::Joystick).
#[derive(Debug, Default)]
pub struct JoystickOptions {
    pub host: Option<HostMount>,
    pub hooks: KeyHooks,
    pub enable_debug: bool,
    pub press_mode: PressMode,
    /// Radius of the grab area around the handle. Defaults to half the
    /// track radius.
    pub handle_radius: Option<f32>,
}

impl JoystickOptions {
    pub fn new(host: HostMount) -> Self {
        Self {
            host: Some(host),
            ..Self::default()
        }
    }

    pub fn press_key(mut self, f: impl FnMut(Direction) + 'static) -> Self {
        self.hooks.press_key = Some(Box::new(f));
        self
    }

    pub fn release_keys(mut self, f: impl FnMut() + 'static) -> Self {
        self.hooks.release_keys = Some(Box::new(f));
        self
    }

    pub fn before_press_key(mut self, f: impl FnMut(Direction) + 'static) -> Self {
        self.hooks.before_press_key = Some(Box::new(f));
        self
    }

    pub fn after_press_key(mut self, f: impl FnMut(Direction) + 'static) -> Self {
        self.hooks.after_press_key = Some(Box::new(f));
        self
    }

    pub fn before_release_keys(mut self, f: impl FnMut() + 'static) -> Self {
        self.hooks.before_release_keys = Some(Box::new(f));
        self
    }

    pub fn after_release_keys(mut self, f: impl FnMut() + 'static) -> Self {
        self.hooks.after_release_keys = Some(Box::new(f));
        self
    }

    pub fn enable_debug(mut self, enable: bool) -> Self {
        self.enable_debug = enable;
        self
    }

    pub fn press_mode(mut self, mode: PressMode) -> Self {
        self.press_mode = mode;
        self
    }

    pub fn handle_radius(mut self, radius: f32) -> Self {
        self.handle_radius = Some(radius);
        self
    }
}

/// Data-only joystick settings loadable from YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JoystickSettings {
    pub diameter: f32,
    pub handle_radius: Option<f32>,
    pub enable_debug: bool,
    pub press_mode: PressMode,
}

impl Default for JoystickSettings {
    fn default() -> Self {
        Self {
            diameter: 200.0,
            handle_radius: None,
            enable_debug: false,
            press_mode: PressMode::EveryMove,
        }
    }
}

impl JoystickSettings {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| JoystickError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        validate_diameter(self.diameter)?;
        if let Some(radius) = self.handle_radius {
            validate_handle_radius(radius)?;
        }
        Ok(())
    }

    /// Builds options for a track whose top-left corner sits at `origin`.
    pub fn into_options(self, origin: Vec2) -> JoystickOptions {
        JoystickOptions {
            host: Some(HostMount::new(origin, self.diameter)),
            hooks: KeyHooks::default(),
            enable_debug: self.enable_debug,
            press_mode: self.press_mode,
            handle_radius: self.handle_radius,
        }
    }
}

pub(crate) fn validate_diameter(diameter: f32) -> Result<()> {
    if diameter.is_finite() && diameter > 0.0 {
        Ok(())
    } else {
        Err(JoystickError::InvalidDiameter(diameter))
    }
}

pub(crate) fn validate_handle_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(JoystickError::InvalidHandleRadius(radius))
    }
}
