use crate::config::{validate_diameter, validate_handle_radius, HostMount, JoystickOptions, PressMode};
use crate::direction::{map_direction, Direction};
use crate::error::{JoystickError, Result};
use crate::geometry::{clamp_to_track, Vec2};
use crate::keyboard::SimulatedKey;
use crate::pointer::{CursorHint, PointerEvent, PointerId, PointerPhase};
use crate::signal::SignalEmitter;

/// 🕹️ On-screen joystick that turns handle drags into key signals
///
/// Coordinates passed to the `on_pointer_*` handlers are track-local: the
/// track's top-left corner is the origin and its center is
/// `(radius, radius)`. [`Joystick::handle_event`] takes host coordinates and
/// converts them through the mount.
#[derive(Debug)]
pub struct Joystick {
    mount: HostMount,
    /// Max handle reach, fixed for the joystick's lifetime
    radius: f32,
    handle_radius: f32,
    dragging: bool,
    /// Handle position in track-local coordinates, never further than
    /// `radius` from the center
    handle: Vec2,
    /// Unclamped displacement divided by `radius`
    direction: Vec2,
    current_key: Option<Direction>,
    /// Pointer that owns the current drag, if it started through `handle_event`
    active_pointer: Option<PointerId>,
    hovered: bool,
    press_mode: PressMode,
    signals: SignalEmitter,
}

impl Joystick {
    pub fn new(options: JoystickOptions) -> Result<Self> {
        let mount = options.host.ok_or(JoystickError::MissingHost)?;
        validate_diameter(mount.diameter)?;
        let radius = mount.radius();

        let handle_radius = options.handle_radius.unwrap_or(radius / 2.0);
        validate_handle_radius(handle_radius)?;

        Ok(Self {
            mount,
            radius,
            handle_radius,
            dragging: false,
            handle: Vec2::splat(radius),
            direction: Vec2::ZERO,
            current_key: None,
            active_pointer: None,
            hovered: false,
            press_mode: options.press_mode,
            signals: SignalEmitter::new(options.hooks, options.enable_debug),
        })
    }

    /// 🖱️ Pointer down on the handle - start tracking moves
    pub fn on_pointer_down(&mut self) {
        self.dragging = true;
    }

    /// 🖱️ Pointer move - clamp the handle to the track and emit a key signal
    pub fn on_pointer_move(&mut self, raw_x: f32, raw_y: f32) {
        if !self.dragging {
            return;
        }

        let raw = Vec2::new(raw_x, raw_y);
        let center = self.center();

        self.handle = clamp_to_track(raw, self.radius);
        // Direction uses the raw point, so it can exceed 1.0 outside the track.
        self.direction = (raw - center) / self.radius;

        self.apply_direction(map_direction(self.direction));
    }

    /// 🖱️ Pointer up - snap back to center and release
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
        self.active_pointer = None;
        self.handle = self.center();
        self.direction = Vec2::ZERO;

        let held = self.current_key.take();
        if self.press_mode == PressMode::EveryMove || held.is_some() {
            self.signals.release();
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Leaving the track only releases when no drag is in progress; a held
    /// handle keeps following the pointer outside the track.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        if !self.dragging {
            self.on_pointer_up();
        }
    }

    /// Routes a host-space pointer event to this joystick.
    ///
    /// A drag only starts on the handle and only when no other pointer owns
    /// it. Move/up/cancel events from any other pointer are ignored, so
    /// several joysticks can share one event stream. Returns whether this
    /// joystick consumed the event.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let local = self.mount.to_local(event.position);
        let owns = self.active_pointer == Some(event.id);

        match event.phase {
            PointerPhase::Down => {
                if self.active_pointer.is_some() || !self.hits_handle(local) {
                    return false;
                }
                self.active_pointer = Some(event.id);
                self.on_pointer_down();
                true
            }
            PointerPhase::Move if owns => {
                self.on_pointer_move(local.x, local.y);
                true
            }
            PointerPhase::Up | PointerPhase::Cancel if owns => {
                self.on_pointer_up();
                true
            }
            PointerPhase::Enter => {
                self.on_pointer_enter();
                true
            }
            PointerPhase::Leave => {
                self.on_pointer_leave();
                true
            }
            _ => false,
        }
    }

    /// Whether a track-local point lies on the handle.
    pub fn hits_handle(&self, local: Vec2) -> bool {
        local.distance(self.handle_position()) <= self.handle_radius
    }

    pub fn mount(&self) -> &HostMount {
        &self.mount
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn handle_radius(&self) -> f32 {
        self.handle_radius
    }

    /// Track center in track-local coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    /// Handle position in track-local coordinates.
    pub fn handle_position(&self) -> Vec2 {
        self.handle
    }

    /// Handle displacement from the track center.
    pub fn center_offset(&self) -> Vec2 {
        self.handle - self.center()
    }

    /// 🎮 Normalized, unclamped displacement from the last move
    pub fn direction_vector(&self) -> Vec2 {
        self.direction
    }

    pub fn current_key(&self) -> Option<Direction> {
        self.current_key
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    pub fn press_mode(&self) -> PressMode {
        self.press_mode
    }

    pub fn cursor_hint(&self) -> CursorHint {
        if self.dragging {
            CursorHint::Grabbing
        } else if self.hovered {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }

    /// Key-down events produced by the built-in fallback since the last call.
    pub fn drain_key_events(&mut self) -> Vec<SimulatedKey> {
        self.signals.drain_key_events()
    }

    fn apply_direction(&mut self, next: Option<Direction>) {
        match self.press_mode {
            PressMode::EveryMove => match next {
                Some(direction) => self.signals.press(direction),
                None => self.signals.release(),
            },
            PressMode::OnTransition => {
                if next == self.current_key {
                    return;
                }
                if self.current_key.is_some() {
                    self.signals.release();
                }
                if let Some(direction) = next {
                    self.signals.press(direction);
                }
            }
        }
        self.current_key = next;
    }
}
