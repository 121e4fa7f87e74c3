use crate::geometry::Vec2;

/// Identifies one finger or the mouse across a down/move/up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Id the demo host uses for the mouse, which has no touch id.
    pub const MOUSE: PointerId = PointerId(u64::MAX);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
    /// Pointer entered the track area.
    Enter,
    /// Pointer left the track area.
    Leave,
}

/// Pointer input in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(id: PointerId, phase: PointerPhase, position: Vec2) -> Self {
        Self { id, phase, position }
    }
}

/// Cosmetic cursor suggestion for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    /// Hovering the track, the handle can be picked up.
    Grab,
    /// Handle is being dragged.
    Grabbing,
}
