/// Plain 2D vector in track-local or host coordinates.
///
/// The core deliberately does not depend on the renderer's vector type so it
/// stays usable from any host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes, e.g. the center of a square track.
    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Angle in radians measured from the positive x axis (y grows downward).
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f32) -> Vec2 {
        Vec2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, scalar: f32) -> Vec2 {
        Vec2 {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Places a raw track-local point onto the track.
///
/// `raw` is relative to the track's top-left corner, the track center is
/// `(radius, radius)`. Points within `radius` of the center come back
/// untouched; points outside are projected onto the boundary circle along the
/// same angle.
pub fn clamp_to_track(raw: Vec2, radius: f32) -> Vec2 {
    let center = Vec2::splat(radius);
    let delta = raw - center;

    if delta.length() <= radius {
        return raw;
    }

    let theta = delta.angle();
    Vec2::new(
        radius + radius * theta.cos(),
        radius + radius * theta.sin(),
    )
}
