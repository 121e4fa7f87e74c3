use std::fmt;

use crate::geometry::Vec2;

/// Normalized displacement a stick must exceed (strictly) on an axis before
/// that axis produces a direction.
pub const DIRECTION_THRESHOLD: f32 = 0.2;

/// Discrete output of the joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a normalized displacement to at most one direction.
///
/// Checks run in a fixed order and the first hit wins: up, down, left, right.
/// Vertical therefore beats horizontal on diagonals. Components may exceed
/// 1.0 when the pointer is outside the track; that is fine here.
pub fn map_direction(normalized: Vec2) -> Option<Direction> {
    if normalized.y < -DIRECTION_THRESHOLD {
        Some(Direction::Up)
    } else if normalized.y > DIRECTION_THRESHOLD {
        Some(Direction::Down)
    } else if normalized.x < -DIRECTION_THRESHOLD {
        Some(Direction::Left)
    } else if normalized.x > DIRECTION_THRESHOLD {
        Some(Direction::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_wins_over_horizontal() {
        assert_eq!(map_direction(Vec2::new(0.5, -0.5)), Some(Direction::Up));
        assert_eq!(map_direction(Vec2::new(-0.9, 0.3)), Some(Direction::Down));
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(map_direction(Vec2::new(0.0, -0.2)), None);
        assert_eq!(map_direction(Vec2::new(0.0, -0.21)), Some(Direction::Up));
        assert_eq!(map_direction(Vec2::new(0.2, 0.2)), None);
        assert_eq!(map_direction(Vec2::new(-0.2, 0.0)), None);
        assert_eq!(map_direction(Vec2::new(0.21, 0.0)), Some(Direction::Right));
    }

    #[test]
    fn centered_stick_has_no_direction() {
        assert_eq!(map_direction(Vec2::ZERO), None);
    }

    #[test]
    fn values_beyond_unit_range_still_map() {
        assert_eq!(map_direction(Vec2::new(2.0, 0.0)), Some(Direction::Right));
        assert_eq!(map_direction(Vec2::new(-3.5, 0.1)), Some(Direction::Left));
    }

    #[test]
    fn display_uses_lowercase_names() {
        let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["up", "down", "left", "right"]);
    }
}
