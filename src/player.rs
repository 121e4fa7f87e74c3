use joystick_keys::{Direction, LogicalKey, Vec2};

/// Speed gained from one simulated key-down
const KEY_IMPULSE: f32 = 40.0;

#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32, // in radians
}

impl Player {
    pub fn new(start_pos: Vec2) -> Self {
        Self {
            position: start_pos,
            velocity: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// ⌨️ React to a simulated arrow key
    pub fn on_key_down(&mut self, key: LogicalKey) {
        let push = match key {
            LogicalKey::ArrowUp => Vec2::new(0.0, -1.0),
            LogicalKey::ArrowDown => Vec2::new(0.0, 1.0),
            LogicalKey::ArrowLeft => Vec2::new(-1.0, 0.0),
            LogicalKey::ArrowRight => Vec2::new(1.0, 0.0),
        };
        self.velocity += push * KEY_IMPULSE;
    }

    /// 🎯 Face the held aim direction; keep the last heading when released
    pub fn aim(&mut self, direction: Option<Direction>) {
        self.rotation = match direction {
            Some(Direction::Right) => 0.0,
            Some(Direction::Down) => std::f32::consts::FRAC_PI_2,
            Some(Direction::Left) => std::f32::consts::PI,
            Some(Direction::Up) => -std::f32::consts::FRAC_PI_2,
            None => self.rotation,
        };
    }

    pub fn update(&mut self, dt: f32) {
        // Friction, so the marker drifts to a stop without a key-up
        self.velocity = self.velocity * 0.95;
        self.position += self.velocity * dt;
    }

    /// Wrap around the screen edges
    pub fn wrap(&mut self, width: f32, height: f32) {
        if self.position.x < 0.0 {
            self.position.x = width;
        }
        if self.position.x > width {
            self.position.x = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = height;
        }
        if self.position.y > height {
            self.position.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_to_the_opposite_edge() {
        let mut player = Player::new(Vec2::new(-1.0, 730.0));
        player.wrap(1280.0, 720.0);
        assert_eq!(player.position, Vec2::new(1280.0, 0.0));

        let mut player = Player::new(Vec2::new(1281.0, -2.0));
        player.wrap(1280.0, 720.0);
        assert_eq!(player.position, Vec2::new(0.0, 720.0));
    }

    #[test]
    fn key_down_pushes_and_aim_keeps_last_heading() {
        let mut player = Player::new(Vec2::ZERO);
        player.on_key_down(LogicalKey::ArrowLeft);
        assert_eq!(player.velocity, Vec2::new(-KEY_IMPULSE, 0.0));

        player.aim(Some(Direction::Left));
        player.aim(None);
        assert_eq!(player.rotation, std::f32::consts::PI);
    }
}
