use std::cell::Cell;
use std::rc::Rc;

use joystick_keys::{
    CursorHint, Direction, Joystick, JoystickSettings, LogicalKey, PointerEvent, PointerId,
    PointerPhase, SimulatedKey, Vec2 as JoyVec2,
};
use macroquad::prelude::*;
use tracing::info;

use crate::player::Player;

// Helper to convert between our Vec2 and Macroquad's Vec2
fn to_mac_vec2(v: JoyVec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn from_mac_vec2(v: Vec2) -> JoyVec2 {
    JoyVec2::new(v.x, v.y)
}

/// Distance between a stick's track and the screen edges
const MARGIN: f32 = 40.0;

/// Hosts two joysticks: the left one drives the built-in simulated
/// keyboard, the right one reports through custom press/release handlers.
pub struct GameState {
    move_stick: Joystick,
    aim_stick: Joystick,
    /// Written by the aim stick's handlers
    aim: Rc<Cell<Option<Direction>>>,
    player: Player,
    /// Whether the mouse was over each track last frame, for enter/leave
    mouse_over: [bool; 2],
    last_key: Option<LogicalKey>,
    key_count: u32,
    time: f32,
}

impl GameState {
    pub fn new(settings: &JoystickSettings) -> joystick_keys::Result<Self> {
        let screen_width = screen_width();
        let screen_height = screen_height();
        let diameter = settings.diameter;

        let move_origin = JoyVec2::new(MARGIN, screen_height - MARGIN - diameter);
        let aim_origin = JoyVec2::new(
            screen_width - MARGIN - diameter,
            screen_height - MARGIN - diameter,
        );

        let move_stick = Joystick::new(settings.clone().into_options(move_origin))?;

        let aim = Rc::new(Cell::new(None));
        let aim_press = aim.clone();
        let aim_release = aim.clone();
        let aim_stick = Joystick::new(
            settings
                .clone()
                .into_options(aim_origin)
                .press_key(move |direction| aim_press.set(Some(direction)))
                .release_keys(move || aim_release.set(None)),
        )?;

        info!(
            "Joysticks mounted (diameter {}, press mode {:?})",
            diameter, settings.press_mode
        );

        Ok(Self {
            move_stick,
            aim_stick,
            aim,
            player: Player::new(JoyVec2::new(screen_width / 2.0, screen_height / 2.0)),
            mouse_over: [false; 2],
            last_key: None,
            key_count: 0,
            time: 0.0,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;

        self.handle_input();

        for event in self.move_stick.drain_key_events() {
            let SimulatedKey::Down(key) = event;
            self.player.on_key_down(key);
            self.last_key = Some(key);
            self.key_count += 1;
        }
        self.player.aim(self.aim.get());

        self.player.update(dt);
        self.player.wrap(screen_width(), screen_height());
    }

    fn dispatch(&mut self, event: PointerEvent) {
        // Each stick filters by its own active pointer
        self.move_stick.handle_event(&event);
        self.aim_stick.handle_event(&event);
    }

    fn handle_input(&mut self) {
        let touches = touches();

        // Handle each touch
        for touch in &touches {
            let phase = match touch.phase {
                TouchPhase::Started => PointerPhase::Down,
                TouchPhase::Moved => PointerPhase::Move,
                TouchPhase::Ended => PointerPhase::Up,
                TouchPhase::Cancelled => PointerPhase::Cancel,
                TouchPhase::Stationary => continue,
            };
            let pos = from_mac_vec2(touch.position);
            self.dispatch(PointerEvent::new(PointerId(touch.id), phase, pos));
        }

        // Fallback to mouse for desktop
        if touches.is_empty() {
            let mouse_pos = mouse_position();
            let pos = JoyVec2::new(mouse_pos.0, mouse_pos.1);

            self.update_hover(pos);

            let phase = if is_mouse_button_pressed(MouseButton::Left) {
                Some(PointerPhase::Down)
            } else if is_mouse_button_down(MouseButton::Left) {
                Some(PointerPhase::Move)
            } else if is_mouse_button_released(MouseButton::Left) {
                Some(PointerPhase::Up)
            } else {
                None
            };
            if let Some(phase) = phase {
                self.dispatch(PointerEvent::new(PointerId::MOUSE, phase, pos));
            }
        }
    }

    /// Turns mouse position changes into enter/leave events per track.
    fn update_hover(&mut self, pos: JoyVec2) {
        let sticks = [&mut self.move_stick, &mut self.aim_stick];
        for (stick, was_over) in sticks.into_iter().zip(self.mouse_over.iter_mut()) {
            let over = stick.mount().contains(pos);
            if over != *was_over {
                let phase = if over { PointerPhase::Enter } else { PointerPhase::Leave };
                stick.handle_event(&PointerEvent::new(PointerId::MOUSE, phase, pos));
                *was_over = over;
            }
        }
    }

    pub fn draw(&self) {
        clear_background(Color::from_rgba(5, 5, 15, 255));

        self.draw_player();

        self.draw_joystick(&self.move_stick, Color::from_rgba(100, 200, 255, 255));
        self.draw_joystick(&self.aim_stick, Color::from_rgba(255, 100, 100, 255));

        self.draw_ui();
    }

    fn draw_joystick(&self, joystick: &Joystick, color: Color) {
        let mount = joystick.mount();
        let center = to_mac_vec2(mount.center());
        let handle = to_mac_vec2(mount.to_host(joystick.handle_position()));

        let (ring_alpha, handle_alpha) = match joystick.cursor_hint() {
            CursorHint::Default => (0.25, 0.5),
            CursorHint::Grab => (0.45, 0.75),
            CursorHint::Grabbing => (0.6, 1.0),
        };

        // Track
        draw_circle(center.x, center.y, joystick.radius(), Color { a: 0.08, ..color });
        draw_circle_lines(center.x, center.y, joystick.radius(), 2.0, Color { a: ring_alpha, ..color });

        // Threshold ring
        let threshold = joystick.radius() * joystick_keys::DIRECTION_THRESHOLD;
        draw_circle_lines(center.x, center.y, threshold, 1.0, Color { a: 0.2, ..color });

        // Handle
        draw_circle(handle.x, handle.y, joystick.handle_radius(), Color { a: handle_alpha * 0.6, ..color });
        draw_circle(
            handle.x,
            handle.y,
            joystick.handle_radius() * 0.75,
            Color::from_rgba(255, 255, 255, (handle_alpha * 100.0) as u8),
        );

        if let Some(direction) = joystick.current_key() {
            let label = direction.as_str().to_uppercase();
            let width = measure_text(&label, None, 24, 1.0).width;
            draw_text(
                &label,
                center.x - width / 2.0,
                center.y - joystick.radius() - 12.0,
                24.0,
                color,
            );
        }
    }

    fn draw_player(&self) {
        let pos = to_mac_vec2(self.player.position);
        let rotation = self.player.rotation;
        let size = 30.0;

        let front = Vec2::new(
            pos.x + rotation.cos() * size,
            pos.y + rotation.sin() * size,
        );
        let left_wing = Vec2::new(
            pos.x + (rotation + 2.3).cos() * size * 0.7,
            pos.y + (rotation + 2.3).sin() * size * 0.7,
        );
        let right_wing = Vec2::new(
            pos.x + (rotation - 2.3).cos() * size * 0.7,
            pos.y + (rotation - 2.3).sin() * size * 0.7,
        );

        // Outer glow
        draw_circle(pos.x, pos.y, size + 10.0, Color::from_rgba(120, 220, 255, 50));

        draw_triangle(front, left_wing, right_wing, Color::from_rgba(140, 210, 255, 255));
        draw_triangle_lines(front, left_wing, right_wing, 2.0, Color::from_rgba(200, 240, 255, 255));

        // Nose tip
        draw_circle(front.x, front.y, 3.0, WHITE);
    }

    fn draw_ui(&self) {
        let font_size = 24.0;

        let key_text = match self.last_key {
            Some(key) => format!("KEY DOWN: {} ({}) x{}", key.name(), key.key_code(), self.key_count),
            None => "KEY DOWN: -".to_owned(),
        };
        draw_text(&key_text, 30.0, 40.0, font_size, Color::from_rgba(100, 255, 150, 255));

        let aim_text = match self.aim.get() {
            Some(direction) => format!("AIM: {direction}"),
            None => "AIM: released".to_owned(),
        };
        let aim_width = measure_text(&aim_text, None, font_size as u16, 1.0).width;
        draw_text(
            &aim_text,
            screen_width() - aim_width - 30.0,
            40.0,
            font_size,
            Color::from_rgba(255, 150, 150, 255),
        );

        // Instructions hint
        if self.time < 5.0 {
            let hint = "Drag the left handle to press arrow keys, the right one to aim";
            let hint_width = measure_text(hint, None, 20, 1.0).width;
            let alpha = ((self.time * 2.0).sin() * 127.0 + 128.0) as u8;

            draw_text(
                hint,
                (screen_width() - hint_width) / 2.0,
                80.0,
                20.0,
                Color::from_rgba(255, 200, 100, alpha),
            );
        }
    }
}
