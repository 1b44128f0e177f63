//! Platform layer
//!
//! Turns macroquad's keyboard/mouse state into the plain input structs the
//! simulation and menus consume, and paces frames.

use std::time::{Duration, Instant};

use glam::Vec2;
use macroquad::prelude::{
    KeyCode, MouseButton, get_char_pressed, is_key_down, is_key_pressed, is_mouse_button_pressed,
    is_quit_requested, mouse_position,
};

use crate::sim::{PaddleInput, TickInput};
use crate::ui::MenuInput;

/// Held paddle keys: W/S on the left, arrows on the right
pub fn poll_tick_input() -> TickInput {
    TickInput {
        left: PaddleInput {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
        },
        right: PaddleInput {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
        },
    }
}

/// Typed characters and edge-triggered menu keys for this frame
pub fn poll_menu_input() -> MenuInput {
    let mut chars = Vec::new();
    while let Some(c) = get_char_pressed() {
        if !c.is_control() {
            chars.push(c);
        }
    }

    let click = is_mouse_button_pressed(MouseButton::Left).then(|| {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    });

    MenuInput {
        chars,
        backspace: is_key_pressed(KeyCode::Backspace),
        tab: is_key_pressed(KeyCode::Tab),
        enter: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        click,
    }
}

/// Window close button or OS quit request. Needs `prevent_quit()` at
/// startup so the app gets a chance to write its timing log.
pub fn quit_requested() -> bool {
    is_quit_requested()
}

/// Caps the loop at a fixed frame rate
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    frame_start: Instant,
    enabled: bool,
}

impl FramePacer {
    pub fn new(fps: u32, enabled: bool) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
            enabled,
        }
    }

    /// Time left in a frame that has already taken `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame.saturating_sub(elapsed)
    }

    /// Sleep out the rest of the current frame, then start the next one
    pub fn wait(&mut self) {
        if self.enabled {
            let rest = self.remaining(self.frame_start.elapsed());
            if !rest.is_zero() {
                std::thread::sleep(rest);
            }
        }
        self.frame_start = Instant::now();
    }
}
