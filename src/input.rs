//! Keyboard input mapping
//!
//! Key-down events are read in arrival order from miniquad, including OS key
//! repeat, so holding a key keeps moving the triangle and two presses within
//! one frame count twice.

use crate::app::{Action, ANGLE_STEP, MOVE_STEP, SCALE_DOWN, SCALE_UP};
use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::*;

/// Map a key press to its action. Unbound keys give None.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Escape => Action::Quit,
        KeyCode::Up => Action::Move { dx: 0, dy: -MOVE_STEP },
        KeyCode::Down => Action::Move { dx: 0, dy: MOVE_STEP },
        KeyCode::Left => Action::Move { dx: -MOVE_STEP, dy: 0 },
        KeyCode::Right => Action::Move { dx: MOVE_STEP, dy: 0 },
        KeyCode::Q => Action::Rotate(-ANGLE_STEP),
        KeyCode::E => Action::Rotate(ANGLE_STEP),
        KeyCode::Z => Action::Scale(SCALE_DOWN),
        KeyCode::X => Action::Scale(SCALE_UP),
        _ => return None,
    };
    Some(action)
}

/// Key-down events collected since the last drain
#[derive(Debug, Default)]
struct KeyEvents {
    keys: Vec<KeyCode>,
}

impl EventHandler for KeyEvents {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        self.keys.push(keycode);
    }
}

impl KeyEvents {
    /// Bound actions in arrival order, emptying the queue
    fn drain_actions(&mut self) -> Vec<Action> {
        self.keys.drain(..).filter_map(action_for_key).collect()
    }
}

/// Per-frame event source for the frame loop
pub struct InputQueue {
    subscriber: usize,
    events: KeyEvents,
}

impl InputQueue {
    /// Must be created after the window exists
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            events: KeyEvents::default(),
        }
    }

    /// Drain all input queued since the previous frame
    pub fn poll_actions(&mut self) -> Vec<Action> {
        repeat_all_miniquad_input(&mut self.events, self.subscriber);
        let mut actions = self.events.drain_actions();
        if is_quit_requested() {
            actions.push(Action::Quit);
        }
        actions
    }
}
