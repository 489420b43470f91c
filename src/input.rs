use rustc_hash::FxHashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::{Camera, CameraMovement};

/// Input snapshot fed by window events and queried by scene logic.
///
/// Scene code sees only held keys, the latest cursor position, and the
/// scroll accumulated since it last asked — never the windowing library's
/// event stream.
#[derive(Default)]
pub struct InputState {
    held: FxHashSet<KeyCode>,
    cursor: Option<(f32, f32)>,
    scroll: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a keyboard event into the held-key set.
    pub fn record_key(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.set_key(code, event.state == ElementState::Pressed);
        }
    }

    pub fn set_key(&mut self, code: KeyCode, down: bool) {
        if down {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    pub fn record_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
    }

    pub fn record_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Scroll accumulated since the last call; draining keeps one wheel
    /// notch from being applied on every following frame.
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }
}

/// The one place key codes become camera movements: WASD to move, Space/C
/// for vertical, left shift to boost.
pub fn fly_controls(input: &InputState, camera: &mut Camera, dt: f32) {
    camera.boost = input.is_held(KeyCode::ShiftLeft);

    const BINDINGS: [(KeyCode, CameraMovement); 6] = [
        (KeyCode::KeyW, CameraMovement::Forward),
        (KeyCode::KeyS, CameraMovement::Backward),
        (KeyCode::KeyA, CameraMovement::Left),
        (KeyCode::KeyD, CameraMovement::Right),
        (KeyCode::Space, CameraMovement::Up),
        (KeyCode::KeyC, CameraMovement::Down),
    ];
    for (code, movement) in BINDINGS {
        if input.is_held(code) {
            camera.process_keyboard(movement, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn held_keys_track_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_held(KeyCode::KeyW));

        input.set_key(KeyCode::KeyW, true);
        assert!(input.is_held(KeyCode::KeyW));

        input.set_key(KeyCode::KeyW, false);
        assert!(!input.is_held(KeyCode::KeyW));
    }

    #[test]
    fn scroll_accumulates_until_taken() {
        let mut input = InputState::new();
        input.record_scroll(1.0);
        input.record_scroll(-0.25);
        assert!((input.take_scroll() - 0.75).abs() < f32::EPSILON);
        assert!(input.take_scroll().abs() < f32::EPSILON);
    }

    #[test]
    fn cursor_starts_unknown_and_follows_updates() {
        let mut input = InputState::new();
        assert!(input.cursor().is_none());
        input.record_cursor(400.0, 300.0);
        assert_eq!(input.cursor(), Some((400.0, 300.0)));
    }

    #[test]
    fn fly_controls_move_a_held_w_forward() {
        let mut input = InputState::new();
        let mut camera = Camera::new(800, 600, Vec3::new(0.0, 0.0, 3.0));
        input.set_key(KeyCode::KeyW, true);

        fly_controls(&input, &mut camera, 0.1);
        // default yaw looks down negative Z
        assert!(camera.position.z < 3.0);
        assert!(camera.position.x.abs() < 1e-6);
    }

    #[test]
    fn shift_enables_boost_only_while_held() {
        let mut input = InputState::new();
        let mut camera = Camera::new(800, 600, Vec3::ZERO);

        input.set_key(KeyCode::ShiftLeft, true);
        fly_controls(&input, &mut camera, 0.0);
        assert!(camera.boost);

        input.set_key(KeyCode::ShiftLeft, false);
        fly_controls(&input, &mut camera, 0.0);
        assert!(!camera.boost);
    }
}
