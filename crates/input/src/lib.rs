//! Keyboard and mouse state, and the flight intents built from it.
//!
//! The simulation never sees winit types. Each frame the windowing layer
//! feeds events into [`InputState`] and the loop snapshots a
//! [`FlightIntents`], which is all the craft and camera code consume.

use std::collections::HashSet;

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,
    /// Mouse buttons pressed this frame.
    mouse_pressed: HashSet<MouseButton>,
    /// Mouse buttons released this frame.
    mouse_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.mouse_held.contains(&button) {
                    self.mouse_pressed.insert(button);
                }
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
                self.mouse_released.insert(button);
            }
        }
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Check if a mouse button is held.
    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Check if a mouse button was pressed this frame.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    // Flight bindings

    /// Throttle forward (W).
    pub fn is_forward_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyW)
    }

    /// Throttle backward (S).
    pub fn is_backward_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyS)
    }

    /// Yaw left (left arrow).
    pub fn is_yaw_left_held(&self) -> bool {
        self.is_key_held(KeyCode::ArrowLeft)
    }

    /// Yaw right (right arrow).
    pub fn is_yaw_right_held(&self) -> bool {
        self.is_key_held(KeyCode::ArrowRight)
    }

    /// Nose up (up arrow).
    pub fn is_pitch_up_held(&self) -> bool {
        self.is_key_held(KeyCode::ArrowUp)
    }

    /// Nose down (down arrow).
    pub fn is_pitch_down_held(&self) -> bool {
        self.is_key_held(KeyCode::ArrowDown)
    }

    /// Bank left (A).
    pub fn is_bank_left_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyA)
    }

    /// Bank right (D).
    pub fn is_bank_right_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyD)
    }

    /// Climb (Space).
    pub fn is_lift_up_held(&self) -> bool {
        self.is_key_held(KeyCode::Space)
    }

    /// Descend (left Shift).
    pub fn is_lift_down_held(&self) -> bool {
        self.is_key_held(KeyCode::ShiftLeft)
    }

    /// Boost (F).
    pub fn is_boost_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyF)
    }

    /// Fire (left mouse button).
    pub fn is_fire_held(&self) -> bool {
        self.is_mouse_held(MouseButton::Left)
    }

    /// Camera tour toggle (P, one-shot per press).
    pub fn is_tour_toggle_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyP)
    }

    /// Snapshot the flight intents for this frame.
    pub fn flight_intents(&self) -> FlightIntents {
        FlightIntents {
            forward: self.is_forward_held(),
            backward: self.is_backward_held(),
            yaw_left: self.is_yaw_left_held(),
            yaw_right: self.is_yaw_right_held(),
            pitch_up: self.is_pitch_up_held(),
            pitch_down: self.is_pitch_down_held(),
            bank_left: self.is_bank_left_held(),
            bank_right: self.is_bank_right_held(),
            lift_up: self.is_lift_up_held(),
            lift_down: self.is_lift_down_held(),
            boost: self.is_boost_held(),
            fire: self.is_fire_held(),
            tour_toggle: self.is_tour_toggle_pressed(),
        }
    }
}

/// Device-independent control signals for one frame.
///
/// All fields are level signals except `tour_toggle`, which is edge
/// detected by [`InputState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightIntents {
    pub forward: bool,
    pub backward: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub bank_left: bool,
    pub bank_right: bool,
    pub lift_up: bool,
    pub lift_down: bool,
    pub boost: bool,
    pub fire: bool,
    pub tour_toggle: bool,
}

impl FlightIntents {
    /// Intents with nothing held, for idle frames and tests.
    pub fn idle() -> Self {
        Self::default()
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
