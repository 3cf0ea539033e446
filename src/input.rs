//! Platform-agnostic input state
//!
//! Raw key events are injected by a platform adapter (browser keyboard
//! listener, winit, a test script). The locomotion core only ever reads the
//! logical view through [`KeyBindings`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Keys the character controller can be bound to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    P,
    O,
    Space,
    ShiftLeft,
    ShiftRight,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Logical inputs understood by the locomotion system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalInput {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    Punch,
    Dance,
}

/// Maps raw keys onto logical inputs. Several keys may alias one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<Key>,
    pub back: Vec<Key>,
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    pub jump: Vec<Key>,
    pub punch: Vec<Key>,
    pub dance: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![Key::W, Key::ArrowUp],
            back: vec![Key::S, Key::ArrowDown],
            left: vec![Key::A, Key::ArrowLeft],
            right: vec![Key::D, Key::ArrowRight],
            jump: vec![Key::Space],
            punch: vec![Key::P],
            dance: vec![Key::O],
        }
    }
}

impl KeyBindings {
    #[must_use]
    pub fn keys(&self, input: LogicalInput) -> &[Key] {
        match input {
            LogicalInput::Forward => &self.forward,
            LogicalInput::Back => &self.back,
            LogicalInput::Left => &self.left,
            LogicalInput::Right => &self.right,
            LogicalInput::Jump => &self.jump,
            LogicalInput::Punch => &self.punch,
            LogicalInput::Dance => &self.dance,
        }
    }
}

/// Keyboard state container with per-frame edge tracking.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,

    pressed_keys: FxHashSet<Key>,
    just_pressed_keys: FxHashSet<Key>,
    just_released_keys: FxHashSet<Key>,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    // ========== Adapter API ==========

    /// Clears edge state. Call once after each tick.
    pub fn start_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
    }

    /// Injects a keyboard event. Auto-repeat presses of a held key are not
    /// reported as new presses.
    pub fn inject_key(&mut self, key: Key, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_keys.insert(key) {
                    self.just_pressed_keys.insert(key);
                }
            }
            ButtonState::Released => {
                if self.pressed_keys.remove(&key) {
                    self.just_released_keys.insert(key);
                }
            }
        }
    }

    /// Releases every key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.just_released_keys.extend(self.pressed_keys.drain());
    }

    // ========== Raw key queries ==========

    #[must_use]
    pub fn get_key(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    #[must_use]
    pub fn get_key_down(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    #[must_use]
    pub fn get_key_up(&self, key: Key) -> bool {
        self.just_released_keys.contains(&key)
    }

    // ========== Logical queries ==========

    /// Level: any bound key is held.
    #[must_use]
    pub fn held(&self, input: LogicalInput) -> bool {
        self.bindings.keys(input).iter().any(|&k| self.get_key(k))
    }

    /// Edge: any bound key went down since the last `start_frame`.
    #[must_use]
    pub fn pressed(&self, input: LogicalInput) -> bool {
        self.bindings.keys(input).iter().any(|&k| self.get_key_down(k))
    }
}
