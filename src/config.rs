//! Tuning constants for the locomotion core.
//!
//! All fields have defaults matching the reference robot rig (0.5 scale,
//! metres and seconds), so an empty JSON object is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LocomotionError, Result};
use crate::input::KeyBindings;

/// How the character's yaw approaches the movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TurnSmoothing {
    /// Slerp by a fixed fraction every tick regardless of delta.
    PerFrame { factor: f32 },
    /// Same feel as `PerFrame` at `reference_fps`, scaled by delta.
    FrameRateIndependent { factor: f32, reference_fps: f32 },
}

impl Default for TurnSmoothing {
    fn default() -> Self {
        TurnSmoothing::PerFrame { factor: 0.1 }
    }
}

impl TurnSmoothing {
    /// Interpolation amount to apply for a tick of `delta` seconds.
    #[must_use]
    pub fn blend(&self, delta: f32) -> f32 {
        match *self {
            TurnSmoothing::PerFrame { factor } => factor,
            TurnSmoothing::FrameRateIndependent {
                factor,
                reference_fps,
            } => {
                let retention = (1.0 - factor).powf(delta * reference_fps);
                1.0 - retention
            }
        }
    }

    fn factor(&self) -> f32 {
        match *self {
            TurnSmoothing::PerFrame { factor }
            | TurnSmoothing::FrameRateIndependent { factor, .. } => factor,
        }
    }
}

/// When a held jump key starts a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpTrigger {
    /// Once per key press.
    #[default]
    Edge,
    /// Every grounded tick while the key is held.
    Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal speed, units per second.
    pub move_speed: f32,
    /// Downward acceleration, units per second squared.
    pub gravity: f32,
    /// Vertical velocity applied on jump.
    pub jump_impulse: f32,
    /// Maximum probe distance that still counts as ground contact.
    pub ground_check_distance: f32,
    /// Height above the character's base the ground ray starts from.
    pub probe_lift: f32,
    pub turn_smoothing: TurnSmoothing,
    pub jump_trigger: JumpTrigger,
    /// Fade for state-driven transitions (Idle, Running, Punch, Dance).
    pub state_fade: f32,
    /// Fade into Jump when the jump starts.
    pub trigger_fade: f32,
    /// Fade back to Idle after a one-shot completes.
    pub return_fade: f32,
    /// Read by [`LocomotionSystem::new_input`](crate::character::LocomotionSystem::new_input).
    pub key_bindings: KeyBindings,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            gravity: 9.8 * 2.0,
            jump_impulse: 9.0,
            ground_check_distance: 0.15,
            probe_lift: 0.1,
            turn_smoothing: TurnSmoothing::default(),
            jump_trigger: JumpTrigger::default(),
            state_fade: 0.2,
            trigger_fade: 0.1,
            return_fade: 0.2,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl LocomotionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        positive("move_speed", self.move_speed)?;
        positive("gravity", self.gravity)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("ground_check_distance", self.ground_check_distance)?;
        non_negative("probe_lift", self.probe_lift)?;
        non_negative("state_fade", self.state_fade)?;
        non_negative("trigger_fade", self.trigger_fade)?;
        non_negative("return_fade", self.return_fade)?;

        let factor = self.turn_smoothing.factor();
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(invalid(
                "turn_smoothing.factor",
                format!("must be in (0, 1], got {factor}"),
            ));
        }
        if let TurnSmoothing::FrameRateIndependent { reference_fps, .. } = self.turn_smoothing {
            positive("turn_smoothing.reference_fps", reference_fps)?;
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> LocomotionError {
    LocomotionError::InvalidConfig { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive and finite, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be non-negative and finite, got {value}")))
    }
}
