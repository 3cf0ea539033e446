use glam::{Quat, Vec3};

use crate::character::ground::GroundContact;
use crate::character::state::CharacterState;
use crate::config::{JumpTrigger, LocomotionConfig, TurnSmoothing};
use crate::input::{InputState, LogicalInput};

/// Movement request for one tick, already filtered by the action lock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionIntent {
    /// Unit horizontal direction, or zero.
    pub direction: Vec3,
    pub jump: bool,
}

impl MotionIntent {
    #[must_use]
    pub fn from_input(input: &InputState, locked: bool, jump_trigger: JumpTrigger) -> Self {
        if locked {
            return Self::default();
        }

        let mut direction = Vec3::ZERO;
        if input.held(LogicalInput::Forward) {
            direction.z -= 1.0;
        }
        if input.held(LogicalInput::Back) {
            direction.z += 1.0;
        }
        if input.held(LogicalInput::Left) {
            direction.x -= 1.0;
        }
        if input.held(LogicalInput::Right) {
            direction.x += 1.0;
        }

        let jump = match jump_trigger {
            JumpTrigger::Edge => input.pressed(LogicalInput::Jump),
            JumpTrigger::Level => input.held(LogicalInput::Jump),
        };

        Self {
            direction: direction.normalize_or_zero(),
            jump,
        }
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.direction != Vec3::ZERO
    }
}

/// What happened during a kinematics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub jumped: bool,
    pub moving: bool,
    /// Went from airborne to grounded this step.
    pub landed: bool,
}

/// Gravity, jump and horizontal movement integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub turn_smoothing: TurnSmoothing,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::from_config(&LocomotionConfig::default())
    }
}

impl Kinematics {
    #[must_use]
    pub fn from_config(config: &LocomotionConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            turn_smoothing: config.turn_smoothing,
        }
    }

    /// Advances `state` by `delta` seconds.
    ///
    /// `contact` is this tick's probe result; `None` means no ground within
    /// range. Non-positive or non-finite `delta` leaves the state untouched.
    pub fn step(
        &self,
        state: &mut CharacterState,
        intent: &MotionIntent,
        contact: Option<GroundContact>,
        delta: f32,
    ) -> StepReport {
        let mut report = StepReport::default();
        if !(delta.is_finite() && delta > 0.0) {
            return report;
        }

        // 1. Ground contact
        let was_grounded = state.is_grounded;
        match contact {
            Some(contact) => {
                state.is_grounded = true;
                if !was_grounded {
                    state.vertical_velocity = 0.0;
                    report.landed = true;
                }
                // Only ever lift out of the surface, never pull down onto it.
                state.position.y = state.position.y.max(contact.height);
            }
            None => state.is_grounded = false,
        }

        // 2. Jump
        if intent.jump && state.is_grounded {
            state.vertical_velocity = self.jump_impulse;
            state.is_grounded = false;
            report.jumped = true;
        }

        // 3. Horizontal movement and facing
        if intent.is_moving() {
            let dir = intent.direction;
            let target = Quat::from_rotation_y(dir.x.atan2(dir.z));
            let t = self.turn_smoothing.blend(delta);
            state.orientation = state.orientation.slerp(target, t).normalize();
            state.position += dir * self.move_speed * delta;
            report.moving = true;
        }

        // 4. Gravity
        if !state.is_grounded {
            state.vertical_velocity -= self.gravity * delta;
            state.position.y += state.vertical_velocity * delta;

            if state.position.y < 0.0 {
                state.position.y = 0.0;
                state.vertical_velocity = 0.0;
                state.is_grounded = true;
                report.landed |= !was_grounded;
            }
        }

        report
    }
}
