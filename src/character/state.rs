use glam::{EulerRot, Quat, Vec3};

use crate::animation::ActionId;

/// Physical and logical state of the single controlled character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub position: Vec3,
    /// Yaw-only rotation about +Y.
    pub orientation: Quat,
    pub vertical_velocity: f32,
    pub is_grounded: bool,
    /// Logical-active animation, `None` until the asset has loaded.
    pub current_action: Option<ActionId>,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CharacterState {
    /// Starts airborne; the first probe settles the character.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position: Vec3::new(position.x, position.y.max(0.0), position.z),
            orientation: Quat::IDENTITY,
            vertical_velocity: 0.0,
            is_grounded: false,
            current_action: None,
        }
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        let (yaw, _, _) = self.orientation.to_euler(EulerRot::YXZ);
        yaw
    }

    /// Unit vector the character is facing (+Z at zero yaw).
    #[must_use]
    pub fn facing(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }
}
