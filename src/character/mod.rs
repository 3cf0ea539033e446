//! Character Module
//!
//! The controlled character's physical state and the per-frame systems that
//! advance it:
//!
//! - [`GroundProbe`]: single downward ray against a [`GroundSurface`]
//! - [`Kinematics`]: gravity, jump and horizontal movement
//! - [`LocomotionSystem`]: ties input, physics and animation together

pub mod ground;
pub mod kinematics;
pub mod locomotion;
pub mod state;

pub use ground::{GroundContact, GroundPlane, GroundProbe, GroundSurface, Ray, RayHit};
pub use kinematics::{Kinematics, MotionIntent, StepReport};
pub use locomotion::{CharacterAsset, LocomotionSystem, TickReport};
pub use state::CharacterState;
