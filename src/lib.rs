#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Frame-driven character controller core.
//!
//! Reconciles keyboard input, a single downward ground probe, simple
//! gravity/jump kinematics and an animation cross-fade state machine into one
//! consistent character state per frame. Rendering, asset parsing and event
//! plumbing stay outside; they talk to this crate through [`InputState`],
//! [`GroundSurface`], [`CharacterAsset`] and [`LocomotionSystem::tick`].

pub mod animation;
pub mod character;
pub mod config;
pub mod errors;
pub mod input;

pub use animation::{
    ActionId, AnimationAction, AnimationClip, AnimationController, AnimationMixer, ClipSet,
    LoopMode, TransitionOutcome,
};
pub use character::{
    CharacterAsset, CharacterState, GroundContact, GroundPlane, GroundProbe, GroundSurface,
    Kinematics, LocomotionSystem, MotionIntent,
};
pub use config::{JumpTrigger, LocomotionConfig, TurnSmoothing};
pub use errors::{LocomotionError, Result};
pub use input::{ButtonState, InputState, Key, KeyBindings, LogicalInput};
