pub mod action;
pub mod clip;
pub mod controller;
pub mod mixer;

pub use action::{ActionFinished, AnimationAction, LoopMode, WeightFade};
pub use clip::{ActionId, AnimationClip, ClipSet, PlaybackCategory};
pub use controller::{AnimationController, TransitionOutcome};
pub use mixer::{AnimationMixer, FinishedEvents};
