//! Per-frame orchestration of input, ground contact, kinematics and
//! animation selection for the single controlled character.

use crate::animation::{ActionId, AnimationClip, AnimationController, ClipSet, TransitionOutcome};
use crate::character::ground::{GroundProbe, GroundSurface};
use crate::character::kinematics::{Kinematics, MotionIntent, StepReport};
use crate::character::state::CharacterState;
use crate::config::LocomotionConfig;
use crate::errors::{LocomotionError, Result};
use crate::input::{InputState, LogicalInput};

/// What the asset loader hands over once the character model is ready.
#[derive(Debug, Clone, Default)]
pub struct CharacterAsset {
    pub clips: Vec<AnimationClip>,
}

/// Summary of one [`LocomotionSystem::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// The tick did nothing (no asset, or an unusable delta).
    pub skipped: bool,
    pub step: StepReport,
    /// A one-shot completed and returned the character to `Idle`.
    pub returned_to_idle: bool,
}

pub struct LocomotionSystem {
    config: LocomotionConfig,
    ground: Box<dyn GroundSurface>,
    probe: GroundProbe,
    kinematics: Kinematics,
    state: CharacterState,
    animation: Option<AnimationController>,
}

impl LocomotionSystem {
    /// Creates an inert system; it starts ticking once an asset is loaded.
    pub fn new(config: LocomotionConfig, ground: Box<dyn GroundSurface>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            probe: GroundProbe::new(config.probe_lift, config.ground_check_distance),
            kinematics: Kinematics::from_config(&config),
            config,
            ground,
            state: CharacterState::default(),
            animation: None,
        })
    }

    #[must_use]
    pub fn with_state(mut self, state: CharacterState) -> Self {
        self.state = state;
        self.state.position.y = self.state.position.y.max(0.0);
        self.state.current_action = self.animation.as_ref().map(AnimationController::current);
        self
    }

    #[must_use]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    #[must_use]
    pub fn animation(&self) -> Option<&AnimationController> {
        self.animation.as_ref()
    }

    /// Input tracker using the configured key bindings.
    #[must_use]
    pub fn new_input(&self) -> InputState {
        InputState::with_bindings(self.config.key_bindings.clone())
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn current_action(&self) -> Option<ActionId> {
        self.state.current_action
    }

    /// Receives the loader's result. Failures leave the system inert.
    pub fn on_asset_loaded(
        &mut self,
        asset: std::result::Result<CharacterAsset, LocomotionError>,
    ) -> Result<()> {
        let result = asset.and_then(|asset| ClipSet::from_clips(asset.clips));
        let clips = match result {
            Ok(clips) => clips,
            Err(e) => {
                log::error!("Character initialisation failed: {e}");
                return Err(e);
            }
        };

        let names: Vec<&str> = clips.ids().map(ActionId::name).collect();
        log::info!("Character loaded with animations: {names:?}");

        let controller = AnimationController::new(&clips, self.config.return_fade);
        self.state.current_action = Some(controller.current());
        self.animation = Some(controller);
        Ok(())
    }

    /// Advances the character by one frame of `delta` seconds.
    pub fn tick(&mut self, input: &InputState, delta: f32) -> TickReport {
        let Some(animation) = self.animation.as_mut() else {
            return TickReport {
                skipped: true,
                ..TickReport::default()
            };
        };

        if !(delta.is_finite() && delta > 0.0) {
            log::trace!("Skipping tick with delta {delta}");
            return TickReport {
                skipped: true,
                ..TickReport::default()
            };
        }

        let mut report = TickReport::default();

        // Mixer step first so completion observers settle the active action
        // before anything reads it.
        report.returned_to_idle = !animation.update(delta).is_empty();
        self.state.current_action = Some(animation.current());

        self.evaluate_action_triggers(input);

        let locked = self.is_locked();
        let intent = MotionIntent::from_input(input, locked, self.config.jump_trigger);
        let contact = self.probe.probe_below(&*self.ground, self.state.position);
        report.step = self
            .kinematics
            .step(&mut self.state, &intent, contact, delta);

        // A jump started on the landing tick rewinds the Jump clip.
        if report.step.jumped {
            if let Some(animation) = self.animation.as_mut() {
                animation.replay(ActionId::Jump, self.config.trigger_fade);
                self.state.current_action = Some(animation.current());
            }
        }

        if !self.is_locked() {
            self.select_locomotion_animation(&report.step);
        }

        report
    }

    fn evaluate_action_triggers(&mut self, input: &InputState) {
        if self.is_locked() || !self.state.is_grounded {
            return;
        }

        if input.pressed(LogicalInput::Punch) {
            self.transition(ActionId::Punch, self.config.state_fade);
        } else if input.pressed(LogicalInput::Dance) {
            self.transition(ActionId::Dance, self.config.state_fade);
        }
    }

    fn select_locomotion_animation(&mut self, step: &StepReport) {
        let Some(animation) = self.animation.as_ref() else {
            return;
        };

        let target = if !self.state.is_grounded {
            ActionId::Jump
        } else if step.moving {
            ActionId::Running
        } else {
            ActionId::Idle
        };

        if target == animation.current() {
            return;
        }

        // Let an airborne Jump play out; landing is always allowed to cut it.
        if animation.is_in_flight(ActionId::Jump) && !step.landed {
            return;
        }

        self.transition(target, self.config.state_fade);
    }

    fn is_locked(&self) -> bool {
        self.state.current_action.is_some_and(ActionId::is_locking)
    }

    fn transition(&mut self, id: ActionId, fade: f32) -> TransitionOutcome {
        let Some(animation) = self.animation.as_mut() else {
            return TransitionOutcome::MissingClip;
        };
        let outcome = animation.transition_to(id, fade);
        self.state.current_action = Some(animation.current());
        outcome
    }
}
