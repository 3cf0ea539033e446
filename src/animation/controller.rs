//! Cross-fade state machine over the character's clip instances.
//!
//! Exactly one [`ActionId`] is logically active at any time. A transition
//! updates it immediately while the mixer blends the outgoing and incoming
//! instances over the fade window.
//!
//! One-shot clips register a completion observer tagged with the transition
//! token that started them. Any later transition bumps the token and drops
//! the observer, so a finish event from a superseded instance can never
//! trigger the return to `Idle`.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::animation::action::LoopMode;
use crate::animation::clip::{ActionId, ClipSet, PlaybackCategory};
use crate::animation::mixer::AnimationMixer;

/// Result of [`AnimationController::transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Started,
    AlreadyActive,
    MissingClip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CompletionObserver {
    action: ActionId,
    generation: u32,
    token: u64,
}

#[derive(Debug, Clone)]
pub struct AnimationController {
    mixer: AnimationMixer,
    active: ActionId,
    token: u64,
    observer: Option<CompletionObserver>,
    return_fade: f32,
    /// Missing clips already reported at `warn` level.
    reported_missing: FxHashSet<ActionId>,
}

impl AnimationController {
    /// Binds every clip to a fresh instance and starts `Idle` at full weight.
    ///
    /// `ClipSet` construction guarantees `Idle` is present.
    #[must_use]
    pub fn new(clips: &ClipSet, return_fade: f32) -> Self {
        let mut mixer = AnimationMixer::from_clips(clips);
        if let Some(idle) = mixer.action_mut(ActionId::Idle) {
            idle.reset()
                .set_loop(LoopMode::Loop, false)
                .set_time_scale(1.0)
                .set_weight(1.0)
                .play();
        }

        Self {
            mixer,
            active: ActionId::Idle,
            token: 0,
            observer: None,
            return_fade,
            reported_missing: FxHashSet::default(),
        }
    }

    /// The logical-active action. Authoritative even mid-fade.
    #[must_use]
    pub fn current(&self) -> ActionId {
        self.active
    }

    #[must_use]
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    /// Number of transitions started so far.
    #[must_use]
    pub fn transition_token(&self) -> u64 {
        self.token
    }

    #[must_use]
    pub fn has_pending_completion(&self) -> bool {
        self.observer.is_some()
    }

    /// True while `id` is the active one-shot and its instance is still
    /// playing toward the end of its clip.
    #[must_use]
    pub fn is_in_flight(&self, id: ActionId) -> bool {
        id.is_one_shot()
            && self.active == id
            && self.mixer.action(id).is_some_and(|a| a.is_running())
    }

    pub fn transition_to(&mut self, id: ActionId, fade: f32) -> TransitionOutcome {
        if !self.mixer.contains(id) {
            self.report_missing(id);
            return TransitionOutcome::MissingClip;
        }

        if id == self.active {
            return TransitionOutcome::AlreadyActive;
        }

        let previous = self.active;
        let fade = fade.max(0.0);

        if let Some(outgoing) = self.mixer.action_mut(previous) {
            outgoing.fade_out(fade);
        }

        let outcome = self.start(id, fade);
        log::debug!("Animation {previous} -> {id} (fade {fade:.2}s)");
        outcome
    }

    /// Like [`transition_to`](Self::transition_to), but an already active
    /// one-shot is rewound and played again with a fresh completion observer.
    pub fn replay(&mut self, id: ActionId, fade: f32) -> TransitionOutcome {
        if id != self.active || !id.is_one_shot() || !self.mixer.contains(id) {
            return self.transition_to(id, fade);
        }

        let outcome = self.start(id, fade.max(0.0));
        log::debug!("Animation {id} restarted");
        outcome
    }

    fn start(&mut self, id: ActionId, fade: f32) -> TransitionOutcome {
        self.token += 1;
        if let Some(stale) = self.observer.take() {
            log::trace!("Dropping completion observer for {}", stale.action);
        }

        let Some(incoming) = self.mixer.action_mut(id) else {
            return TransitionOutcome::MissingClip;
        };

        let (loop_mode, clamp) = match id.category() {
            PlaybackCategory::Looping => (LoopMode::Loop, false),
            PlaybackCategory::OneShot => (LoopMode::Once, true),
        };

        incoming
            .reset()
            .set_time_scale(1.0)
            .set_weight(1.0)
            .set_loop(loop_mode, clamp)
            .fade_in(fade)
            .play();

        if id.is_one_shot() {
            self.observer = Some(CompletionObserver {
                action: id,
                generation: incoming.generation(),
                token: self.token,
            });
        }

        self.active = id;
        TransitionOutcome::Started
    }

    fn report_missing(&mut self, id: ActionId) {
        if self.reported_missing.insert(id) {
            log::warn!("Animation \"{id}\" not found; transition ignored");
        } else {
            log::debug!("Animation \"{id}\" not found; transition ignored");
        }
    }

    /// Advances the mixer and runs completion observers.
    ///
    /// Returns the one-shot actions whose completion sent the controller back
    /// to `Idle` during this step.
    pub fn update(&mut self, dt: f32) -> SmallVec<[ActionId; 2]> {
        let mut completed = SmallVec::new();

        for event in self.mixer.update(dt) {
            let matches = self.observer.is_some_and(|obs| {
                obs.action == event.action
                    && obs.generation == event.generation
                    && obs.token == self.token
            });

            if !matches {
                log::trace!("Ignoring stale finish event for {}", event.action);
                continue;
            }

            self.observer = None;
            completed.push(event.action);
            if self.active == event.action {
                self.transition_to(ActionId::Idle, self.return_fade);
            }
        }

        completed
    }
}
