use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::animation::action::{ActionFinished, AnimationAction};
use crate::animation::clip::{ActionId, ClipSet};

/// Finish events produced by one mixer step. Rarely more than one.
pub type FinishedEvents = SmallVec<[ActionFinished; 2]>;

/// Owns one [`AnimationAction`] per loaded clip and advances them together.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
    index: FxHashMap<ActionId, usize>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance for every clip in the set, in declaration order.
    #[must_use]
    pub fn from_clips(clips: &ClipSet) -> Self {
        let mut mixer = Self::new();
        for id in clips.ids() {
            if let Some(clip) = clips.get(id) {
                mixer.add_action(AnimationAction::new(id, clip.clone()));
            }
        }
        mixer
    }

    /// Adds an action, replacing any existing instance for the same id.
    pub fn add_action(&mut self, action: AnimationAction) {
        let id = action.id();
        if let Some(&slot) = self.index.get(&id) {
            self.actions[slot] = action;
        } else {
            self.index.insert(id, self.actions.len());
            self.actions.push(action);
        }
    }

    #[must_use]
    pub fn action(&self, id: ActionId) -> Option<&AnimationAction> {
        self.index.get(&id).map(|&slot| &self.actions[slot])
    }

    pub fn action_mut(&mut self, id: ActionId) -> Option<&mut AnimationAction> {
        self.index.get(&id).map(|&slot| &mut self.actions[slot])
    }

    #[must_use]
    pub fn contains(&self, id: ActionId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn actions(&self) -> impl Iterator<Item = &AnimationAction> {
        self.actions.iter()
    }

    /// Advances every scheduled action and collects the ones that finished.
    pub fn update(&mut self, dt: f32) -> FinishedEvents {
        let mut finished = FinishedEvents::new();
        for action in &mut self.actions {
            if let Some(event) = action.update(dt) {
                finished.push(event);
            }
        }
        finished
    }

    /// Blend weights of every contributing action, for pose evaluation.
    pub fn weights(&self) -> impl Iterator<Item = (ActionId, f32)> + '_ {
        self.actions
            .iter()
            .map(|a| (a.id(), a.effective_weight()))
            .filter(|&(_, w)| w > 0.0)
    }
}
