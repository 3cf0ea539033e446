use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{LocomotionError, Result};

/// Closed set of actions the character rig ships with.
///
/// Clip names coming from the asset are parsed into these identifiers once at
/// load time, after which all lookups are by enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionId {
    Idle,
    Walking,
    Running,
    Jump,
    WalkJump,
    Punch,
    Dance,
    Wave,
    ThumbsUp,
    Yes,
    No,
    Sitting,
    Standing,
    Death,
}

/// How a clip instance behaves when it reaches the end of its clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCategory {
    /// Replays indefinitely until superseded.
    Looping,
    /// Plays once, holds the last pose and reports completion.
    OneShot,
}

impl ActionId {
    pub const ALL: [ActionId; 14] = [
        ActionId::Idle,
        ActionId::Walking,
        ActionId::Running,
        ActionId::Jump,
        ActionId::WalkJump,
        ActionId::Punch,
        ActionId::Dance,
        ActionId::Wave,
        ActionId::ThumbsUp,
        ActionId::Yes,
        ActionId::No,
        ActionId::Sitting,
        ActionId::Standing,
        ActionId::Death,
    ];

    /// Actions the locomotion state machine selects or triggers directly.
    pub const LOCOMOTION: [ActionId; 5] = [
        ActionId::Idle,
        ActionId::Running,
        ActionId::Jump,
        ActionId::Punch,
        ActionId::Dance,
    ];

    /// Clip name as authored in the asset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ActionId::Idle => "Idle",
            ActionId::Walking => "Walking",
            ActionId::Running => "Running",
            ActionId::Jump => "Jump",
            ActionId::WalkJump => "WalkJump",
            ActionId::Punch => "Punch",
            ActionId::Dance => "Dance",
            ActionId::Wave => "Wave",
            ActionId::ThumbsUp => "ThumbsUp",
            ActionId::Yes => "Yes",
            ActionId::No => "No",
            ActionId::Sitting => "Sitting",
            ActionId::Standing => "Standing",
            ActionId::Death => "Death",
        }
    }

    #[must_use]
    pub fn category(self) -> PlaybackCategory {
        match self {
            ActionId::Idle | ActionId::Walking | ActionId::Running => PlaybackCategory::Looping,
            _ => PlaybackCategory::OneShot,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_one_shot(self) -> bool {
        self.category() == PlaybackCategory::OneShot
    }

    /// Locking actions suppress movement, jumping and automatic re-selection
    /// until they complete.
    #[inline]
    #[must_use]
    pub fn is_locking(self) -> bool {
        matches!(self, ActionId::Punch | ActionId::Dance)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionId {
    type Err = LocomotionError;

    fn from_str(s: &str) -> Result<Self> {
        ActionId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| LocomotionError::UnknownAction(s.to_string()))
    }
}

/// Immutable clip data handed over by the asset loader.
///
/// Keyframe data stays with the renderer; the state machine only needs to
/// know how long a clip runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Clips validated against [`ActionId`] and keyed by it.
#[derive(Debug, Clone, Default)]
pub struct ClipSet {
    clips: FxHashMap<ActionId, Arc<AnimationClip>>,
}

impl ClipSet {
    /// Builds a clip set from raw loader output.
    ///
    /// Unrecognised names are skipped, duplicates keep the first occurrence,
    /// and missing locomotion clips are reported but tolerated. Only `Idle`
    /// is mandatory since every one-shot returns to it.
    pub fn from_clips(clips: impl IntoIterator<Item = AnimationClip>) -> Result<Self> {
        let mut set = Self::default();

        for clip in clips {
            let id = match clip.name.parse::<ActionId>() {
                Ok(id) => id,
                Err(_) => {
                    log::debug!("Skipping unrecognised animation clip \"{}\"", clip.name);
                    continue;
                }
            };

            if set.clips.contains_key(&id) {
                log::warn!("Duplicate animation clip \"{}\" ignored", clip.name);
                continue;
            }

            if !clip.duration.is_finite() || clip.duration < 0.0 {
                log::warn!(
                    "Animation clip \"{}\" has invalid duration {}; treating as empty",
                    clip.name,
                    clip.duration
                );
                set.clips.insert(id, Arc::new(AnimationClip::new(clip.name, 0.0)));
                continue;
            }

            set.clips.insert(id, Arc::new(clip));
        }

        if !set.clips.contains_key(&ActionId::Idle) {
            return Err(LocomotionError::MissingRequiredClip(ActionId::Idle));
        }

        for id in ActionId::LOCOMOTION {
            if !set.clips.contains_key(&id) {
                log::warn!("Animation clip \"{id}\" not found; transitions to it will be ignored");
            }
        }

        Ok(set)
    }

    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&Arc<AnimationClip>> {
        self.clips.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ActionId) -> bool {
        self.clips.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Loaded ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        ActionId::ALL.into_iter().filter(|id| self.clips.contains_key(id))
    }
}
