use std::sync::Arc;

use crate::animation::clip::{ActionId, AnimationClip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
}

/// Linear weight ramp applied on top of the base weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFade {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl WeightFade {
    #[must_use]
    pub fn factor(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Emitted by [`AnimationAction::update`] when a `LoopMode::Once` instance
/// reaches the end of its clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionFinished {
    pub action: ActionId,
    /// Play generation of the instance that finished.
    pub generation: u32,
}

/// Runtime playback handle for one clip bound to the character.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    id: ActionId,
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    /// Hold the final pose after a `Once` clip ends instead of disabling.
    pub clamp_when_finished: bool,
    pub paused: bool,
    pub enabled: bool,

    running: bool,
    fade: Option<WeightFade>,
    generation: u32,
}

impl AnimationAction {
    #[must_use]
    pub fn new(id: ActionId, clip: Arc<AnimationClip>) -> Self {
        Self {
            id,
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            clamp_when_finished: false,
            paused: false,
            enabled: true,
            running: false,
            fade: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn fade(&self) -> Option<&WeightFade> {
        self.fade.as_ref()
    }

    /// Scheduled with the mixer and not yet stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running && self.enabled && !self.paused
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.running
    }

    /// Weight actually contributed to the blend this frame.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        if !self.running || !self.enabled {
            return 0.0;
        }
        let factor = self.fade.map_or(1.0, |f| f.factor());
        self.weight * factor
    }

    /// Rewinds to the start and starts a new play generation.
    pub fn reset(&mut self) -> &mut Self {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self.fade = None;
        self.generation = self.generation.wrapping_add(1);
        self
    }

    pub fn play(&mut self) -> &mut Self {
        self.running = true;
        self
    }

    pub fn stop(&mut self) -> &mut Self {
        self.running = false;
        self.fade = None;
        self
    }

    pub fn set_time_scale(&mut self, time_scale: f32) -> &mut Self {
        self.time_scale = time_scale;
        self
    }

    pub fn set_weight(&mut self, weight: f32) -> &mut Self {
        self.weight = weight;
        self
    }

    pub fn set_loop(&mut self, loop_mode: LoopMode, clamp_when_finished: bool) -> &mut Self {
        self.loop_mode = loop_mode;
        self.clamp_when_finished = clamp_when_finished;
        self
    }

    pub fn fade_in(&mut self, duration: f32) -> &mut Self {
        self.schedule_fade(0.0, 1.0, duration)
    }

    /// Ramps from the current fade factor down to zero, then stops.
    pub fn fade_out(&mut self, duration: f32) -> &mut Self {
        let from = self.fade.map_or(1.0, |f| f.factor());
        self.schedule_fade(from, 0.0, duration)
    }

    pub fn stop_fading(&mut self) -> &mut Self {
        self.fade = None;
        self
    }

    fn schedule_fade(&mut self, from: f32, to: f32, duration: f32) -> &mut Self {
        if duration <= 0.0 {
            if to <= 0.0 {
                self.stop();
            } else {
                self.fade = None;
            }
            return self;
        }
        self.fade = Some(WeightFade {
            from,
            to,
            duration,
            elapsed: 0.0,
        });
        self
    }

    /// Advances the fade and the local clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Option<ActionFinished> {
        if !self.running || !self.enabled {
            return None;
        }

        // Fades run on mixer time and keep going while a clamped clip holds
        // its final pose.
        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed += dt;
            if fade.is_complete() {
                if fade.to <= 0.0 {
                    self.stop();
                    return None;
                }
                self.fade = None;
            }
        }

        if self.paused {
            return None;
        }

        let duration = self.clip.duration;

        match self.loop_mode {
            LoopMode::Once => {
                self.time += dt * self.time_scale;
                if self.time >= duration || duration <= 0.0 {
                    self.time = duration;
                    return Some(self.finish());
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    return Some(self.finish());
                }
            }
            LoopMode::Loop => {
                if duration <= 0.0 {
                    return None;
                }
                self.time += dt * self.time_scale;
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    self.time = duration + (self.time % duration);
                }
            }
        }

        None
    }

    fn finish(&mut self) -> ActionFinished {
        if self.clamp_when_finished {
            self.paused = true;
        } else {
            self.enabled = false;
        }
        ActionFinished {
            action: self.id,
            generation: self.generation,
        }
    }
}
