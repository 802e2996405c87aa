use crate::tuning::ProgressionSpec;

/// Session-wide pacing shared by every boat: the kill count and the respawn
/// cooldown it tightens.
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    kills: u32,
    respawn_cooldown: f32,
    kills_per_decay: u32,
    decay_factor: f32,
}

impl Progression {
    pub fn new(spec: &ProgressionSpec) -> Self {
        debug_assert!(spec.kills_per_decay > 0);
        debug_assert!(spec.decay_factor > 0.0 && spec.decay_factor <= 1.0);
        Self {
            kills: 0,
            respawn_cooldown: spec.initial_respawn_cooldown,
            kills_per_decay: spec.kills_per_decay,
            decay_factor: spec.decay_factor,
        }
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn respawn_cooldown(&self) -> f32 {
        self.respawn_cooldown
    }

    /// Count a kill. Every `kills_per_decay`-th kill shrinks the cooldown;
    /// returns whether this one did.
    pub fn register_kill(&mut self) -> bool {
        self.kills = self.kills.saturating_add(1);
        if self.kills % self.kills_per_decay != 0 {
            return false;
        }
        self.respawn_cooldown *= self.decay_factor;
        true
    }
}
