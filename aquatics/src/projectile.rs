//! Torpedoes and the explosion artifacts they leave behind.

use bevy_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::body::BodyKind;
use crate::math::forward_of;
use crate::tuning::{ArtifactSpec, ProjectileSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Torpedo,
    LargeTorpedo,
}

/// Deadline measured against the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    spawned_at: f32,
    max: f32,
}

impl Lifetime {
    pub fn new(now: f32, max: f32) -> Self {
        debug_assert!(max > 0.0, "lifetime must be positive, got {max}");
        Self { spawned_at: now, max }
    }

    pub fn spawned_at(&self) -> f32 {
        self.spawned_at
    }

    pub fn age(&self, now: f32) -> f32 {
        now - self.spawned_at
    }

    #[inline]
    pub fn is_expired(&self, now: f32) -> bool {
        now > self.spawned_at + self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestroyCause {
    Collision,
    Timeout,
}

/// What the host must do when a projectile goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destruction {
    pub cause: DestroyCause,
    /// Leave an explosion artifact at the projectile's final pose.
    pub spawn_artifact: bool,
    /// Kill the boat that was struck.
    pub kill_struck_boat: bool,
}

/// Per-tick physics for a live projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileTick {
    pub gravity_scale: f32,
    /// Pitch rate (rad/s) to apply about the local X axis, negative-down.
    pub tumble_rate: f32,
    pub destruction: Option<Destruction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    kind: ProjectileKind,
    lifetime: Lifetime,
    destroyed: bool,
}

impl Projectile {
    pub fn spawn(kind: ProjectileKind, spec: &ProjectileSpec, now: f32) -> Self {
        Self {
            kind,
            lifetime: Lifetime::new(now, spec.lifetime),
            destroyed: false,
        }
    }

    /// Impulse sending a freshly spawned projectile along its forward axis.
    /// Faster shooters throw harder.
    pub fn launch_impulse(spec: &ProjectileSpec, rotation: Quat, firing_speed: f32) -> Vec3 {
        forward_of(rotation) * (spec.base_impulse + firing_speed)
    }

    /// Gravity is off at launch; the first tick decides otherwise.
    pub const INITIAL_GRAVITY_SCALE: f32 = 0.0;

    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Advance one tick. Returns `None` once destruction has been requested.
    pub fn tick(&mut self, spec: &ProjectileSpec, height: f32, now: f32) -> Option<ProjectileTick> {
        if self.destroyed {
            return None;
        }
        let airborne = height > 0.0;
        let destruction = if self.lifetime.is_expired(now) {
            self.destroy(spec, DestroyCause::Timeout, false)
        } else {
            None
        };
        Some(ProjectileTick {
            gravity_scale: if airborne { spec.airborne_gravity } else { 0.0 },
            tumble_rate: if airborne { spec.tumble_rate } else { 0.0 },
            destruction,
        })
    }

    /// First contact with any body destroys the projectile.
    ///
    /// `struck_live_boat` tells whether the other body is a boat that is still
    /// alive; only then can a large torpedo claim the kill.
    pub fn on_collision(
        &mut self,
        spec: &ProjectileSpec,
        other: BodyKind,
        struck_live_boat: bool,
    ) -> Option<Destruction> {
        let kill = other == BodyKind::Boat && struck_live_boat;
        self.destroy(spec, DestroyCause::Collision, kill)
    }

    /// Request destruction. Only the first request produces a `Destruction`;
    /// later ones, from either trigger, are ignored.
    pub fn destroy(
        &mut self,
        spec: &ProjectileSpec,
        cause: DestroyCause,
        struck_live_boat: bool,
    ) -> Option<Destruction> {
        if self.destroyed {
            return None;
        }
        self.destroyed = true;
        let kill_struck_boat = cause == DestroyCause::Collision && struck_live_boat && spec.kills_struck_boat;
        let spawn_artifact = match cause {
            DestroyCause::Collision if spec.kills_struck_boat => kill_struck_boat && spec.artifact_on_collision,
            DestroyCause::Collision => spec.artifact_on_collision,
            DestroyCause::Timeout => spec.artifact_on_timeout,
        };
        Some(Destruction {
            cause,
            spawn_artifact,
            kill_struck_boat,
        })
    }
}

/// Short-lived explosion debris. Plays its effect host-side and expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    lifetime: Lifetime,
    expired: bool,
}

impl Artifact {
    pub fn spawn(spec: &ArtifactSpec, now: f32) -> Self {
        Self {
            lifetime: Lifetime::new(now, spec.lifetime),
            expired: false,
        }
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    /// True on the single tick the artifact should be despawned.
    pub fn tick(&mut self, now: f32) -> bool {
        if self.expired || !self.lifetime.is_expired(now) {
            return false;
        }
        self.expired = true;
        true
    }
}
