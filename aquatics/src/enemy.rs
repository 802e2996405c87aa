//! Boat behaviour: wander while alive, drift as a corpse, come back later.

use bevy_math::{Quat, Vec3};
use rand::Rng;

use crate::body::BodyKind;
use crate::buoyancy::{BuoyancyState, Regime};
use crate::math::{forward_of, look_rotation, planar_direction, Pose};
use crate::progression::Progression;
use crate::tuning::BoatSpec;
use crate::wander::{SteeringTarget, WanderBehavior};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AliveState {
    Alive,
    Dead { since: f32 },
}

/// Published when a boat dies, for scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatKilled {
    pub score_value: f32,
    /// The kill tightened the session's respawn cooldown.
    pub cooldown_decayed: bool,
}

/// Reset applied when a boat comes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Respawn {
    pub pose: Pose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatTick {
    pub gravity_scale: f32,
    pub velocity: Option<Vec3>,
    pub impulse: Vec3,
    /// New heading, set when the target changed this tick.
    pub facing: Option<Quat>,
    pub respawn: Option<Respawn>,
    /// Rotational freedom is locked while alive and released for the corpse.
    pub rotation_locked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyAi {
    spawn_point: Vec3,
    state: AliveState,
    target: SteeringTarget,
    acquired_at: f32,
    buoyancy: BuoyancyState,
}

fn facing_toward(from: Vec3, target: Vec3) -> Option<Quat> {
    // Boats stay level: aim at the target's bearing, not its depth.
    look_rotation(planar_direction(from, target), Vec3::Y)
}

impl EnemyAi {
    /// Create a live boat at its spawn point with a first target.
    pub fn spawn<R: Rng + ?Sized>(
        spec: &BoatSpec,
        spawn_point: Vec3,
        now: f32,
        rng: &mut R,
    ) -> (Self, Respawn) {
        debug_assert!(spawn_point.is_finite(), "boat spawn point unset: {spawn_point}");
        let target = WanderBehavior::new(&spec.wander).pick_target(spawn_point, rng);
        let ai = Self {
            spawn_point,
            state: AliveState::Alive,
            target,
            acquired_at: now,
            buoyancy: BuoyancyState::default(),
        };
        let pose = Pose {
            translation: spawn_point,
            rotation: facing_toward(spawn_point, target.point).unwrap_or(Quat::IDENTITY),
        };
        (ai, Respawn { pose })
    }

    pub fn is_alive(&self) -> bool {
        self.state == AliveState::Alive
    }

    pub fn state(&self) -> AliveState {
        self.state
    }

    pub fn spawn_point(&self) -> Vec3 {
        self.spawn_point
    }

    pub fn target(&self) -> &SteeringTarget {
        &self.target
    }

    /// Externally triggered death. Killing a dead boat is a caller bug.
    pub fn kill(&mut self, spec: &BoatSpec, now: f32, progression: &mut Progression) -> BoatKilled {
        debug_assert!(self.is_alive(), "kill() on a boat that is already dead");
        self.state = AliveState::Dead { since: now };
        let cooldown_decayed = progression.register_kill();
        BoatKilled {
            score_value: spec.score_value,
            cooldown_decayed,
        }
    }

    /// Only the player or a projectile can sink a boat, and only once per life.
    pub fn on_collision(
        &mut self,
        spec: &BoatSpec,
        other: BodyKind,
        now: f32,
        progression: &mut Progression,
    ) -> Option<BoatKilled> {
        let lethal = other == BodyKind::Player || other.is_projectile();
        if !self.is_alive() || !lethal {
            return None;
        }
        Some(self.kill(spec, now, progression))
    }

    fn retarget<R: Rng + ?Sized>(&mut self, spec: &BoatSpec, from: Vec3, now: f32, rng: &mut R) -> Option<Quat> {
        self.target = WanderBehavior::new(&spec.wander).pick_target(from, rng);
        self.acquired_at = now;
        facing_toward(from, self.target.point)
    }

    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        spec: &BoatSpec,
        pose: Pose,
        now: f32,
        progression: &Progression,
        rng: &mut R,
    ) -> BoatTick {
        if let AliveState::Dead { since } = self.state {
            return self.tick_dead(spec, pose, since, now, progression, rng);
        }

        let position = pose.translation;
        let stale = now >= self.acquired_at + spec.acquisition_cooldown;
        // Hulls ride the surface, so only horizontal distance counts.
        let arrived = self.target.is_arrived_planar(position);
        let early = rng.gen::<f32>() < self.target.retarget_probability;
        let facing = if stale || arrived || early {
            self.retarget(spec, position, now, rng)
        } else {
            None
        };

        let drive = if self.target.is_arrived_planar(position) {
            Vec3::ZERO
        } else {
            planar_direction(position, self.target.point) * spec.speed
        };
        let forward = facing.map_or(pose.forward(), forward_of);
        let out = self.buoyancy.step(&spec.buoyancy, position.y, drive, forward, spec.speed);

        BoatTick {
            gravity_scale: out.gravity_scale,
            velocity: out.velocity,
            impulse: out.impulse,
            facing,
            respawn: None,
            rotation_locked: true,
        }
    }

    fn tick_dead<R: Rng + ?Sized>(
        &mut self,
        spec: &BoatSpec,
        pose: Pose,
        since: f32,
        now: f32,
        progression: &Progression,
        rng: &mut R,
    ) -> BoatTick {
        if now >= since + progression.respawn_cooldown() {
            let (fresh, respawn) = Self::spawn(spec, self.spawn_point, now, rng);
            *self = fresh;
            return BoatTick {
                gravity_scale: spec.buoyancy.submerged_gravity,
                velocity: Some(Vec3::ZERO),
                impulse: Vec3::ZERO,
                facing: Some(respawn.pose.rotation),
                respawn: Some(respawn),
                rotation_locked: true,
            };
        }

        // The corpse keeps its edge memory current so a respawn never reads a
        // stale crossing.
        let regime = Regime::classify(&spec.buoyancy, pose.translation.y);
        self.buoyancy.observe(regime);
        BoatTick {
            gravity_scale: if regime.in_water() {
                spec.corpse_submerged_gravity
            } else {
                spec.corpse_airborne_gravity
            },
            velocity: None,
            impulse: Vec3::ZERO,
            facing: None,
            respawn: None,
            rotation_locked: false,
        }
    }
}
