//! Random target-seeking shared by boats and the fish swarm.
//!
//! Targets are sampled at a random distance and bearing from the current
//! position, then squeezed into the configured depth band. A wanderer only
//! turns when its target changes, and otherwise keeps swimming straight with a
//! jittered step. The jitter and the occasional early re-target keep a crowd
//! from moving in lockstep.

use std::f32::consts::TAU;

use bevy_math::{Vec3, Vec3Swizzles};
use rand::Rng;

use crate::math::{clamp_depth, look_at, Pose};
use crate::tuning::{Bearing, WanderSpec};

/// The point an autonomous body is currently heading for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringTarget {
    pub point: Vec3,
    pub arrival_radius: f32,
    pub retarget_probability: f32,
}

impl SteeringTarget {
    #[inline]
    pub fn is_arrived(&self, position: Vec3) -> bool {
        position.distance(self.point) < self.arrival_radius
    }

    /// Arrival measured in the XZ plane, for bodies that cannot change depth
    /// to meet their target.
    #[inline]
    pub fn is_arrived_planar(&self, position: Vec3) -> bool {
        position.xz().distance(self.point.xz()) < self.arrival_radius
    }
}

/// Unit direction for a fresh target.
pub fn sample_bearing<R: Rng + ?Sized>(bearing: Bearing, rng: &mut R) -> Vec3 {
    let azimuth = rng.gen::<f32>() * TAU;
    match bearing {
        Bearing::Horizontal => Vec3::new(azimuth.cos(), 0.0, azimuth.sin()),
        Bearing::Spherical => {
            // acos(2u - 1) spreads the polar angle so directions are uniform on the sphere
            let polar = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let (sin_p, cos_p) = polar.sin_cos();
            Vec3::new(sin_p * azimuth.cos(), sin_p * azimuth.sin(), cos_p)
        }
    }
}

/// Result of advancing one wanderer by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderStep {
    pub pose: Pose,
    pub retargeted: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct WanderBehavior<'a> {
    spec: &'a WanderSpec,
}

impl<'a> WanderBehavior<'a> {
    pub fn new(spec: &'a WanderSpec) -> Self {
        debug_assert!(
            spec.min_distance >= 0.0 && spec.min_distance <= spec.max_distance,
            "wander distances out of order: [{}, {}]",
            spec.min_distance,
            spec.max_distance
        );
        Self { spec }
    }

    pub fn spec(&self) -> &'a WanderSpec {
        self.spec
    }

    /// Choose a new target around `origin`; pass the world origin for a body
    /// that has never had one.
    pub fn pick_target<R: Rng + ?Sized>(&self, origin: Vec3, rng: &mut R) -> SteeringTarget {
        let spec = self.spec;
        let distance = spec.min_distance + rng.gen::<f32>() * (spec.max_distance - spec.min_distance);
        let raw = origin + sample_bearing(spec.bearing, rng) * distance;
        SteeringTarget {
            point: clamp_depth(raw, spec.min_depth, spec.max_depth),
            arrival_radius: spec.arrival_radius,
            retarget_probability: spec.retarget_probability,
        }
    }

    /// Arrival, or the per-tick coin flip that abandons a target early.
    pub fn should_retarget<R: Rng + ?Sized>(
        &self,
        position: Vec3,
        target: &SteeringTarget,
        rng: &mut R,
    ) -> bool {
        target.is_arrived(position) || rng.gen::<f32>() < target.retarget_probability
    }

    /// Speed multiplier while the avoided body is close. Direction is untouched.
    pub fn avoidance_scale(&self, position: Vec3, avoid: Option<Vec3>) -> f32 {
        match avoid {
            Some(threat) if position.distance(threat) < self.spec.avoid_radius => self.spec.avoid_scale,
            _ => 1.0,
        }
    }

    /// Forward distance for this tick.
    pub fn step_length<R: Rng + ?Sized>(
        &self,
        position: Vec3,
        avoid: Option<Vec3>,
        dt: f32,
        rng: &mut R,
    ) -> f32 {
        let pacing = if self.spec.scale_by_dt {
            dt * self.spec.reference_tick_hz
        } else {
            1.0
        };
        rng.gen::<f32>() * self.spec.step * self.avoidance_scale(position, avoid) * pacing
    }

    /// Re-target if due, turn to face a new target, then move forward.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        pose: Pose,
        target: &mut SteeringTarget,
        avoid: Option<Vec3>,
        dt: f32,
        rng: &mut R,
    ) -> WanderStep {
        let mut rotation = pose.rotation;
        let retargeted = self.should_retarget(pose.translation, target, rng);
        if retargeted {
            *target = self.pick_target(pose.translation, rng);
            if let Some(facing) = look_at(pose.translation, target.point) {
                rotation = facing;
            }
        }

        let mut next = Pose {
            translation: pose.translation,
            rotation,
        };
        let step = self.step_length(pose.translation, avoid, dt, rng);
        next.translation += next.forward() * step;
        WanderStep {
            pose: next,
            retargeted,
        }
    }
}
