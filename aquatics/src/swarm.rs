//! Decorative school of fish. Each instance wanders on its own; nothing here
//! touches physics.

use bevy_math::{Quat, Vec3};
use rand::Rng;

use crate::math::{look_at, Pose};
use crate::tuning::SwarmSpec;
use crate::wander::{SteeringTarget, WanderBehavior};

#[derive(Debug, Clone)]
pub struct FishSwarm {
    poses: Vec<Pose>,
    targets: Vec<SteeringTarget>,
    phases: Vec<[f32; 4]>,
}

impl FishSwarm {
    pub fn new<R: Rng + ?Sized>(spec: &SwarmSpec, rng: &mut R) -> Self {
        let wander = WanderBehavior::new(&spec.wander);
        let h = spec.spawn_half_extent;
        let mut poses = Vec::with_capacity(spec.count);
        let mut targets = Vec::with_capacity(spec.count);
        let mut phases = Vec::with_capacity(spec.count);
        for _ in 0..spec.count {
            let offset = Vec3::new(
                rng.gen_range(-h..=h),
                rng.gen_range(spec.wander.max_depth..=spec.wander.min_depth),
                rng.gen_range(-h..=h),
            );
            let target = wander.pick_target(Vec3::ZERO, rng);
            poses.push(Pose {
                translation: offset,
                rotation: look_at(offset, target.point).unwrap_or(Quat::IDENTITY),
            });
            targets.push(target);
            phases.push(rng.gen());
        }
        Self { poses, targets, phases }
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Instance transforms, in buffer order.
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn targets(&self) -> &[SteeringTarget] {
        &self.targets
    }

    /// Per-instance shader seed.
    pub fn phases(&self) -> &[[f32; 4]] {
        &self.phases
    }

    /// Advance every fish one tick, speeding up those near `avoid`. Returns
    /// how many picked a new target.
    pub fn tick<R: Rng + ?Sized>(&mut self, spec: &SwarmSpec, avoid: Option<Vec3>, dt: f32, rng: &mut R) -> usize {
        let wander = WanderBehavior::new(&spec.wander);
        let mut retargeted = 0;
        for (pose, target) in self.poses.iter_mut().zip(self.targets.iter_mut()) {
            let step = wander.advance(*pose, target, avoid, dt, rng);
            *pose = step.pose;
            retargeted += usize::from(step.retargeted);
        }
        retargeted
    }
}
