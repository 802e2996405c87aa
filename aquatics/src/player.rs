//! The player's swimmer: pointer look, scroll speed, tumbling leaps and the
//! torpedo trigger.

use bevy_math::{EulerRot, Quat, Vec2};

use crate::buoyancy::{BuoyancyState, LocomotionOutput, Regime};
use crate::math::{forward_of, Pose};
use crate::projectile::ProjectileKind;
use crate::tuning::PlayerSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTick {
    pub rotation: Quat,
    pub locomotion: LocomotionOutput,
}

/// A torpedo the host should spawn this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub kind: ProjectileKind,
    pub pose: Pose,
    /// Swim speed at the moment of firing; adds to the launch impulse.
    pub firing_speed: f32,
    pub muzzle: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLocomotion {
    buoyancy: BuoyancyState,
    yaw: f32,
    pitch: f32,
    speed: f32,
    last_fire: f32,
    shots_fired: u32,
}

impl PlayerLocomotion {
    /// Start facing `rotation`. Roll is discarded.
    pub fn new(spec: &PlayerSpec, rotation: Quat) -> Self {
        let (yaw, pitch, _) = rotation.to_euler(EulerRot::YXZ);
        Self {
            buoyancy: BuoyancyState::default(),
            yaw,
            pitch: pitch.clamp(-spec.max_pitch, spec.max_pitch),
            speed: spec.default_speed,
            // The first shot is never held back.
            last_fire: -spec.fire_cooldown,
            shots_fired: 0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Accumulate a pointer delta. Ignored out of the water, where the body
    /// tumbles on its own.
    pub fn apply_pointer(&mut self, spec: &PlayerSpec, delta: Vec2, in_water: bool) {
        if !in_water {
            return;
        }
        self.yaw -= delta.x * spec.look_sensitivity;
        self.pitch = (self.pitch - delta.y * spec.look_sensitivity).clamp(-spec.max_pitch, spec.max_pitch);
    }

    /// Positive notches speed up.
    pub fn apply_scroll(&mut self, spec: &PlayerSpec, notches: i32) {
        self.speed = (self.speed + notches as f32 * spec.speed_step).clamp(spec.min_speed, spec.max_speed);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn tick(&mut self, spec: &PlayerSpec, pose: Pose, dt: f32) -> PlayerTick {
        let height = pose.translation.y;
        if !Regime::classify(&spec.buoyancy, height).in_water() {
            // Nose over while in the air. The look accumulator is the tumble
            // state, so diving back in picks up from here.
            self.pitch = (self.pitch - spec.tumble_rate * dt).clamp(-spec.max_pitch, spec.max_pitch);
        }
        let rotation = self.rotation();
        let forward = forward_of(rotation);
        let locomotion = self
            .buoyancy
            .step(&spec.buoyancy, height, forward * self.speed, forward, self.speed);
        PlayerTick { rotation, locomotion }
    }

    /// Fire from alternating muzzles while `held`, at most once per cooldown.
    pub fn try_fire(&mut self, spec: &PlayerSpec, now: f32, held: bool, pose: Pose) -> Option<Launch> {
        if !held || now - self.last_fire < spec.fire_cooldown {
            return None;
        }
        let muzzle = (self.shots_fired % 2) as usize;
        self.last_fire = now;
        self.shots_fired += 1;
        Some(Launch {
            kind: spec.weapon,
            pose: Pose {
                translation: pose.transform_point(spec.muzzles[muzzle]),
                rotation: pose.rotation,
            },
            firing_speed: self.speed,
            muzzle,
        })
    }
}

pub fn is_camera_underwater(spec: &PlayerSpec, camera_y: f32) -> bool {
    camera_y <= spec.camera_underwater_below
}
