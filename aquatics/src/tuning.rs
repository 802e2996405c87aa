use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projectile::ProjectileKind;

/// How a fresh wander bearing is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bearing {
    /// Uniform azimuth in the XZ plane.
    Horizontal,
    /// Uniform direction on the unit sphere.
    Spherical,
}

/// Parameters for autonomous target-seeking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WanderSpec {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Shallowest allowed target height (closest to the surface).
    pub min_depth: f32,
    /// Deepest allowed target height.
    pub max_depth: f32,
    pub bearing: Bearing,
    pub arrival_radius: f32,
    /// Chance per tick of abandoning the current target early.
    pub retarget_probability: f32,
    /// Largest forward step per tick, before jitter and avoidance.
    pub step: f32,
    pub avoid_radius: f32,
    pub avoid_scale: f32,
    /// Scale the step by `dt * reference_tick_hz` instead of moving a fixed
    /// amount every tick.
    pub scale_by_dt: bool,
    pub reference_tick_hz: f32,
}

/// Thresholds and outputs of the surface/air state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuoyancySpec {
    /// Heights at or below this are in the water.
    pub surface: f32,
    pub submerged_gravity: f32,
    pub airborne_gravity: f32,
    /// Gravity scale used when the very first tick finds the body in the air.
    pub first_tick_gravity: Option<f32>,
    /// Leap impulse is `leap_factor * speed` along forward, once per breach.
    pub leap_factor: f32,
    pub deep: Option<DeepCorrection>,
}

/// Upward nudge applied every tick a body sits below `threshold`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeepCorrection {
    pub threshold: f32,
    pub impulse: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub default_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Speed change per scroll notch.
    pub speed_step: f32,
    /// Radians per pointer unit.
    pub look_sensitivity: f32,
    pub max_pitch: f32,
    /// Pitch rate (rad/s) while tumbling through the air.
    pub tumble_rate: f32,
    pub fire_cooldown: f32,
    /// Launch points in the player's local frame; shots alternate between them.
    pub muzzles: [Vec3; 2],
    pub weapon: ProjectileKind,
    pub camera_underwater_below: f32,
    pub buoyancy: BuoyancySpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatSpec {
    pub speed: f32,
    /// Seconds after which a live boat picks a new target regardless of progress.
    pub acquisition_cooldown: f32,
    pub score_value: f32,
    pub corpse_submerged_gravity: f32,
    pub corpse_airborne_gravity: f32,
    pub wander: WanderSpec,
    pub buoyancy: BuoyancySpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileSpec {
    pub base_impulse: f32,
    pub airborne_gravity: f32,
    /// Cosmetic pitch rate while airborne (rad/s).
    pub tumble_rate: f32,
    pub lifetime: f32,
    pub artifact_on_collision: bool,
    pub artifact_on_timeout: bool,
    /// Whether a hit kills the struck boat directly.
    pub kills_struck_boat: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSpec {
    pub lifetime: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmSpec {
    pub count: usize,
    /// Initial horizontal scatter around the origin.
    pub spawn_half_extent: f32,
    pub wander: WanderSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionSpec {
    pub initial_respawn_cooldown: f32,
    pub kills_per_decay: u32,
    pub decay_factor: f32,
}

/// Every tunable constant of the simulation. Sections left out of a config
/// file fall back to the arcade defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimTuning {
    pub player: PlayerSpec,
    pub boat: BoatSpec,
    pub torpedo: ProjectileSpec,
    pub large_torpedo: ProjectileSpec,
    pub artifact: ArtifactSpec,
    pub swarm: SwarmSpec,
    pub progression: ProgressionSpec,
}

impl Default for SimTuning {
    fn default() -> Self {
        crate::builtins::arcade_tuning()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field}: wander distances [{min}, {max}] must satisfy 0 <= min <= max")]
    WanderDistance { field: &'static str, min: f32, max: f32 },
    #[error("{field}: depth band is inverted (shallowest {shallowest} is below deepest {deepest})")]
    DepthBand { field: &'static str, shallowest: f32, deepest: f32 },
    #[error("{field}: {value} is not a probability")]
    Probability { field: &'static str, value: f32 },
    #[error("{field}: {value} must be positive")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field}: {value} must not be negative")]
    Negative { field: &'static str, value: f32 },
    #[error("player speeds must satisfy 0 < min <= default <= max (got {min}, {default}, {max})")]
    SpeedBounds { min: f32, default: f32, max: f32 },
    #[error("progression decay factor {0} must lie in (0, 1]")]
    DecayFactor(f32),
    #[error("progression must decay after at least one kill")]
    ZeroKillsPerDecay,
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Negative { field, value })
    }
}

impl WanderSpec {
    pub fn validate(&self, field: &'static str) -> Result<(), TuningError> {
        if !(self.min_distance >= 0.0 && self.min_distance <= self.max_distance) {
            return Err(TuningError::WanderDistance {
                field,
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if !(self.max_depth <= self.min_depth) {
            return Err(TuningError::DepthBand {
                field,
                shallowest: self.min_depth,
                deepest: self.max_depth,
            });
        }
        if !(0.0..=1.0).contains(&self.retarget_probability) {
            return Err(TuningError::Probability {
                field,
                value: self.retarget_probability,
            });
        }
        non_negative(field, self.arrival_radius)?;
        non_negative(field, self.step)?;
        non_negative(field, self.avoid_radius)?;
        positive(field, self.avoid_scale)?;
        positive(field, self.reference_tick_hz)
    }
}

impl BuoyancySpec {
    pub fn validate(&self, field: &'static str) -> Result<(), TuningError> {
        non_negative(field, self.leap_factor)?;
        if let Some(deep) = self.deep {
            if deep.threshold > self.surface {
                return Err(TuningError::DepthBand {
                    field,
                    shallowest: self.surface,
                    deepest: deep.threshold,
                });
            }
            non_negative(field, deep.impulse)?;
        }
        Ok(())
    }
}

impl PlayerSpec {
    pub fn validate(&self) -> Result<(), TuningError> {
        let ordered = self.min_speed > 0.0
            && self.min_speed <= self.default_speed
            && self.default_speed <= self.max_speed;
        if !ordered {
            return Err(TuningError::SpeedBounds {
                min: self.min_speed,
                default: self.default_speed,
                max: self.max_speed,
            });
        }
        positive("player.look_sensitivity", self.look_sensitivity)?;
        positive("player.max_pitch", self.max_pitch)?;
        non_negative("player.fire_cooldown", self.fire_cooldown)?;
        self.buoyancy.validate("player.buoyancy")
    }
}

impl ProjectileSpec {
    pub fn validate(&self, field: &'static str) -> Result<(), TuningError> {
        non_negative(field, self.base_impulse)?;
        positive(field, self.lifetime)
    }
}

impl SimTuning {
    /// Range-check every parameter. Out-of-range values are configuration
    /// mistakes; nothing here is recoverable at runtime.
    pub fn validate(&self) -> Result<(), TuningError> {
        self.player.validate()?;
        positive("boat.speed", self.boat.speed)?;
        non_negative("boat.acquisition_cooldown", self.boat.acquisition_cooldown)?;
        self.boat.wander.validate("boat.wander")?;
        self.boat.buoyancy.validate("boat.buoyancy")?;
        self.torpedo.validate("torpedo")?;
        self.large_torpedo.validate("large_torpedo")?;
        positive("artifact.lifetime", self.artifact.lifetime)?;
        non_negative("swarm.spawn_half_extent", self.swarm.spawn_half_extent)?;
        self.swarm.wander.validate("swarm.wander")?;
        non_negative(
            "progression.initial_respawn_cooldown",
            self.progression.initial_respawn_cooldown,
        )?;
        if self.progression.kills_per_decay == 0 {
            return Err(TuningError::ZeroKillsPerDecay);
        }
        let f = self.progression.decay_factor;
        if !(f > 0.0 && f <= 1.0) {
            return Err(TuningError::DecayFactor(f));
        }
        Ok(())
    }

    pub fn projectile(&self, kind: ProjectileKind) -> &ProjectileSpec {
        match kind {
            ProjectileKind::Torpedo => &self.torpedo,
            ProjectileKind::LargeTorpedo => &self.large_torpedo,
        }
    }
}
