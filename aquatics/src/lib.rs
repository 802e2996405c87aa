//! Aquatic entity simulation: wandering, buoyancy, torpedoes, boats, the
//! player's swimmer and the fish school.
//!
//! This crate has no engine types beyond `bevy_math` and does no I/O. Hosts
//! read poses in, feed the returned commands to their physics, and forward
//! collisions back.

pub mod math;
pub use math::{look_at, look_rotation, Pose, LOCAL_FORWARD};

mod tuning;
pub use tuning::{
    ArtifactSpec, Bearing, BoatSpec, BuoyancySpec, DeepCorrection, PlayerSpec, ProgressionSpec,
    ProjectileSpec, SimTuning, SwarmSpec, TuningError, WanderSpec,
};

pub mod builtins;

mod body;
pub use body::BodyKind;

pub mod wander;
pub use wander::{SteeringTarget, WanderBehavior};

pub mod buoyancy;
pub use buoyancy::{BuoyancyState, LocomotionOutput, Regime, Transition};

pub mod projectile;
pub use projectile::{Artifact, DestroyCause, Destruction, Projectile, ProjectileKind, ProjectileTick};

mod progression;
pub use progression::Progression;

pub mod enemy;
pub use enemy::{AliveState, BoatKilled, BoatTick, EnemyAi};

pub mod player;
pub use player::{is_camera_underwater, Launch, PlayerLocomotion, PlayerTick};

mod swarm;
pub use swarm::FishSwarm;
