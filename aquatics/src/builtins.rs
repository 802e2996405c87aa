use bevy_math::Vec3;

use crate::projectile::ProjectileKind;
use crate::tuning::{
    ArtifactSpec, Bearing, BoatSpec, BuoyancySpec, DeepCorrection, PlayerSpec, ProgressionSpec,
    ProjectileSpec, SimTuning, SwarmSpec, WanderSpec,
};

/// Tuning the arcade prototype ships with.
pub fn arcade_tuning() -> SimTuning {
    SimTuning {
        player: dolphin_spec(),
        boat: patrol_boat_spec(),
        torpedo: torpedo_spec(),
        large_torpedo: large_torpedo_spec(),
        artifact: ArtifactSpec { lifetime: 5.0 },
        swarm: fish_swarm_spec(),
        progression: ProgressionSpec {
            initial_respawn_cooldown: 10.0,
            kills_per_decay: 30,
            decay_factor: 0.9,
        },
    }
}

pub fn dolphin_spec() -> PlayerSpec {
    // Muzzles sit under each flipper; they coincide until a second hull is fitted.
    let muzzle = Vec3::new(0.0, -0.5, -2.0);
    PlayerSpec {
        default_speed: 25.0,
        min_speed: 5.0,
        max_speed: 50.0,
        speed_step: 1.0,
        look_sensitivity: 0.005,
        max_pitch: 75f32.to_radians(),
        tumble_rate: 2.0,
        fire_cooldown: 0.5,
        muzzles: [muzzle, muzzle],
        weapon: ProjectileKind::Torpedo,
        camera_underwater_below: -0.3,
        buoyancy: BuoyancySpec {
            surface: 0.0,
            submerged_gravity: 0.0,
            airborne_gravity: 9.8,
            // A full-strength first tick kills the opening leap before it shows.
            first_tick_gravity: Some(1.0),
            leap_factor: 2.0,
            deep: None,
        },
    }
}

pub fn patrol_boat_spec() -> BoatSpec {
    BoatSpec {
        speed: 30.0,
        acquisition_cooldown: 5.0,
        score_value: 100.0,
        corpse_submerged_gravity: 0.25,
        corpse_airborne_gravity: 10.0,
        wander: WanderSpec {
            min_distance: 50.0,
            max_distance: 100.0,
            min_depth: 0.0,
            max_depth: -1.0,
            bearing: Bearing::Spherical,
            arrival_radius: 1.0,
            retarget_probability: 0.01,
            step: 0.0,
            avoid_radius: 0.0,
            avoid_scale: 1.0,
            scale_by_dt: false,
            reference_tick_hz: 60.0,
        },
        buoyancy: BuoyancySpec {
            surface: 0.0,
            submerged_gravity: 0.0,
            airborne_gravity: 10.0,
            first_tick_gravity: None,
            leap_factor: 0.0,
            // Stacked hulls push each other under; float them back up.
            deep: Some(DeepCorrection {
                threshold: -0.5,
                impulse: 0.5,
            }),
        },
    }
}

pub fn torpedo_spec() -> ProjectileSpec {
    ProjectileSpec {
        base_impulse: 40.0,
        airborne_gravity: 2.0,
        tumble_rate: 0.5,
        lifetime: 20.0,
        artifact_on_collision: true,
        artifact_on_timeout: true,
        kills_struck_boat: false,
    }
}

pub fn large_torpedo_spec() -> ProjectileSpec {
    ProjectileSpec {
        base_impulse: 40.0,
        airborne_gravity: 2.0,
        tumble_rate: 0.5,
        lifetime: 20.0,
        artifact_on_collision: true,
        artifact_on_timeout: false,
        kills_struck_boat: true,
    }
}

pub fn fish_swarm_spec() -> SwarmSpec {
    SwarmSpec {
        count: 2500,
        spawn_half_extent: 25.0,
        wander: WanderSpec {
            min_distance: 1.0,
            max_distance: 30.0,
            // Fish stay in a band the player can read depth from.
            min_depth: -3.0,
            max_depth: -100.0,
            bearing: Bearing::Spherical,
            arrival_radius: 1.0,
            retarget_probability: 0.01,
            step: 0.2,
            avoid_radius: 5.0,
            avoid_scale: 5.0,
            scale_by_dt: false,
            reference_tick_hz: 60.0,
        },
    }
}
