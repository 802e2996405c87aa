//! Headless Bevy host for the aquatic simulation.
//!
//! Every fixed tick runs in one chained order: advance the clock, let each
//! entity decide its locomotion from its start-of-tick pose, integrate bodies,
//! detect new contacts, then react to them.

use std::time::Duration;

use aquatics::Progression;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub mod args;
pub mod boats;
pub mod clock;
pub mod config;
pub mod fish;
pub mod physics;
pub mod player;
pub mod projectiles;

pub use args::Args;
pub use boats::{Boat, BoatKilledEvent, GameProgression};
pub use clock::{SimClock, SimRng};
pub use config::{load_config, ColliderRadii, Config};
pub use fish::School;
pub use physics::{Body, BodyEntered, Collider, CollisionException, Contacts, WorldGravity};
pub use player::{CameraUnderwater, Player, PlayerEnteredWater, PlayerIntent, PlayerJumped};
pub use projectiles::{Explosion, ProjectileDestroyed, Torpedo};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Clock,
    Decide,
    Integrate,
    Contacts,
    React,
    Observe,
}

pub fn build_server_app(cfg: Config) -> App {
    let mut app = App::new();
    let tick = Duration::from_secs_f64(cfg.tick_hz.recip());
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(tick)));

    app.insert_resource(Time::<Fixed>::from_hz(cfg.tick_hz))
        .insert_resource(SimClock::new(cfg.tick_hz))
        .insert_resource(SimRng(StdRng::seed_from_u64(cfg.seed)))
        .insert_resource(WorldGravity(cfg.gravity))
        .insert_resource(GameProgression(Progression::new(&cfg.tuning.progression)))
        .init_resource::<PlayerIntent>()
        .init_resource::<CameraUnderwater>()
        .init_resource::<Contacts>()
        .add_event::<BodyEntered>()
        .add_event::<BoatKilledEvent>()
        .add_event::<PlayerJumped>()
        .add_event::<PlayerEnteredWater>()
        .add_event::<ProjectileDestroyed>()
        .configure_sets(
            FixedUpdate,
            (
                SimSet::Clock,
                SimSet::Decide,
                SimSet::Integrate,
                SimSet::Contacts,
                SimSet::React,
                SimSet::Observe,
            )
                .chain(),
        )
        .add_systems(
            Startup,
            (player::spawn_player, boats::spawn_boats, fish::spawn_school).chain(),
        )
        .add_systems(FixedUpdate, clock::advance_clock.in_set(SimSet::Clock))
        // Chained so the shared RNG is drawn in the same order every run.
        .add_systems(
            FixedUpdate,
            (
                player::drive_player,
                boats::drive_boats,
                projectiles::fly_projectiles,
                projectiles::expire_artifacts,
                fish::swim_school,
            )
                .chain()
                .in_set(SimSet::Decide),
        )
        .add_systems(FixedUpdate, physics::integrate_bodies.in_set(SimSet::Integrate))
        .add_systems(FixedUpdate, physics::detect_contacts.in_set(SimSet::Contacts))
        .add_systems(
            FixedUpdate,
            (projectiles::react_projectile_contacts, boats::react_boat_contacts)
                .chain()
                .in_set(SimSet::React),
        )
        .add_systems(
            FixedUpdate,
            (player::track_camera, exit_after_max_ticks).in_set(SimSet::Observe),
        );

    app.insert_resource(cfg);
    app
}

fn exit_after_max_ticks(cfg: Res<Config>, clock: Res<SimClock>, mut exit: EventWriter<AppExit>) {
    let Some(max) = cfg.max_ticks else {
        return;
    };
    if clock.tick() >= max {
        info!(ticks = clock.tick(), "tick limit reached, exiting");
        exit.write(AppExit::Success);
    }
}
