use aquatics::{BodyKind, BoatKilled, EnemyAi, Pose, Progression};
use bevy::prelude::*;
use tracing::{debug, info};

use crate::clock::{SimClock, SimRng};
use crate::config::Config;
use crate::physics::{Body, BodyEntered, Collider};

#[derive(Component, Debug, Clone)]
pub struct Boat {
    pub ai: EnemyAi,
}

/// Kill count and respawn pacing shared by every boat.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct GameProgression(pub Progression);

#[derive(Event, Debug, Clone, Copy)]
pub struct BoatKilledEvent {
    pub boat: Entity,
    pub score_value: f32,
}

pub fn spawn_boats(mut commands: Commands, cfg: Res<Config>, clock: Res<SimClock>, mut rng: ResMut<SimRng>) {
    let spec = &cfg.tuning.boat;
    for &spawn_point in &cfg.boat_spawns {
        let (ai, start) = EnemyAi::spawn(spec, spawn_point, clock.now(), &mut rng.0);
        commands.spawn((
            Boat { ai },
            Transform::from_translation(start.pose.translation).with_rotation(start.pose.rotation),
            Body::new(1.0).locked(),
            Collider {
                radius: cfg.colliders.boat,
                kind: BodyKind::Boat,
            },
        ));
    }
    info!(count = cfg.boat_spawns.len(), "boats spawned");
}

fn report_kill(
    entity: Entity,
    killed: BoatKilled,
    body: &mut Body,
    progression: &GameProgression,
) -> BoatKilledEvent {
    // The hull stops dead and is free to roll.
    body.velocity = Vec3::ZERO;
    body.rotation_locked = false;
    info!(boat = ?entity, kills = progression.kills(), "boat sunk");
    if killed.cooldown_decayed {
        info!(cooldown = progression.respawn_cooldown(), "respawn cooldown tightened");
    }
    BoatKilledEvent {
        boat: entity,
        score_value: killed.score_value,
    }
}

/// Kill a live boat and release its hull. Callers check `is_alive` first.
pub fn sink_boat(
    cfg: &Config,
    now: f32,
    entity: Entity,
    boat: &mut Boat,
    body: &mut Body,
    progression: &mut GameProgression,
) -> BoatKilledEvent {
    let killed = boat.ai.kill(&cfg.tuning.boat, now, &mut progression.0);
    report_kill(entity, killed, body, progression)
}

pub fn drive_boats(
    cfg: Res<Config>,
    clock: Res<SimClock>,
    progression: Res<GameProgression>,
    mut rng: ResMut<SimRng>,
    mut q_boats: Query<(Entity, &mut Transform, &mut Body, &mut Boat)>,
) {
    let spec = &cfg.tuning.boat;
    let now = clock.now();
    for (entity, mut transform, mut body, mut boat) in &mut q_boats {
        let pose = Pose {
            translation: transform.translation,
            rotation: transform.rotation,
        };
        let tick = boat.ai.tick(spec, pose, now, &progression.0, &mut rng.0);

        if let Some(respawn) = tick.respawn {
            transform.translation = respawn.pose.translation;
            transform.rotation = respawn.pose.rotation;
            body.halt();
            info!(boat = ?entity, at = ?respawn.pose.translation, "boat respawned");
        } else if let Some(facing) = tick.facing {
            transform.rotation = facing;
            debug!(boat = ?entity, target = ?boat.ai.target().point, "boat retargeted");
        }

        body.gravity_scale = tick.gravity_scale;
        if let Some(velocity) = tick.velocity {
            body.velocity = velocity;
        }
        body.apply_impulse(tick.impulse);
        body.rotation_locked = tick.rotation_locked;
        if body.rotation_locked {
            body.angular_velocity = Vec3::ZERO;
        }
    }
}

pub fn react_boat_contacts(
    cfg: Res<Config>,
    clock: Res<SimClock>,
    mut contacts: EventReader<BodyEntered>,
    mut q_boats: Query<(&mut Boat, &mut Body)>,
    mut progression: ResMut<GameProgression>,
    mut killed: EventWriter<BoatKilledEvent>,
) {
    let now = clock.now();
    for contact in contacts.read() {
        let Ok((mut boat, mut body)) = q_boats.get_mut(contact.body) else {
            continue;
        };
        if let Some(kill) = boat
            .ai
            .on_collision(&cfg.tuning.boat, contact.other_kind, now, &mut progression.0)
        {
            killed.write(report_kill(contact.body, kill, &mut body, &progression));
        }
    }
}
