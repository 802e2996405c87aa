use aquatics::{
    Artifact, BodyKind, DestroyCause, Destruction, Launch, Projectile, ProjectileKind,
};
use bevy::prelude::*;
use tracing::debug;

use crate::boats::{sink_boat, Boat, BoatKilledEvent, GameProgression};
use crate::clock::SimClock;
use crate::config::Config;
use crate::physics::{Body, BodyEntered, Collider, CollisionException};

#[derive(Component, Debug, Clone)]
pub struct Torpedo {
    pub projectile: Projectile,
}

#[derive(Component, Debug, Clone)]
pub struct Explosion {
    pub artifact: Artifact,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileDestroyed {
    pub projectile: Entity,
    pub kind: ProjectileKind,
    pub cause: DestroyCause,
    pub position: Vec3,
    pub left_artifact: bool,
}

pub fn launch_projectile(
    commands: &mut Commands,
    cfg: &Config,
    now: f32,
    firer: Entity,
    launch: &Launch,
) -> Entity {
    let spec = cfg.tuning.projectile(launch.kind);
    let mut body = Body::new(1.0);
    body.gravity_scale = Projectile::INITIAL_GRAVITY_SCALE;
    body.apply_impulse(Projectile::launch_impulse(
        spec,
        launch.pose.rotation,
        launch.firing_speed,
    ));
    let entity = commands
        .spawn((
            Torpedo {
                projectile: Projectile::spawn(launch.kind, spec, now),
            },
            Transform::from_translation(launch.pose.translation)
                .with_rotation(launch.pose.rotation),
            body,
            Collider {
                radius: cfg.colliders.projectile,
                kind: BodyKind::Projectile(launch.kind),
            },
            CollisionException(firer),
        ))
        .id();
    debug!(projectile = ?entity, kind = ?launch.kind, muzzle = launch.muzzle, "fired");
    entity
}

#[allow(clippy::too_many_arguments)]
fn retire(
    commands: &mut Commands,
    cfg: &Config,
    now: f32,
    entity: Entity,
    transform: &Transform,
    kind: ProjectileKind,
    destruction: Destruction,
    destroyed: &mut EventWriter<ProjectileDestroyed>,
) {
    if destruction.spawn_artifact {
        commands.spawn((
            Explosion {
                artifact: Artifact::spawn(&cfg.tuning.artifact, now),
            },
            *transform,
        ));
    }
    commands.entity(entity).despawn();
    debug!(projectile = ?entity, cause = ?destruction.cause, "projectile destroyed");
    destroyed.write(ProjectileDestroyed {
        projectile: entity,
        kind,
        cause: destruction.cause,
        position: transform.translation,
        left_artifact: destruction.spawn_artifact,
    });
}

pub fn fly_projectiles(
    mut commands: Commands,
    cfg: Res<Config>,
    clock: Res<SimClock>,
    mut q_torpedoes: Query<(Entity, &Transform, &mut Body, &mut Torpedo)>,
    mut destroyed: EventWriter<ProjectileDestroyed>,
) {
    let now = clock.now();
    for (entity, transform, mut body, mut torpedo) in &mut q_torpedoes {
        let kind = torpedo.projectile.kind();
        let spec = cfg.tuning.projectile(kind);
        let Some(tick) = torpedo.projectile.tick(spec, transform.translation.y, now) else {
            continue;
        };
        body.gravity_scale = tick.gravity_scale;
        body.angular_velocity = transform.rotation * Vec3::X * -tick.tumble_rate;
        if let Some(destruction) = tick.destruction {
            retire(&mut commands, &cfg, now, entity, transform, kind, destruction, &mut destroyed);
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn react_projectile_contacts(
    mut commands: Commands,
    cfg: Res<Config>,
    clock: Res<SimClock>,
    mut contacts: EventReader<BodyEntered>,
    mut q_torpedoes: Query<(&Transform, &mut Torpedo)>,
    mut q_boats: Query<(&mut Boat, &mut Body)>,
    mut progression: ResMut<GameProgression>,
    mut destroyed: EventWriter<ProjectileDestroyed>,
    mut killed: EventWriter<BoatKilledEvent>,
) {
    let now = clock.now();
    for contact in contacts.read() {
        let Ok((transform, mut torpedo)) = q_torpedoes.get_mut(contact.body) else {
            continue;
        };
        let kind = torpedo.projectile.kind();
        let spec = cfg.tuning.projectile(kind);
        let struck_live_boat = q_boats
            .get(contact.other)
            .is_ok_and(|(boat, _)| boat.ai.is_alive());
        let Some(destruction) = torpedo
            .projectile
            .on_collision(spec, contact.other_kind, struck_live_boat)
        else {
            continue;
        };
        if destruction.kill_struck_boat {
            if let Ok((mut boat, mut body)) = q_boats.get_mut(contact.other) {
                let event = sink_boat(&cfg, now, contact.other, &mut boat, &mut body, &mut progression);
                killed.write(event);
            }
        }
        retire(
            &mut commands,
            &cfg,
            now,
            contact.body,
            transform,
            kind,
            destruction,
            &mut destroyed,
        );
    }
}

pub fn expire_artifacts(
    mut commands: Commands,
    clock: Res<SimClock>,
    mut q_explosions: Query<(Entity, &mut Explosion)>,
) {
    let now = clock.now();
    for (entity, mut explosion) in &mut q_explosions {
        if explosion.artifact.tick(now) {
            commands.entity(entity).despawn();
            debug!(artifact = ?entity, "artifact expired");
        }
    }
}
