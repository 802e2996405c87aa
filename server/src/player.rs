use aquatics::{is_camera_underwater, BodyKind, PlayerLocomotion, Pose, Regime, Transition};
use bevy::prelude::*;
use tracing::debug;

use crate::clock::SimClock;
use crate::config::Config;
use crate::physics::{Body, Collider};
use crate::projectiles::launch_projectile;

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub locomotion: PlayerLocomotion,
}

/// Input gathered since the last tick. Look and scroll are consumed by the
/// tick; the trigger stays held until released.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerIntent {
    pub look_delta: Vec2,
    pub scroll: i32,
    pub fire_held: bool,
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraUnderwater(pub bool);

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerJumped {
    pub position: Vec3,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerEnteredWater {
    pub position: Vec3,
}

pub fn spawn_player(mut commands: Commands, cfg: Res<Config>) {
    let spec = &cfg.tuning.player;
    commands.spawn((
        Player {
            locomotion: PlayerLocomotion::new(spec, Quat::IDENTITY),
        },
        Transform::from_translation(cfg.player_spawn),
        Body::new(1.0).locked(),
        Collider {
            radius: cfg.colliders.player,
            kind: BodyKind::Player,
        },
    ));
    debug!(spawn = ?cfg.player_spawn, "player spawned");
}

#[allow(clippy::too_many_arguments)]
pub fn drive_player(
    mut commands: Commands,
    cfg: Res<Config>,
    clock: Res<SimClock>,
    mut intent: ResMut<PlayerIntent>,
    mut q_player: Query<(Entity, &mut Transform, &mut Body, &mut Player)>,
    mut jumped: EventWriter<PlayerJumped>,
    mut entered: EventWriter<PlayerEnteredWater>,
) {
    let spec = &cfg.tuning.player;
    let look = std::mem::take(&mut intent.look_delta);
    let scroll = std::mem::take(&mut intent.scroll);

    for (entity, mut transform, mut body, mut player) in &mut q_player {
        let position = transform.translation;
        let in_water = Regime::classify(&spec.buoyancy, position.y).in_water();
        player.locomotion.apply_pointer(spec, look, in_water);
        if scroll != 0 {
            player.locomotion.apply_scroll(spec, scroll);
        }

        let pose = Pose {
            translation: position,
            rotation: transform.rotation,
        };
        let tick = player.locomotion.tick(spec, pose, clock.dt());
        transform.rotation = tick.rotation;

        let out = tick.locomotion;
        body.gravity_scale = out.gravity_scale;
        if let Some(velocity) = out.velocity {
            body.velocity = velocity;
        }
        body.apply_impulse(out.impulse);
        match out.transition {
            Some(Transition::Jumped) => {
                debug!(?position, "player jumped");
                jumped.write(PlayerJumped { position });
            }
            Some(Transition::EnteredWater) => {
                debug!(?position, "player entered water");
                entered.write(PlayerEnteredWater { position });
            }
            None => {}
        }

        let pose = Pose {
            translation: position,
            rotation: tick.rotation,
        };
        if let Some(launch) = player
            .locomotion
            .try_fire(spec, clock.now(), intent.fire_held, pose)
        {
            launch_projectile(&mut commands, &cfg, clock.now(), entity, &launch);
        }
    }
}

pub fn track_camera(
    cfg: Res<Config>,
    q_player: Query<&Transform, With<Player>>,
    mut underwater: ResMut<CameraUnderwater>,
) {
    let Ok(transform) = q_player.single() else {
        return;
    };
    let camera_y = transform.transform_point(cfg.camera_offset).y;
    let now = is_camera_underwater(&cfg.tuning.player, camera_y);
    if underwater.0 != now {
        debug!(camera_y, underwater = now, "camera crossed the surface");
        underwater.0 = now;
    }
}
