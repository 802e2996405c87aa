use aquatics::builtins::{large_torpedo_spec, torpedo_spec};
use aquatics::{ArtifactSpec, Artifact, BodyKind, DestroyCause, Projectile, ProjectileKind};
use bevy_math::{Quat, Vec3};

#[test]
fn collision_and_timeout_in_the_same_tick_leave_one_artifact() {
    let spec = torpedo_spec();
    let mut torpedo = Projectile::spawn(ProjectileKind::Torpedo, &spec, 0.0);
    let now = spec.lifetime + 1.0;

    let mut artifacts = 0;
    if let Some(d) = torpedo.on_collision(&spec, BodyKind::Scenery, false) {
        assert_eq!(d.cause, DestroyCause::Collision);
        artifacts += usize::from(d.spawn_artifact);
    }
    if let Some(tick) = torpedo.tick(&spec, -1.0, now) {
        if let Some(d) = tick.destruction {
            artifacts += usize::from(d.spawn_artifact);
        }
    }
    if let Some(d) = torpedo.destroy(&spec, DestroyCause::Timeout, false) {
        artifacts += usize::from(d.spawn_artifact);
    }

    assert!(torpedo.is_destroyed());
    assert_eq!(artifacts, 1);
}

#[test]
fn small_torpedo_times_out_with_an_explosion() {
    let spec = torpedo_spec();
    let mut torpedo = Projectile::spawn(ProjectileKind::Torpedo, &spec, 2.0);
    assert_eq!(torpedo.lifetime().spawned_at(), 2.0);
    assert!((torpedo.lifetime().age(21.9) - 19.9).abs() < 1e-4);

    let alive = torpedo.tick(&spec, -3.0, 21.9).unwrap();
    assert_eq!(alive.destruction, None);
    assert_eq!(alive.gravity_scale, 0.0);

    let last = torpedo.tick(&spec, -3.0, 22.1).unwrap();
    let d = last.destruction.unwrap();
    assert_eq!(d.cause, DestroyCause::Timeout);
    assert!(d.spawn_artifact);
    assert!(!d.kill_struck_boat);

    assert_eq!(torpedo.tick(&spec, -3.0, 22.2), None);
}

#[test]
fn airborne_projectiles_fall_and_tumble() {
    let spec = torpedo_spec();
    let mut torpedo = Projectile::spawn(ProjectileKind::Torpedo, &spec, 0.0);
    let tick = torpedo.tick(&spec, 0.5, 0.1).unwrap();
    assert_eq!(tick.gravity_scale, spec.airborne_gravity);
    assert_eq!(tick.tumble_rate, spec.tumble_rate);
    assert_eq!(Projectile::INITIAL_GRAVITY_SCALE, 0.0);
}

#[test]
fn small_torpedo_never_claims_the_kill() {
    let spec = torpedo_spec();
    let mut torpedo = Projectile::spawn(ProjectileKind::Torpedo, &spec, 0.0);
    let d = torpedo.on_collision(&spec, BodyKind::Boat, true).unwrap();
    assert!(!d.kill_struck_boat);
    assert!(d.spawn_artifact);
}

#[test]
fn large_torpedo_only_explodes_on_a_live_boat() {
    let spec = large_torpedo_spec();

    let mut hit = Projectile::spawn(ProjectileKind::LargeTorpedo, &spec, 0.0);
    let d = hit.on_collision(&spec, BodyKind::Boat, true).unwrap();
    assert!(d.kill_struck_boat);
    assert!(d.spawn_artifact);

    let mut wreck = Projectile::spawn(ProjectileKind::LargeTorpedo, &spec, 0.0);
    let d = wreck.on_collision(&spec, BodyKind::Boat, false).unwrap();
    assert!(!d.kill_struck_boat);
    assert!(!d.spawn_artifact);

    let mut rock = Projectile::spawn(ProjectileKind::LargeTorpedo, &spec, 0.0);
    let d = rock.on_collision(&spec, BodyKind::Scenery, false).unwrap();
    assert!(!d.spawn_artifact);

    let mut stray = Projectile::spawn(ProjectileKind::LargeTorpedo, &spec, 0.0);
    let d = stray.tick(&spec, -1.0, 25.0).unwrap().destruction.unwrap();
    assert_eq!(d.cause, DestroyCause::Timeout);
    assert!(!d.spawn_artifact);
}

#[test]
fn launch_impulse_adds_shooter_speed_along_forward() {
    let spec = torpedo_spec();
    let straight = Projectile::launch_impulse(&spec, Quat::IDENTITY, 25.0);
    assert!(straight.abs_diff_eq(Vec3::new(0.0, 0.0, -65.0), 1e-4));

    let turned = Projectile::launch_impulse(&spec, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2), 10.0);
    assert!(turned.abs_diff_eq(Vec3::new(-50.0, 0.0, 0.0), 1e-4));
}

#[test]
fn artifact_expires_exactly_once() {
    let spec = ArtifactSpec { lifetime: 5.0 };
    let mut artifact = Artifact::spawn(&spec, 1.0);
    assert!(!artifact.tick(5.9));
    assert!(artifact.tick(6.1));
    assert!(!artifact.tick(6.2));
}
