use aquatics::builtins::{arcade_tuning, patrol_boat_spec};
use aquatics::{AliveState, Bearing, BodyKind, EnemyAi, Pose, Progression, ProjectileKind};
use bevy_math::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sunk_boat_comes_back_at_its_spawn_point() {
    let tuning = arcade_tuning();
    let spec = &tuning.boat;
    let mut progression = Progression::new(&tuning.progression);
    let mut rng = StdRng::seed_from_u64(1);
    let spawn = Vec3::new(3.0, 0.0, -4.0);

    let (mut boat, start) = EnemyAi::spawn(spec, spawn, 0.0, &mut rng);
    assert!(boat.is_alive());
    assert_eq!(boat.spawn_point(), spawn);
    assert_eq!(start.pose.translation, spawn);

    let mut pose = start.pose;
    let tick = boat.tick(spec, pose, 2.0, &progression, &mut rng);
    assert!(tick.rotation_locked);

    let killed = boat
        .on_collision(spec, BodyKind::Projectile(ProjectileKind::Torpedo), 5.0, &mut progression)
        .expect("live boat should die");
    assert_eq!(killed.score_value, spec.score_value);
    assert_eq!(boat.state(), AliveState::Dead { since: 5.0 });
    assert_eq!(progression.kills(), 1);
    let old_target = boat.target().point;

    // The wreck drifts somewhere else in the meantime.
    pose.translation = Vec3::new(40.0, -6.0, 12.0);
    for now in [5.5, 9.0, 14.99] {
        let tick = boat.tick(spec, pose, now, &progression, &mut rng);
        assert!(!boat.is_alive(), "alive too early at {now}");
        assert!(tick.respawn.is_none());
        assert!(!tick.rotation_locked);
        assert_eq!(tick.gravity_scale, spec.corpse_submerged_gravity);
    }

    let tick = boat.tick(spec, pose, 15.0, &progression, &mut rng);
    assert!(boat.is_alive());
    let respawn = tick.respawn.expect("respawn due at t=15");
    assert_eq!(respawn.pose.translation, spawn);
    assert!(tick.rotation_locked);
    assert_ne!(boat.target().point, old_target);
}

#[test]
fn only_player_and_projectiles_are_lethal() {
    let spec = patrol_boat_spec();
    let mut progression = Progression::new(&arcade_tuning().progression);
    let mut rng = StdRng::seed_from_u64(2);
    let (mut boat, _) = EnemyAi::spawn(&spec, Vec3::ZERO, 0.0, &mut rng);

    assert_eq!(boat.on_collision(&spec, BodyKind::Scenery, 1.0, &mut progression), None);
    assert_eq!(boat.on_collision(&spec, BodyKind::Boat, 1.0, &mut progression), None);
    assert!(boat.is_alive());

    assert!(boat.on_collision(&spec, BodyKind::Player, 1.0, &mut progression).is_some());
    // A wreck is not killed twice.
    assert_eq!(
        boat.on_collision(&spec, BodyKind::Player, 1.1, &mut progression),
        None
    );
    assert_eq!(progression.kills(), 1);
}

#[test]
fn live_boat_steers_level_toward_its_target() {
    let spec = patrol_boat_spec();
    let progression = Progression::new(&arcade_tuning().progression);
    let mut rng = StdRng::seed_from_u64(9);
    let (mut boat, start) = EnemyAi::spawn(&spec, Vec3::new(0.0, -0.2, 0.0), 0.0, &mut rng);

    let tick = boat.tick(&spec, start.pose, 0.1, &progression, &mut rng);
    let v = tick.velocity.expect("submerged boats are driven");
    assert_eq!(v.y, 0.0);
    assert!(v.length() <= spec.speed + 1e-3);
    assert_eq!(tick.gravity_scale, spec.buoyancy.submerged_gravity);

    // Well past the acquisition cooldown the target goes stale.
    let tick = boat.tick(&spec, start.pose, 6.0, &progression, &mut rng);
    assert!(tick.facing.is_some());
}

#[test]
fn airborne_wreck_falls_hard() {
    let spec = patrol_boat_spec();
    let mut progression = Progression::new(&arcade_tuning().progression);
    let mut rng = StdRng::seed_from_u64(4);
    let (mut boat, _) = EnemyAi::spawn(&spec, Vec3::ZERO, 0.0, &mut rng);
    boat.kill(&spec, 1.0, &mut progression);

    let tick = boat.tick(&spec, Pose::from_translation(Vec3::new(0.0, 2.0, 0.0)), 1.5, &progression, &mut rng);
    assert_eq!(tick.gravity_scale, spec.corpse_airborne_gravity);
    assert_eq!(tick.velocity, None);
}

#[test]
fn surface_boat_reaches_targets_below_its_hull() {
    let mut spec = patrol_boat_spec();
    // Every target sits one unit under the surface the hull rides on.
    spec.wander.min_depth = -1.0;
    spec.wander.max_depth = -1.0;
    spec.wander.min_distance = 5.0;
    spec.wander.max_distance = 5.0;
    spec.wander.bearing = Bearing::Horizontal;
    spec.wander.retarget_probability = 0.0;
    spec.acquisition_cooldown = 1000.0;
    let progression = Progression::new(&arcade_tuning().progression);
    let mut rng = StdRng::seed_from_u64(43);
    let dt = 1.0 / 60.0;

    let (mut boat, start) = EnemyAi::spawn(&spec, Vec3::ZERO, 0.0, &mut rng);
    let mut pose = start.pose;
    let mut arrivals = 0;
    for i in 1..=600 {
        let goal = boat.target().point;
        assert_eq!(goal.y, -1.0);
        let tick = boat.tick(&spec, pose, i as f32 * dt, &progression, &mut rng);
        if boat.target().point != goal {
            let planar = Vec3::new(pose.translation.x - goal.x, 0.0, pose.translation.z - goal.z);
            assert!(planar.length() < spec.wander.arrival_radius, "left target early at {pose:?}");
            arrivals += 1;
        } else {
            let v = tick.velocity.unwrap_or(Vec3::ZERO);
            let to_goal = Vec3::new(goal.x - pose.translation.x, 0.0, goal.z - pose.translation.z);
            assert!(v.dot(to_goal) >= 0.0, "boat turned away from its target at tick {i}");
        }
        if let Some(facing) = tick.facing {
            pose.rotation = facing;
        }
        pose.translation += tick.velocity.unwrap_or(Vec3::ZERO) * dt;
        assert_eq!(pose.translation.y, 0.0);
    }
    // Five units at thirty per second: a fresh target roughly every ten ticks.
    assert!(arrivals > 20, "only {arrivals} arrivals");
}
