use aquatics::builtins::{arcade_tuning, fish_swarm_spec};
use aquatics::{FishSwarm, SimTuning, TuningError};
use bevy_math::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn swarm_spawns_inside_its_box_with_banded_targets() {
    let mut spec = fish_swarm_spec();
    spec.count = 300;
    let swarm = FishSwarm::new(&spec, &mut StdRng::seed_from_u64(12));

    assert_eq!(swarm.len(), 300);
    assert_eq!(swarm.phases().len(), 300);
    for (pose, target) in swarm.poses().iter().zip(swarm.targets()) {
        let p = pose.translation;
        assert!(p.x.abs() <= spec.spawn_half_extent && p.z.abs() <= spec.spawn_half_extent);
        // The school never starts above the surface.
        assert!(p.y <= spec.wander.min_depth && p.y >= spec.wander.max_depth, "spawned at {p:?}");
        assert!(target.point.y <= spec.wander.min_depth && target.point.y >= spec.wander.max_depth);
    }
    assert!(swarm.phases().iter().flatten().all(|p| (0.0..1.0).contains(p)));
}

#[test]
fn full_school_spawns_under_water() {
    let spec = fish_swarm_spec();
    let swarm = FishSwarm::new(&spec, &mut StdRng::seed_from_u64(12));
    let above = swarm.poses().iter().filter(|p| p.translation.y > 0.0).count();
    assert_eq!(above, 0);
}

#[test]
fn fish_near_the_player_dart_faster() {
    let spec = fish_swarm_spec();
    let mut swarm = FishSwarm::new(&spec, &mut StdRng::seed_from_u64(3));
    // Put the player right on top of one fish so someone is always close.
    let player = swarm.poses()[0].translation;
    let before: Vec<Vec3> = swarm.poses().iter().map(|p| p.translation).collect();

    swarm.tick(&spec, Some(player), 1.0 / 60.0, &mut StdRng::seed_from_u64(4));

    let step = spec.wander.step;
    let mut near_seen = false;
    for (start, pose) in before.iter().zip(swarm.poses()) {
        let moved = start.distance(pose.translation);
        if start.distance(player) < spec.wander.avoid_radius {
            near_seen = true;
            assert!(moved <= step * spec.wander.avoid_scale + 1e-4);
        } else {
            assert!(moved <= step + 1e-4, "calm fish moved {moved}");
        }
    }
    assert!(near_seen, "no fish started near the player");
}

#[test]
fn default_tuning_is_valid() {
    assert_eq!(SimTuning::default().validate(), Ok(()));
}

#[test]
fn bad_tuning_is_rejected() {
    let mut inverted = arcade_tuning();
    inverted.swarm.wander.min_depth = -100.0;
    inverted.swarm.wander.max_depth = -3.0;
    assert!(matches!(
        inverted.validate(),
        Err(TuningError::DepthBand { field: "swarm.wander", .. })
    ));

    let mut negative = arcade_tuning();
    negative.boat.wander.min_distance = -1.0;
    assert!(matches!(negative.validate(), Err(TuningError::WanderDistance { .. })));

    let mut coin = arcade_tuning();
    coin.swarm.wander.retarget_probability = 1.5;
    assert!(matches!(coin.validate(), Err(TuningError::Probability { .. })));

    let mut growth = arcade_tuning();
    growth.progression.decay_factor = 1.2;
    assert_eq!(growth.validate(), Err(TuningError::DecayFactor(1.2)));

    let mut speeds = arcade_tuning();
    speeds.player.default_speed = 80.0;
    assert!(matches!(speeds.validate(), Err(TuningError::SpeedBounds { .. })));
}
