use aquatics::{Progression, ProgressionSpec};

fn spec() -> ProgressionSpec {
    ProgressionSpec {
        initial_respawn_cooldown: 10.0,
        kills_per_decay: 30,
        decay_factor: 0.9,
    }
}

#[test]
fn every_thirtieth_kill_tightens_the_cooldown() {
    let mut progression = Progression::new(&spec());
    for _ in 0..29 {
        assert!(!progression.register_kill());
    }
    let before = progression.respawn_cooldown();
    assert_eq!(before, 10.0);
    assert!(progression.register_kill());
    assert!((progression.respawn_cooldown() - before * 0.9).abs() < 1e-5);

    for _ in 0..30 {
        progression.register_kill();
    }
    assert_eq!(progression.kills(), 60);
    assert!((progression.respawn_cooldown() - 10.0 * 0.81).abs() < 1e-4);
}

#[test]
fn cooldown_never_grows() {
    let mut progression = Progression::new(&spec());
    let mut last = progression.respawn_cooldown();
    for _ in 0..500 {
        progression.register_kill();
        assert!(progression.respawn_cooldown() <= last);
        last = progression.respawn_cooldown();
    }
}
