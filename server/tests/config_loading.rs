use std::path::PathBuf;

use bevy::math::Vec3;
use server::{load_config, Args, Config};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("aquatics-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn no_path_means_defaults() {
    let cfg = load_config(None).unwrap();
    assert_eq!(cfg.tick_hz, 60.0);
    assert_eq!(cfg.boat_spawns.len(), 4);
    assert_eq!(cfg.tuning.progression.kills_per_decay, 30);
}

#[test]
fn partial_file_keeps_the_rest() {
    let path = scratch_file(
        "partial.toml",
        r#"
tick_hz = 30.0
seed = 99
player_spawn = [0.0, 5.0, 0.0]
boat_spawns = [[10.0, 0.0, 10.0]]

[tuning.progression]
initial_respawn_cooldown = 4.0
kills_per_decay = 5
decay_factor = 0.5
"#,
    );
    let cfg = load_config(Some(path.as_path())).unwrap();
    assert_eq!(cfg.tick_hz, 30.0);
    assert_eq!(cfg.seed, 99);
    assert_eq!(cfg.player_spawn, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(cfg.boat_spawns, vec![Vec3::new(10.0, 0.0, 10.0)]);
    assert_eq!(cfg.tuning.progression.kills_per_decay, 5);
    // Untouched sections fall back to the arcade tuning.
    assert_eq!(cfg.tuning.player.default_speed, 25.0);
    assert_eq!(cfg.gravity, Config::default().gravity);
    let _ = std::fs::remove_file(path);
}

#[test]
fn out_of_range_tuning_is_an_error() {
    let path = scratch_file(
        "bad.toml",
        r#"
[tuning.progression]
initial_respawn_cooldown = 10.0
kills_per_decay = 30
decay_factor = 1.5
"#,
    );
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("decay factor"), "{err:#}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_names_the_path() {
    let path = PathBuf::from("/definitely/not/here.toml");
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("here.toml"));
}

#[test]
fn flags_override_the_file() {
    let mut cfg = Config::default();
    cfg.apply_args(&Args {
        config: None,
        ticks: Some(120),
        seed: Some(7),
    });
    assert_eq!(cfg.max_ticks, Some(120));
    assert_eq!(cfg.seed, 7);
}
