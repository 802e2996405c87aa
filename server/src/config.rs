use std::path::Path;

use anyhow::{Context, Result};
use aquatics::SimTuning;
use bevy::math::Vec3;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::Args;

/// Collision sphere radii per body kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderRadii {
    pub player: f32,
    pub boat: f32,
    pub projectile: f32,
}

impl Default for ColliderRadii {
    fn default() -> Self {
        Self {
            player: 1.0,
            boat: 2.5,
            projectile: 0.3,
        }
    }
}

#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_hz: f64,
    pub seed: u64,
    /// World gravity; body gravity scales multiply it.
    pub gravity: Vec3,
    pub player_spawn: Vec3,
    pub boat_spawns: Vec<Vec3>,
    /// Camera position relative to the player.
    pub camera_offset: Vec3,
    pub max_ticks: Option<u64>,
    pub colliders: ColliderRadii,
    pub tuning: SimTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            seed: 0x5eed,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            player_spawn: Vec3::new(0.0, -2.0, 0.0),
            boat_spawns: vec![
                Vec3::new(40.0, 0.0, -40.0),
                Vec3::new(-40.0, 0.0, -40.0),
                Vec3::new(40.0, 0.0, 40.0),
                Vec3::new(-40.0, 0.0, 40.0),
            ],
            camera_offset: Vec3::new(0.0, 1.5, 6.0),
            max_ticks: None,
            colliders: ColliderRadii::default(),
            tuning: SimTuning::default(),
        }
    }
}

impl Config {
    /// Command-line flags win over the file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ticks) = args.ticks {
            self.max_ticks = Some(ticks);
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.tick_hz.is_finite() && self.tick_hz > 0.0,
            "tick_hz must be positive, got {}",
            self.tick_hz
        );
        self.tuning.validate().context("invalid tuning")?;
        Ok(())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let cfg = match path {
        None => Config::default(),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
    };
    cfg.validate()?;
    Ok(cfg)
}
