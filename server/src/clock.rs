use bevy::prelude::*;
use rand::rngs::StdRng;

/// Fixed-step simulation clock. Elapsed time is derived from the tick count so
/// it does not drift.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimClock {
    tick: u64,
    dt: f64,
}

impl SimClock {
    pub fn new(tick_hz: f64) -> Self {
        Self {
            tick: 0,
            dt: tick_hz.recip(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn dt(&self) -> f32 {
        self.dt as f32
    }

    /// Seconds since startup at the current tick.
    pub fn now(&self) -> f32 {
        (self.tick as f64 * self.dt) as f32
    }
}

/// The only random source in the simulation, seeded from the config.
#[derive(Resource, Deref, DerefMut)]
pub struct SimRng(pub StdRng);

pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.tick += 1;
}
