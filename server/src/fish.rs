use aquatics::FishSwarm;
use bevy::prelude::*;
use tracing::{info, trace};

use crate::clock::{SimClock, SimRng};
use crate::config::Config;
use crate::player::Player;

/// The fish school. Its poses are the instance buffer a renderer would draw.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct School(pub FishSwarm);

pub fn spawn_school(mut commands: Commands, cfg: Res<Config>, mut rng: ResMut<SimRng>) {
    let school = FishSwarm::new(&cfg.tuning.swarm, &mut rng.0);
    info!(count = school.len(), "fish school spawned");
    commands.insert_resource(School(school));
}

pub fn swim_school(
    cfg: Res<Config>,
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
    school: Option<ResMut<School>>,
    q_player: Query<&Transform, With<Player>>,
) {
    let Some(mut school) = school else {
        return;
    };
    let avoid = q_player.single().ok().map(|t| t.translation);
    let retargeted = school.tick(&cfg.tuning.swarm, avoid, clock.dt(), &mut rng.0);
    trace!(retargeted, "school advanced");
}
