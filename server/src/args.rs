use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone, Default)]
#[command(name = "aquatics-server")]
#[command(about = "Headless host for the aquatic simulation", long_about = None)]
pub struct Args {
    /// TOML config file; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Exit after this many fixed ticks
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Override the RNG seed from the config
    #[arg(long)]
    pub seed: Option<u64>,
}
