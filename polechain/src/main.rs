#![deny(clippy::all, clippy::pedantic)]
//! # polechain
//!
//! Command-line driver for the chain cart-pole simulator. Loads an optional
//! JSON environment config, applies command-line overrides, and runs a few
//! episodes with a built-in controller under a step horizon.
//!
//! ```text
//! polechain --episodes 10 --links 2 --controller random --seed 7
//! polechain --config chain.json --integrator semi-implicit-euler
//! ```

mod app;
mod controller;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use physics::Integrator;
use rl::EnvConfig;

use crate::app::RunSettings;
use crate::controller::Controller;

#[derive(Parser, Debug)]
#[command(version, about = "Run chain cart-pole episodes")]
struct Args {
    /// JSON environment config; defaults are used for anything missing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of episodes to run
    #[arg(long, default_value_t = 5)]
    episodes: u32,

    /// Maximum steps per episode
    #[arg(long, default_value_t = 200)]
    horizon: u32,

    /// Seed for the reset generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of links, each as heavy as link 1
    #[arg(long)]
    links: Option<usize>,

    /// Override the integration scheme
    #[arg(long, value_enum)]
    integrator: Option<IntegratorArg>,

    /// Controller choosing the pushes
    #[arg(long, value_enum, default_value_t = ControllerArg::Lean)]
    controller: ControllerArg,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IntegratorArg {
    Euler,
    SemiImplicitEuler,
}

impl From<IntegratorArg> for Integrator {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::Euler => Integrator::Euler,
            IntegratorArg::SemiImplicitEuler => Integrator::SemiImplicitEuler,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ControllerArg {
    Random,
    Lean,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    if args.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut controller = match args.controller {
        ControllerArg::Random => Controller::random(args.seed.unwrap_or_else(|| fastrand::u64(..))),
        ControllerArg::Lean => Controller::Lean,
    };
    let settings = RunSettings {
        episodes: args.episodes,
        horizon: args.horizon,
        seed: args.seed,
    };
    app::run(&config, &settings, &mut controller)?;
    Ok(())
}

fn load_config(args: &Args) -> Result<EnvConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EnvConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EnvConfig::default(),
    };
    if let Some(links) = args.links {
        config.physics = config.physics.with_links(links).context("--links")?;
    }
    if let Some(integrator) = args.integrator {
        config.physics.integrator = integrator.into();
    }
    Ok(config)
}
