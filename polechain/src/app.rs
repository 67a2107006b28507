//! # Episode Runner
//!
//! Drives a [`ChainCartPole`] through a number of episodes under a step
//! horizon and reports how each one went. The kernel never limits episode
//! length on its own; [`TimeLimit`] supplies the horizon here.

use anyhow::{Context, Result};
use rl::{ChainCartPole, Env, EnvConfig, TimeLimit};

use crate::controller::Controller;

/// Knobs of a run that are not part of the environment itself.
#[derive(Debug)]
pub struct RunSettings {
    pub episodes: u32,
    pub horizon: u32,
    pub seed: Option<u64>,
}

/// Summary of one finished episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeReport {
    pub episode: u32,
    pub steps: u32,
    pub total_reward: f64,
    pub truncated: bool,
}

/// Runs `settings.episodes` episodes and logs a line per episode.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the horizon is zero.
pub fn run(
    config: &EnvConfig,
    settings: &RunSettings,
    controller: &mut Controller,
) -> Result<Vec<EpisodeReport>> {
    let env = ChainCartPole::new(config).context("building the environment")?;
    let mut env = TimeLimit::new(env, settings.horizon).context("applying the horizon")?;
    let seed = env.seed(settings.seed);
    tracing::info!(
        seed,
        links = env.inner().params().links(),
        integrator = ?env.inner().integrator(),
        horizon = settings.horizon,
        "starting {} episodes",
        settings.episodes
    );

    let mut reports = Vec::new();
    for episode in 0..settings.episodes {
        let mut state = env.reset();
        let mut total_reward = 0.0;
        loop {
            let push = controller.act(&state);
            let transition = env.step(push.index())?;
            total_reward += transition.reward;
            state = transition.state;
            if transition.done {
                break;
            }
        }
        let report = EpisodeReport {
            episode,
            steps: env.elapsed(),
            total_reward,
            truncated: env.truncated(),
        };
        tracing::info!(
            episode = report.episode,
            steps = report.steps,
            reward = report.total_reward,
            truncated = report.truncated,
            "episode finished"
        );
        reports.push(report);
    }
    env.close();

    if !reports.is_empty() {
        let mean = reports.iter().map(|r| r.total_reward).sum::<f64>() / f64::from(settings.episodes);
        tracing::info!(mean_reward = mean, "run complete");
    }
    Ok(reports)
}
