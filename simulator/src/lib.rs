//! Monte Carlo driver for the martingale roulette simulation.
//!
//! A run executes a fixed number of trials against one wheel, alternating the
//! target color by trial parity, and returns the merged statistics. The
//! default is fully sequential: one agent, one generator stream, each trial
//! settled before the next begins. With `workers > 1` the trial-index range
//! is split into contiguous chunks, each worker owns an independent agent and
//! its own generator stream, and the per-worker statistics are merged after
//! all workers join. Martingale state is order-dependent and is never shared
//! across workers.

mod report;
pub use report::{append_csv, summary};

use anyhow::Result;
use tracing::{debug, info};
use wheelhouse_execution::{trial_rng, BetError, BettingAgent, Wheel};
use wheelhouse_types::{AgentConfig, Color, RoundStats};

/// Run parameters loadable from a YAML file (`--config`).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub trials: u64,
    pub minimum_bet: f64,
    pub max_loss_streak: usize,
    pub seed: u64,
    pub workers: usize,
    pub log_level: String,
    pub csv: Option<String>,
}

/// Runtime parameters for one simulation run.
#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    pub trials: u64,
    pub minimum_bet: f64,
    pub max_loss_streak: usize,
    pub seed: u64,
    pub workers: usize,
}

/// Target color for a global trial index: even trials bet red, odd black.
fn target_color(trial: u64) -> Color {
    if trial % 2 == 0 {
        Color::Red
    } else {
        Color::Black
    }
}

/// Settle trials `[start, end)` on a dedicated agent and generator stream.
///
/// Parity follows the global trial index, so a chunked run places the same
/// bets as a sequential one.
fn run_range(
    mut agent: BettingAgent,
    seed: u64,
    stream: u64,
    start: u64,
    end: u64,
    progress_every: Option<u64>,
) -> Result<RoundStats, BetError> {
    let wheel = Wheel::new();
    let mut rng = trial_rng(seed, stream);

    for trial in start..end {
        agent.place_bet(target_color(trial), None, &wheel, &mut rng)?;

        if let Some(every) = progress_every {
            if (trial - start) % every == 0 {
                let stats = agent.stats();
                debug!(
                    trial,
                    wins = stats.win_count,
                    losses = stats.loss_count,
                    net = stats.net_profit(),
                    "progress"
                );
            }
        }
    }

    Ok(agent.stats())
}

/// Execute a full run and return the merged statistics.
pub fn run(config: &RunConfig) -> Result<RoundStats> {
    // Validate once; workers run clones of the fresh agent.
    let agent = BettingAgent::new(AgentConfig::new(
        config.minimum_bet,
        config.max_loss_streak,
    ))?;

    if config.trials == 0 {
        return Ok(RoundStats::default());
    }

    let workers = (config.workers.max(1) as u64).min(config.trials);
    if workers == 1 {
        // ~1% progress cadence on long sequential runs.
        let progress_every = (config.trials / 100).max(1);
        let stats = run_range(agent, config.seed, 0, 0, config.trials, Some(progress_every))?;
        return Ok(stats);
    }

    let chunk = (config.trials + workers - 1) / workers;
    let results: Vec<Result<RoundStats, BetError>> = std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for worker in 0..workers {
            let start = worker * chunk;
            if start >= config.trials {
                break;
            }
            let end = ((worker + 1) * chunk).min(config.trials);
            let agent = agent.clone();
            let seed = config.seed;
            handles.push(scope.spawn(move || run_range(agent, seed, worker, start, end, None)));
        }
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread panicked"))
            .collect()
    });

    let mut stats = RoundStats::default();
    for result in results {
        let local = result?;
        stats.merge(&local);
    }
    info!(workers, trials = config.trials, "merged worker statistics");

    Ok(stats)
}
