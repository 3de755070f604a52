use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};
use wheelhouse_execution::Wheel;
use wheelhouse_simulator::{append_csv, run, summary, Config, RunConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Martingale roulette Monte Carlo simulator")]
struct Args {
    /// YAML config file; when present its values replace the flags below.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "10000000")]
    trials: u64,

    #[arg(long, default_value = "1.0")]
    minimum_bet: f64,

    #[arg(long, default_value = "5")]
    max_loss_streak: usize,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// 1 = fully sequential. More workers split the trial range across
    /// independent agents and merge their statistics.
    #[arg(long, default_value = "1")]
    workers: usize,

    /// Append the final statistics record to this file.
    #[arg(long)]
    csv: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the pocket layout before running. Cosmetic only.
    #[arg(long)]
    show_wheel: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        if let Some(path) = &self.config {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("could not read config file {}", path.display()))?;
            let config = serde_yaml::from_str(&raw)
                .with_context(|| format!("could not parse config file {}", path.display()))?;
            return Ok(config);
        }
        Ok(Config {
            trials: self.trials,
            minimum_bet: self.minimum_bet,
            max_loss_streak: self.max_loss_streak,
            seed: self.seed,
            workers: self.workers,
            log_level: self.log_level,
            csv: self.csv.map(|path| path.display().to_string()),
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let show_wheel = args.show_wheel;
    let config = args.into_config()?;

    // Setup logging
    let level = Level::from_str(&config.log_level)
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    info!(
        trials = config.trials,
        minimum_bet = config.minimum_bet,
        max_loss_streak = config.max_loss_streak,
        seed = config.seed,
        workers = config.workers,
        "starting simulation"
    );

    if show_wheel {
        println!("{}", Wheel::new().render());
    }

    let stats = run(&RunConfig {
        trials: config.trials,
        minimum_bet: config.minimum_bet,
        max_loss_streak: config.max_loss_streak,
        seed: config.seed,
        workers: config.workers,
    })?;

    println!("{}", summary(&stats));

    if let Some(path) = config.csv.as_deref() {
        let path = PathBuf::from(path);
        append_csv(&path, &stats)
            .with_context(|| format!("failed to append statistics to {}", path.display()))?;
        info!(path = %path.display(), "statistics appended");
    }

    Ok(())
}
