pub mod roulette;
pub use roulette::{AgentConfig, BetOutcome, Color, ConfigError};
pub mod stats;
pub use stats::RoundStats;
