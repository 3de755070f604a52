use thiserror::Error as ThisError;

/// Pocket color on a European wheel.
///
/// A closed set: invalid colors are unrepresentable, so neither the wheel
/// layout nor a bet target can hold anything outside these three variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
}

impl Color {
    /// Single-character display token, used only for wheel rendering.
    pub fn token(&self) -> char {
        match self {
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// Result of one settled trial. Consumed immediately; never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetOutcome {
    /// Amount put at risk this trial (override or streak-derived).
    pub stake: f64,
    /// Unconditional pre-draw credit, a fixed fraction of the stake.
    pub cashback: f64,
    /// Whether the drawn color matched the bet target.
    pub won: bool,
    /// The color the wheel produced.
    pub drawn: Color,
}

#[derive(Debug, ThisError, PartialEq)]
pub enum ConfigError {
    #[error("minimum_bet must be positive and finite (got={got})")]
    InvalidMinimumBet { got: f64 },
    #[error("max_loss_streak must be at least 1")]
    ZeroMaxLossStreak,
}

/// Immutable-after-construction betting parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentConfig {
    /// Base stake placed at streak zero; also the flat recovery bonus.
    pub minimum_bet: f64,
    /// Consecutive-loss threshold at which the recovery cycle restarts.
    pub max_loss_streak: usize,
}

impl AgentConfig {
    pub fn new(minimum_bet: f64, max_loss_streak: usize) -> Self {
        Self {
            minimum_bet,
            max_loss_streak,
        }
    }

    pub fn validate_invariants(&self) -> Result<(), ConfigError> {
        if !(self.minimum_bet.is_finite() && self.minimum_bet > 0.0) {
            return Err(ConfigError::InvalidMinimumBet {
                got: self.minimum_bet,
            });
        }
        if self.max_loss_streak == 0 {
            return Err(ConfigError::ZeroMaxLossStreak);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            minimum_bet: 1.0,
            max_loss_streak: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(AgentConfig::default().validate_invariants(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_minimum_bet() {
        let config = AgentConfig::new(0.0, 5);
        assert_eq!(
            config.validate_invariants(),
            Err(ConfigError::InvalidMinimumBet { got: 0.0 })
        );

        let config = AgentConfig::new(-1.0, 5);
        assert!(matches!(
            config.validate_invariants(),
            Err(ConfigError::InvalidMinimumBet { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_minimum_bet() {
        let config = AgentConfig::new(f64::NAN, 5);
        assert!(matches!(
            config.validate_invariants(),
            Err(ConfigError::InvalidMinimumBet { .. })
        ));

        let config = AgentConfig::new(f64::INFINITY, 5);
        assert!(matches!(
            config.validate_invariants(),
            Err(ConfigError::InvalidMinimumBet { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_max_loss_streak() {
        let config = AgentConfig::new(1.0, 0);
        assert_eq!(
            config.validate_invariants(),
            Err(ConfigError::ZeroMaxLossStreak)
        );
    }

    #[test]
    fn test_color_tokens() {
        assert_eq!(Color::Black.token(), 'B');
        assert_eq!(Color::Red.token(), 'R');
        assert_eq!(Color::Green.token(), 'G');
    }
}
