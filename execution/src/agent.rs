//! Betting-agent state machine.
//!
//! One trial is one full transition:
//! 1. Validate any stake override (before touching state).
//! 2. Size the stake: `loss_streak * minimum_bet * 2` while recovering,
//!    `minimum_bet` at streak zero. The multiplicative-streak form is the
//!    required behavior; it is not the classic `minimum_bet * 2^streak`.
//! 3. Credit cashback (`CASHBACK_RATE` of the stake) before the draw,
//!    win or lose.
//! 4. Draw, then settle:
//!    - Win while recovering: streak resets, flat `minimum_bet` bonus.
//!    - Win at streak zero: even-money payout, `2 * stake`.
//!    - Loss: stake debited, streak grows; at `max_loss_streak` the cycle
//!      self-resets and the hit is counted, which caps worst-case stake
//!      growth.
//!
//! The agent runs indefinitely across trials; there is no terminal state.

use crate::spin::Spinner;
use crate::wheel::Wheel;
use thiserror::Error as ThisError;
use tracing::debug;
use wheelhouse_types::{AgentConfig, BetOutcome, Color, ConfigError, RoundStats};

/// Fraction of every stake credited unconditionally before the draw.
pub const CASHBACK_RATE: f64 = 0.005;

#[derive(Debug, ThisError, PartialEq)]
pub enum BetError {
    #[error("stake override must be positive and finite (got={got})")]
    InvalidStake { got: f64 },
}

/// Martingale-variant betting agent. One instance per sequential run.
#[derive(Clone, Debug)]
pub struct BettingAgent {
    config: AgentConfig,
    win_amount: f64,
    loss_amount: f64,
    loss_streak: usize,
    win_count: u64,
    loss_count: u64,
    max_streak_hits: u64,
}

impl BettingAgent {
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate_invariants()?;
        Ok(Self {
            config,
            win_amount: 0.0,
            loss_amount: 0.0,
            loss_streak: 0,
            win_count: 0,
            loss_count: 0,
            max_streak_hits: 0,
        })
    }

    /// Run one trial: size the stake, credit cashback, draw, settle.
    ///
    /// An invalid `stake_override` aborts the trial before any counter
    /// changes; accumulated statistics are untouched.
    pub fn place_bet(
        &mut self,
        target: Color,
        stake_override: Option<f64>,
        wheel: &Wheel,
        spinner: &mut impl Spinner,
    ) -> Result<BetOutcome, BetError> {
        let stake = match stake_override {
            Some(stake) => {
                if !(stake.is_finite() && stake > 0.0) {
                    return Err(BetError::InvalidStake { got: stake });
                }
                stake
            }
            None => {
                if self.loss_streak > 0 {
                    self.loss_streak as f64 * self.config.minimum_bet * 2.0
                } else {
                    self.config.minimum_bet
                }
            }
        };

        // Cashback is credited before the draw, regardless of the outcome.
        let cashback = CASHBACK_RATE * stake;
        self.win_amount += cashback;

        let drawn = wheel.draw(spinner);
        let won = drawn == target;
        if won {
            self.win_count += 1;
            if self.loss_streak > 0 {
                // Flat recovery bonus, not proportional to the escalated
                // stake.
                self.loss_streak = 0;
                self.win_amount += self.config.minimum_bet;
            } else {
                // Even-money payout on the original stake.
                self.win_amount += 2.0 * stake;
            }
        } else {
            self.loss_count += 1;
            self.loss_amount -= stake;
            self.loss_streak += 1;
            if self.loss_streak == self.config.max_loss_streak {
                self.max_streak_hits += 1;
                self.loss_streak = 0;
            }
        }

        debug!(
            stake,
            cashback,
            won,
            drawn = ?drawn,
            streak = self.loss_streak,
            "trial settled"
        );

        Ok(BetOutcome {
            stake,
            cashback,
            won,
            drawn,
        })
    }

    /// Current consecutive-loss streak since the last reset.
    pub fn loss_streak(&self) -> usize {
        self.loss_streak
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Snapshot of the accumulated counters.
    pub fn stats(&self) -> RoundStats {
        RoundStats {
            win_amount: self.win_amount,
            loss_amount: self.loss_amount,
            win_count: self.win_count,
            loss_count: self.loss_count,
            max_streak_hits: self.max_streak_hits,
        }
    }
}
