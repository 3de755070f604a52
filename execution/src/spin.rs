//! Randomness seam for wheel draws.
//!
//! Randomness is an injected dependency: the wheel never reaches for an
//! ambient generator. Any [`rand::Rng`] works as a [`Spinner`] via the
//! blanket impl, and tests can substitute a scripted sequence (see
//! `mocks::ScriptedSpinner`).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use wheelhouse_types::Color;

/// Source of one pocket pick per call.
pub trait Spinner {
    /// Pick one color from `pockets`. Implementations backed by an RNG must
    /// pick uniformly with per-call independence.
    fn spin(&mut self, pockets: &[Color]) -> Color;
}

impl<R: Rng> Spinner for R {
    fn spin(&mut self, pockets: &[Color]) -> Color {
        pockets[self.gen_range(0..pockets.len())]
    }
}

/// Derive the generator for one stream of a run.
///
/// All streams of a run share the seed; workers in a parallel run take
/// distinct stream indices so their draw sequences never overlap. Stream 0 is
/// the sequential run.
pub fn trial_rng(seed: u64, stream: u64) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_and_stream_reproduce() {
        let mut a = trial_rng(1, 0);
        let mut b = trial_rng(1, 0);
        let draws_a: Vec<u32> = (0..32).map(|_| a.gen()).collect();
        let draws_b: Vec<u32> = (0..32).map(|_| b.gen()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_streams_diverge() {
        let mut a = trial_rng(1, 0);
        let mut b = trial_rng(1, 1);
        let draws_a: Vec<u32> = (0..32).map(|_| a.gen()).collect();
        let draws_b: Vec<u32> = (0..32).map(|_| b.gen()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_rng_spinner_stays_in_bounds() {
        let pockets = [Color::Black, Color::Red, Color::Green];
        let mut rng = trial_rng(9, 0);
        for _ in 0..1_000 {
            // Returning at all proves the index was in bounds; also confirm
            // every variant is reachable over a modest sample.
            let _ = rng.spin(&pockets);
        }
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            match rng.spin(&pockets) {
                Color::Black => seen[0] = true,
                Color::Red => seen[1] = true,
                Color::Green => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }
}
