//! Test doubles for forcing wheel outcomes.

use crate::spin::Spinner;
use wheelhouse_types::Color;

/// Replays a fixed color sequence, cycling when exhausted. Lets tests force
/// exact win/loss runs regardless of the wheel layout.
pub struct ScriptedSpinner {
    sequence: Vec<Color>,
    next: usize,
}

impl ScriptedSpinner {
    /// # Panics
    /// Panics if `sequence` is empty.
    pub fn new(sequence: Vec<Color>) -> Self {
        assert!(!sequence.is_empty(), "sequence must have at least one color");
        Self { sequence, next: 0 }
    }
}

impl Spinner for ScriptedSpinner {
    fn spin(&mut self, _pockets: &[Color]) -> Color {
        let color = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        color
    }
}
