//! European wheel layout and draw.
//!
//! Pocket layout:
//! Indices 0-35 alternate Black/Red in pairs, index 36 is the single Green.
//! Composition is fixed at construction and never mutated: exactly 18 Black,
//! 18 Red, 1 Green.

use crate::spin::Spinner;
use wheelhouse_types::Color;

/// Total pockets on a European wheel.
pub const POCKETS: usize = 37;

/// Black/Red pairs preceding the green pocket.
const COLOR_PAIRS: usize = (POCKETS - 1) / 2;

/// The 37-pocket European wheel.
#[derive(Clone, Debug)]
pub struct Wheel {
    pockets: [Color; POCKETS],
}

impl Wheel {
    pub fn new() -> Self {
        let mut pockets = [Color::Green; POCKETS];
        for pair in 0..COLOR_PAIRS {
            pockets[pair * 2] = Color::Black;
            pockets[pair * 2 + 1] = Color::Red;
        }
        Self { pockets }
    }

    /// Draw one pocket color uniformly at random.
    ///
    /// Pure sampling: no wheel state changes, and successive calls are
    /// independent given an independent `spinner`.
    pub fn draw(&self, spinner: &mut impl Spinner) -> Color {
        spinner.spin(&self.pockets)
    }

    /// One display token per pocket, in pocket order. Cosmetic only.
    pub fn render(&self) -> String {
        self.pockets.iter().map(Color::token).collect()
    }

    /// The pocket sequence, for inspection.
    pub fn pockets(&self) -> &[Color] {
        &self.pockets
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}
