//! Linear congruential generator driving pipe gap placement.
//!
//! Uses the Numerical Recipes constants, state advances as
//! `state = 1664525 * state + 1013904223 (mod 2^32)`.
//!
//! Examples:
//! ```
//! use flappy::rng::Lcg;
//!
//! let mut rng = Lcg::new(42);
//! assert_eq!(rng.next_u32(), 1_083_814_273);
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const MULTIPLIER: u32 = 1_664_525;
    pub const INCREMENT: u32 = 1_013_904_223;

    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

/// Never ends
impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
