//! Bird and pipe obstacles.
//!
//! All entities live for the whole program. Pipes form a fixed pool of
//! [`PIPE_COUNT`] slots which are respawned in place once they scroll off
//! screen.

use core::ops::{Index, IndexMut};

use crate::consts::*;
use crate::rng::Lcg;
use crate::surface::Rect;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Bird {
    /// Left edge, fixed after spawn
    pub x: i32,
    /// Top edge, never negative
    pub y: i32,
    /// Vertical velocity in pixels per frame, positive is down
    pub vy: i32,
}

impl Bird {
    pub const fn spawn() -> Self {
        Self {
            x: BIRD_X,
            y: SCREEN_HEIGHT / 2,
            vy: JUMP_STRENGTH,
        }
    }

    /// Override current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.vy = JUMP_STRENGTH;
    }

    pub fn bottom(&self) -> i32 {
        self.y + BIRD_HEIGHT
    }

    /// Area covered by the bird if its top edge were at `y`
    pub fn footprint_at(&self, y: i32) -> Rect {
        Rect::new(self.x, y, self.x + BIRD_WIDTH - 1, y + BIRD_HEIGHT - 1)
    }

    pub fn footprint(&self) -> Rect {
        self.footprint_at(self.y)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::spawn()
    }
}

/// Draw a gap center in `[PIPE_GAP / 2, SCREEN_HEIGHT - PIPE_GAP / 2)`
pub fn random_gap_y(rng: &mut Lcg) -> i32 {
    (rng.next_u32() % (SCREEN_HEIGHT - PIPE_GAP) as u32) as i32 + PIPE_GAP / 2
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Pipe {
    /// Left edge
    pub x: i32,
    /// Vertical center of the gap
    pub gap_y: i32,
    /// Whether the bird already passed this pipe since it last spawned
    pub scored: bool,
}

impl Pipe {
    pub fn spawn(x: i32, rng: &mut Lcg) -> Self {
        Self {
            x,
            gap_y: random_gap_y(rng),
            scored: false,
        }
    }

    /// Reuse this slot for a fresh pipe at `x`
    pub fn respawn(&mut self, x: i32, rng: &mut Lcg) {
        *self = Self::spawn(x, rng);
    }

    /// One past the rightmost column
    pub fn right(&self) -> i32 {
        self.x + PIPE_WIDTH
    }

    pub fn gap_top(&self) -> i32 {
        self.gap_y - PIPE_GAP / 2
    }

    pub fn gap_bottom(&self) -> i32 {
        self.gap_y + PIPE_GAP / 2
    }

    /// Upper and lower pipe segments, as drawn
    ///
    /// Each segment reaches the gap edge row itself.
    pub fn footprint(&self) -> [Rect; 2] {
        let x2 = self.x + PIPE_WIDTH - 1;
        [
            Rect::new(self.x, 0, x2, self.gap_top()),
            Rect::new(self.x, self.gap_bottom(), x2, SCREEN_HEIGHT - 1),
        ]
    }
}

/// Fixed pool of pipes
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Pipes([Pipe; PIPE_COUNT]);

impl Pipes {
    /// X of the second pipe at game start, keeps the two pipes staggered
    pub const SECOND_SPAWN_X: i32 = SCREEN_WIDTH + SCREEN_WIDTH / 2 + PIPE_WIDTH / 2;

    /// Initial layout: first pipe at the right screen edge, second one
    /// at [`Pipes::SECOND_SPAWN_X`]. Gaps are drawn in pool order.
    pub fn spawn(rng: &mut Lcg) -> Self {
        let first = Pipe::spawn(SCREEN_WIDTH, rng);
        let second = Pipe::spawn(Self::SECOND_SPAWN_X, rng);
        Self([first, second])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pipe> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for Pipes {
    type Output = Pipe;

    fn index(&self, n: usize) -> &Pipe {
        &self.0[n]
    }
}

impl IndexMut<usize> for Pipes {
    fn index_mut(&mut self, n: usize) -> &mut Pipe {
        &mut self.0[n]
    }
}
