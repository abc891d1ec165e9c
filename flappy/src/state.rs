use crate::collision::{check_collision, Collision};
use crate::entity::{Bird, Pipes};
use crate::physics::{update_bird, update_pipes};
use crate::rng::Lcg;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Frozen until restart
    GameOver,
}

/// Everything that changes while the game runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub bird: Bird,
    pub pipes: Pipes,
    pub score: u32,
    pub phase: Phase,
    pub rng: Lcg,
}

impl GameState {
    pub fn new(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);
        let pipes = Pipes::spawn(&mut rng);
        Self {
            bird: Bird::spawn(),
            pipes,
            score: 0,
            phase: Phase::Playing,
            rng,
        }
    }

    /// Start a new round. The generator keeps running, so every round gets
    /// fresh gaps.
    pub fn reset(&mut self) {
        self.bird = Bird::spawn();
        self.score = 0;
        self.phase = Phase::Playing;
        self.pipes = Pipes::spawn(&mut self.rng);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Apply jump input, ignored once the game is over
    pub fn jump(&mut self) {
        if !self.is_game_over() {
            self.bird.jump();
        }
    }

    /// Advance one frame: bird physics, pipe scroll and scoring, then
    /// collision. Does nothing while the game is over.
    pub fn step(&mut self) -> Option<Collision> {
        if self.is_game_over() {
            return None;
        }
        update_bird(&mut self.bird);
        update_pipes(self);
        check_collision(self)
    }
}
