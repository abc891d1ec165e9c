//! Axis-aligned bounding box checks of the bird against the floor and pipes.

use log::info;

use crate::consts::*;
use crate::entity::{Bird, Pipe, Pipes};
use crate::state::{GameState, Phase};

/// Rule that ended the game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    /// Bottom edge of the bird went below the screen
    Floor,
    /// Bird hit the pipe in the given pool slot
    Pipe(usize),
}

fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    bird.x + BIRD_WIDTH > pipe.x && bird.x < pipe.right()
}

fn within_gap(bird: &Bird, pipe: &Pipe) -> bool {
    bird.y >= pipe.gap_top() && bird.bottom() <= pipe.gap_bottom()
}

/// First matching rule wins: floor, then pipes in pool order
///
/// There is no ceiling rule, the ceiling is a clamp in [`update_bird`].
///
/// [`update_bird`]: crate::physics::update_bird
pub fn detect(bird: &Bird, pipes: &Pipes) -> Option<Collision> {
    if bird.bottom() > SCREEN_HEIGHT {
        return Some(Collision::Floor);
    }
    pipes
        .iter()
        .position(|pipe| overlaps_horizontally(bird, pipe) && !within_gap(bird, pipe))
        .map(Collision::Pipe)
}

/// Detect a collision and end the game on hit
pub fn check_collision(state: &mut GameState) -> Option<Collision> {
    let hit = detect(&state.bird, &state.pipes);
    if let Some(collision) = hit {
        state.phase = Phase::GameOver;
        info!("game over: {:?}, score {}", collision, state.score);
    }
    hit
}
